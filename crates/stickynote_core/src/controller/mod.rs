//! Interaction controller.
//!
//! # Responsibility
//! - Classify host input events into typed `Interaction`s.
//! - Drive the creation form, edit modal and color palette state machines.
//! - Translate interactions into `NoteStore` operations.
//!
//! # Invariants
//! - One event is handled at a time; interactions from one event apply in order.
//! - Every id carried by an event may be stale; misses are no-ops.
//! - A delete click never also commits the form or opens the modal.

pub mod board_controller;
pub mod event;
pub mod palette;

pub use board_controller::{BoardController, FormState, ModalState, UiState};
pub use event::{classify, InputEvent, Interaction, Target};
pub use palette::{position_palette, PaletteOverlay, PointerAnchor, ScrollOffset};
