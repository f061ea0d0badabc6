//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, persistence and view.
//! - Validate color values before they reach storage.
//!
//! # Invariants
//! - Every note is identified by a positive `NoteId` unique within a store.
//! - Colors are always well-formed hex values.

pub mod note;
