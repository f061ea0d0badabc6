//! Core domain logic for the StickyNote widget.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod service;

pub use config::BoardConfig;
pub use controller::{
    classify, BoardController, FormState, InputEvent, Interaction, ModalState, PaletteOverlay,
    PointerAnchor, ScrollOffset, Target, UiState,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    default_palette, ColorParseError, Note, NoteColor, NoteId, DEFAULT_NOTE_COLOR,
    DEFAULT_PALETTE, MAX_NOTE_ID,
};
pub use render::{
    project_board, BoardView, HtmlView, NoteCard, NoteView, NullView, ProjectionView,
    ToolbarAction, ToolbarKind,
};
pub use repo::kv_repo::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use repo::note_persistence::{NotePersistence, DEFAULT_STORAGE_KEY};
pub use repo::{RepoError, RepoResult};
pub use service::note_store::NoteStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
