//! View rendering.
//!
//! # Responsibility
//! - Project the note collection into cards plus an empty-state flag.
//! - Provide the `NoteView` seam the store redraws through.
//!
//! # Invariants
//! - Rendering is a pure function of the collection; calling it twice with
//!   the same notes yields the same output.
//! - The whole board is redrawn on every call; there is no diffing.

pub mod board;
pub mod html;

use crate::model::note::Note;

pub use board::{project_board, BoardView, NoteCard, ToolbarAction, ToolbarKind};
pub use html::HtmlView;

/// Redraw target notified by the store after every mutation.
pub trait NoteView {
    fn render(&mut self, notes: &[Note]);
}

/// View that keeps the last structured projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionView {
    last: BoardView,
    renders: u64,
}

impl ProjectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recent projection.
    pub fn board(&self) -> &BoardView {
        &self.last
    }

    /// Number of redraws performed so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl NoteView for ProjectionView {
    fn render(&mut self, notes: &[Note]) {
        self.last = project_board(notes);
        self.renders += 1;
    }
}

/// View that discards every redraw.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl NoteView for NullView {
    fn render(&mut self, _notes: &[Note]) {}
}
