//! Structured board projection.

use crate::model::note::{Note, NoteColor, NoteId};

/// Per-card toolbar affordance kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarKind {
    /// Opens the color palette on hover.
    Color,
    /// Deletes the note on click.
    Delete,
}

impl ToolbarKind {
    /// CSS class used by markup and host hit-testing.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Color => "toolbar-color",
            Self::Delete => "toolbar-delete",
        }
    }
}

/// One toolbar affordance, tagged with its note id for delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarAction {
    pub kind: ToolbarKind,
    pub note_id: NoteId,
}

/// Visual card for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub note_id: NoteId,
    pub background: NoteColor,
    /// `None` when the note title is empty.
    pub title: Option<String>,
    pub text: String,
    pub toolbar: [ToolbarAction; 2],
}

/// Whole-board projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Shown only when there are no cards.
    pub placeholder_visible: bool,
    /// Cards in collection order.
    pub cards: Vec<NoteCard>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            placeholder_visible: true,
            cards: Vec::new(),
        }
    }
}

/// Projects notes into cards, in collection order.
pub fn project_board(notes: &[Note]) -> BoardView {
    let cards = notes.iter().map(project_card).collect::<Vec<_>>();
    BoardView {
        placeholder_visible: cards.is_empty(),
        cards,
    }
}

fn project_card(note: &Note) -> NoteCard {
    NoteCard {
        note_id: note.id,
        background: note.color.clone(),
        title: (!note.title.is_empty()).then(|| note.title.clone()),
        text: note.text.clone(),
        toolbar: [
            ToolbarAction {
                kind: ToolbarKind::Color,
                note_id: note.id,
            },
            ToolbarAction {
                kind: ToolbarKind::Delete,
                note_id: note.id,
            },
        ],
    }
}
