//! Input events, delegation targets and typed interactions.
//!
//! Hosts resolve every pointer event against a single ancestor and report
//! the `Target` it landed on; `classify` turns that into the ordered list of
//! interactions to apply.

use crate::controller::board_controller::UiState;
use crate::controller::palette::{PointerAnchor, ScrollOffset};
use crate::model::note::{NoteColor, NoteId};

/// Delegated element an input event was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Anywhere inside the creation form except its close button.
    FormArea,
    FormCloseButton,
    /// A note card outside its toolbar icons.
    NoteBody(NoteId),
    ColorIcon(NoteId),
    DeleteIcon(NoteId),
    /// The palette overlay background.
    Palette,
    PaletteSwatch(NoteColor),
    /// The edit modal outside its close button.
    Modal,
    ModalCloseButton,
    Elsewhere,
}

impl Target {
    fn is_palette(&self) -> bool {
        matches!(self, Self::Palette | Self::PaletteSwatch(_))
    }
}

/// Raw input reported by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Click {
        target: Target,
    },
    /// Explicit submit of the creation form.
    Submit,
    PointerOver {
        target: Target,
        anchor: PointerAnchor,
        scroll: ScrollOffset,
    },
    PointerOut {
        target: Target,
        /// Element the pointer moved onto.
        related: Target,
    },
    /// Creation form drafts changed.
    FormInput {
        title: String,
        text: String,
    },
    /// Edit modal drafts changed.
    ModalInput {
        title: String,
        text: String,
    },
}

/// Typed interaction dispatched by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    FormOpen,
    FormCommit,
    FormClose,
    EditOpen(NoteId),
    EditCommit,
    ColorOpen {
        note_id: NoteId,
        anchor: PointerAnchor,
        scroll: ScrollOffset,
    },
    ColorCommit(NoteColor),
    ColorClose,
    Delete(NoteId),
}

/// Classifies one input event against current UI state.
///
/// Draft edits (`FormInput`, `ModalInput`) classify to nothing; the
/// controller applies them directly.
pub fn classify(event: &InputEvent, ui: &UiState) -> Vec<Interaction> {
    match event {
        InputEvent::Click { target } => classify_click(target, ui),
        InputEvent::Submit => vec![Interaction::FormCommit],
        InputEvent::PointerOver {
            target: Target::ColorIcon(note_id),
            anchor,
            scroll,
        } => vec![Interaction::ColorOpen {
            note_id: *note_id,
            anchor: *anchor,
            scroll: *scroll,
        }],
        InputEvent::PointerOver { .. } => Vec::new(),
        InputEvent::PointerOut { target, related } => {
            let leaves_trigger = matches!(target, Target::ColorIcon(_)) || target.is_palette();
            if ui.palette.is_some() && leaves_trigger && !related.is_palette() {
                vec![Interaction::ColorClose]
            } else {
                Vec::new()
            }
        }
        InputEvent::FormInput { .. } | InputEvent::ModalInput { .. } => Vec::new(),
    }
}

fn classify_click(target: &Target, ui: &UiState) -> Vec<Interaction> {
    let mut interactions = Vec::new();
    match target {
        Target::FormArea => return vec![Interaction::FormOpen],
        Target::FormCloseButton => return vec![Interaction::FormClose],
        Target::DeleteIcon(note_id) => return vec![Interaction::Delete(*note_id)],
        Target::PaletteSwatch(color) => interactions.push(Interaction::ColorCommit(color.clone())),
        Target::ModalCloseButton => interactions.push(Interaction::EditCommit),
        Target::NoteBody(_)
        | Target::ColorIcon(_)
        | Target::Palette
        | Target::Modal
        | Target::Elsewhere => {}
    }

    if let Some(outside) = outside_click(ui) {
        interactions.push(outside);
    }
    if let Target::NoteBody(note_id) = target {
        interactions.push(Interaction::EditOpen(*note_id));
    }
    interactions
}

/// Form reaction to a click outside the form area.
fn outside_click(ui: &UiState) -> Option<Interaction> {
    if ui.form.has_content() {
        Some(Interaction::FormCommit)
    } else if ui.form.open {
        Some(Interaction::FormClose)
    } else {
        None
    }
}
