//! Board controller: UI state machines on top of the note store.

use crate::config::BoardConfig;
use crate::controller::event::{classify, InputEvent, Interaction};
use crate::controller::palette::{position_palette, PaletteOverlay};
use crate::model::note::{is_blank_content, NoteColor, NoteId};
use crate::repo::kv_repo::KeyValueStore;
use crate::render::NoteView;
use crate::service::note_store::NoteStore;
use log::debug;

/// Creation form drafts and visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub open: bool,
    pub title: String,
    pub text: String,
}

impl FormState {
    /// Whether the drafts would produce a note.
    pub fn has_content(&self) -> bool {
        !is_blank_content(&self.title, &self.text)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Edit modal drafts and the note they target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub note_id: Option<NoteId>,
    pub title: String,
    pub text: String,
}

/// Everything the host needs to paint besides the cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub form: FormState,
    pub modal: ModalState,
    pub palette: Option<PaletteOverlay>,
}

/// Routes input events into store operations.
pub struct BoardController<S: KeyValueStore, V: NoteView> {
    store: NoteStore<S, V>,
    ui: UiState,
    palette: Vec<NoteColor>,
}

impl<S: KeyValueStore, V: NoteView> BoardController<S, V> {
    /// Opens the store (initial load + render) with all overlays closed.
    pub fn open(kv: S, view: V, config: &BoardConfig) -> Self {
        Self {
            store: NoteStore::open(kv, view, config),
            ui: UiState::default(),
            palette: config.palette.clone(),
        }
    }

    pub fn store(&self) -> &NoteStore<S, V> {
        &self.store
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Swatches the palette overlay offers.
    pub fn palette_colors(&self) -> &[NoteColor] {
        &self.palette
    }

    /// Handles one input event and returns the interactions it produced.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Interaction> {
        let interactions = classify(&event, &self.ui);
        match event {
            InputEvent::FormInput { title, text } => {
                self.ui.form.title = title;
                self.ui.form.text = text;
            }
            InputEvent::ModalInput { title, text } => {
                if self.ui.modal.open {
                    self.ui.modal.title = title;
                    self.ui.modal.text = text;
                }
            }
            _ => {}
        }

        for interaction in &interactions {
            self.apply(interaction.clone());
        }
        interactions
    }

    /// Applies one interaction.
    pub fn apply(&mut self, interaction: Interaction) {
        debug!("event=interaction module=controller kind={}", kind_label(&interaction));
        match interaction {
            Interaction::FormOpen => self.ui.form.open = true,
            Interaction::FormCommit => {
                let form = &self.ui.form;
                let created = self.store.create(form.title.clone(), form.text.clone());
                if created.is_some() {
                    self.ui.form.reset();
                }
            }
            Interaction::FormClose => self.ui.form.reset(),
            Interaction::EditOpen(note_id) => {
                if let Some(note) = self.store.get(note_id) {
                    self.ui.modal = ModalState {
                        open: true,
                        note_id: Some(note_id),
                        title: note.title.clone(),
                        text: note.text.clone(),
                    };
                }
            }
            Interaction::EditCommit => {
                let modal = std::mem::take(&mut self.ui.modal);
                if let (true, Some(note_id)) = (modal.open, modal.note_id) {
                    self.store.update(note_id, modal.title, modal.text);
                }
            }
            Interaction::ColorOpen {
                note_id,
                anchor,
                scroll,
            } => {
                let (x, y) = position_palette(anchor, scroll);
                self.ui.palette = Some(PaletteOverlay { note_id, x, y });
            }
            Interaction::ColorCommit(color) => {
                if let Some(overlay) = self.ui.palette.take() {
                    self.store.update_color(overlay.note_id, color);
                }
            }
            Interaction::ColorClose => self.ui.palette = None,
            Interaction::Delete(note_id) => {
                self.store.delete(note_id);
            }
        }
    }
}

fn kind_label(interaction: &Interaction) -> &'static str {
    match interaction {
        Interaction::FormOpen => "form_open",
        Interaction::FormCommit => "form_commit",
        Interaction::FormClose => "form_close",
        Interaction::EditOpen(_) => "edit_open",
        Interaction::EditCommit => "edit_commit",
        Interaction::ColorOpen { .. } => "color_open",
        Interaction::ColorCommit(_) => "color_commit",
        Interaction::ColorClose => "color_close",
        Interaction::Delete(_) => "delete",
    }
}

#[cfg(test)]
mod tests {
    use super::BoardController;
    use crate::config::BoardConfig;
    use crate::controller::event::{InputEvent, Interaction, Target};
    use crate::repo::kv_repo::MemoryKeyValueStore;
    use crate::render::NullView;

    #[test]
    fn rejected_submit_keeps_form_open_with_drafts() {
        let mut controller =
            BoardController::open(MemoryKeyValueStore::new(), NullView, &BoardConfig::default());
        controller.handle(InputEvent::Click {
            target: Target::FormArea,
        });
        controller.handle(InputEvent::FormInput {
            title: "  ".to_string(),
            text: String::new(),
        });

        let applied = controller.handle(InputEvent::Submit);
        assert_eq!(applied, vec![Interaction::FormCommit]);
        assert!(controller.store().is_empty());
        assert!(controller.ui().form.open);
        assert_eq!(controller.ui().form.title, "  ");
    }

    #[test]
    fn modal_input_is_ignored_while_modal_closed() {
        let mut controller =
            BoardController::open(MemoryKeyValueStore::new(), NullView, &BoardConfig::default());
        controller.handle(InputEvent::ModalInput {
            title: "x".to_string(),
            text: "y".to_string(),
        });
        assert!(controller.ui().modal.title.is_empty());
    }
}
