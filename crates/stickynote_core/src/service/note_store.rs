//! Note store: the authoritative in-memory note collection.
//!
//! # Responsibility
//! - Provide create/update/update-color/delete over an ordered collection.
//! - Persist the whole collection and redraw the view after every mutation.
//!
//! # Invariants
//! - Blank notes (title and text empty after trimming) are never created.
//! - New ids are `max(existing) + 1`, or `1` for an empty store; creation is
//!   rejected once that would exceed `MAX_NOTE_ID`.
//! - Operations on unknown ids are no-ops: nothing is saved or redrawn.
//! - A failed save is logged and never rolls back in-memory state.

use crate::config::BoardConfig;
use crate::model::note::{is_blank_content, Note, NoteColor, NoteId, MAX_NOTE_ID};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::note_persistence::NotePersistence;
use crate::render::NoteView;
use log::{debug, info, warn};

/// Note collection bound to one persistence adapter and one view.
pub struct NoteStore<S: KeyValueStore, V: NoteView> {
    notes: Vec<Note>,
    persistence: NotePersistence<S>,
    view: V,
    default_color: NoteColor,
}

impl<S: KeyValueStore, V: NoteView> NoteStore<S, V> {
    /// Loads the persisted collection and performs the initial render.
    ///
    /// Missing or corrupt persisted state yields an empty store.
    pub fn open(store: S, view: V, config: &BoardConfig) -> Self {
        let persistence = NotePersistence::with_key(store, config.storage_key.clone());
        let notes = persistence.load();
        info!(
            "event=store_open module=service status=ok key={} count={}",
            persistence.key(),
            notes.len()
        );

        let mut this = Self {
            notes,
            persistence,
            view,
            default_color: config.default_color.clone(),
        };
        this.view.render(&this.notes);
        this
    }

    /// Notes in visual order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn persistence(&self) -> &NotePersistence<S> {
        &self.persistence
    }

    /// Appends a new note with the default color.
    ///
    /// Returns `None` without touching storage when both fields are blank or
    /// no id is left.
    pub fn create(&mut self, title: impl Into<String>, text: impl Into<String>) -> Option<Note> {
        let title = title.into();
        let text = text.into();
        if is_blank_content(&title, &text) {
            debug!("event=note_create module=service status=rejected reason=blank");
            return None;
        }

        let Some(id) = self.next_id() else {
            warn!(
                "event=note_create module=service status=rejected reason=id_exhausted count={}",
                self.notes.len()
            );
            return None;
        };

        let mut note = Note::new(id, title, text);
        note.color = self.default_color.clone();
        self.notes.push(note.clone());
        info!(
            "event=note_create module=service status=ok id={} count={}",
            note.id,
            self.notes.len()
        );
        self.commit();
        Some(note)
    }

    /// Replaces title and text of note `id`, keeping id and color.
    ///
    /// Returns `false` when `id` is unknown.
    pub fn update(&mut self, id: NoteId, title: impl Into<String>, text: impl Into<String>) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=service status=skipped reason=not_found id={id}");
            return false;
        };
        note.title = title.into();
        note.text = text.into();
        info!("event=note_update module=service status=ok id={id}");
        self.commit();
        true
    }

    /// Replaces the color of note `id`.
    ///
    /// Returns `false` when `id` is unknown.
    pub fn update_color(&mut self, id: NoteId, color: NoteColor) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!(
                "event=note_update_color module=service status=skipped reason=not_found id={id}"
            );
            return false;
        };
        note.color = color;
        info!(
            "event=note_update_color module=service status=ok id={} color={}",
            id, note.color
        );
        self.commit();
        true
    }

    /// Removes note `id`.
    ///
    /// Returns `false` when `id` is unknown.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            debug!("event=note_delete module=service status=skipped reason=not_found id={id}");
            return false;
        }
        info!(
            "event=note_delete module=service status=ok id={} count={}",
            id,
            self.notes.len()
        );
        self.commit();
        true
    }

    /// `None` once the highest id reaches `MAX_NOTE_ID`.
    fn next_id(&self) -> Option<NoteId> {
        match self.notes.iter().map(|note| note.id).max() {
            None => Some(1),
            Some(max) => max.checked_add(1).filter(|id| *id <= MAX_NOTE_ID),
        }
    }

    fn commit(&mut self) {
        if let Err(err) = self.persistence.save(&self.notes) {
            warn!(
                "event=notes_save module=service status=error error_code=save_failed count={} error={}",
                self.notes.len(),
                err
            );
        }
        self.view.render(&self.notes);
    }
}
