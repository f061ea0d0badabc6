//! Note collection persistence adapter.
//!
//! # Responsibility
//! - Serialize the full note collection to JSON under one fixed key.
//! - Deserialize it back, degrading to an empty collection on any defect.
//!
//! # Invariants
//! - Persisted shape is a JSON array of `{id, title, text, color}`.
//! - `load` never returns an error; corrupt state is logged, not surfaced.
//! - A loaded collection only holds ids in `1..=MAX_NOTE_ID`, each once.

use crate::model::note::{Note, MAX_NOTE_ID};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};
use std::collections::HashSet;

/// Default key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Saves and loads the note collection through a `KeyValueStore`.
pub struct NotePersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> NotePersistence<S> {
    /// Creates an adapter using `DEFAULT_STORAGE_KEY`.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates an adapter storing the collection under `key`.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrites the persisted collection with `notes`.
    ///
    /// # Errors
    /// - `RepoError::Serialize` if JSON encoding fails.
    /// - `RepoError::Db` if the backing store rejects the write.
    pub fn save(&mut self, notes: &[Note]) -> RepoResult<()> {
        let bytes = serde_json::to_vec(notes)?;
        self.store.put(self.key.as_str(), &bytes)?;
        debug!(
            "event=notes_save module=repo status=ok count={} bytes={}",
            notes.len(),
            bytes.len()
        );
        Ok(())
    }

    /// Reads the persisted collection.
    ///
    /// Returns an empty collection when the key is absent, the read fails, or
    /// the stored bytes are not a well-formed note array.
    pub fn load(&self) -> Vec<Note> {
        let bytes = match self.store.get(self.key.as_str()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("event=notes_load module=repo status=empty reason=missing_key");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=error error_code=read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match decode_notes(&bytes) {
            Ok(notes) => {
                debug!(
                    "event=notes_load module=repo status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=repo status=error error_code=corrupt_state bytes={} error={}",
                    bytes.len(),
                    err
                );
                Vec::new()
            }
        }
    }
}

/// Decodes persisted bytes into a validated note collection.
///
/// # Errors
/// - `RepoError::Serialize` when the bytes are not a JSON note array.
/// - `RepoError::InvalidData` when ids are zero, above `MAX_NOTE_ID`, or
///   duplicated.
pub fn decode_notes(bytes: &[u8]) -> RepoResult<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if note.id == 0 || note.id > MAX_NOTE_ID {
            return Err(RepoError::InvalidData(format!(
                "note id {} outside 1..={MAX_NOTE_ID}",
                note.id
            )));
        }
        if !seen.insert(note.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate note id {}",
                note.id
            )));
        }
    }
    Ok(notes)
}
