//! Board configuration.
//!
//! # Responsibility
//! - Hold the tunables shared by store, persistence and color picker.

use crate::model::note::{default_palette, NoteColor};
use crate::repo::note_persistence::DEFAULT_STORAGE_KEY;

/// Widget-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key the note collection is persisted under.
    pub storage_key: String,
    /// Color assigned to newly created notes.
    pub default_color: NoteColor,
    /// Swatches offered by the color picker, in display order.
    pub palette: Vec<NoteColor>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_color: NoteColor::default(),
            palette: default_palette(),
        }
    }
}
