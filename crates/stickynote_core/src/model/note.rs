//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record (`id`, `title`, `text`, `color`).
//! - Provide the validated `NoteColor` value type and default palette.
//!
//! # Invariants
//! - `id` is positive and never reused for another note in the same store.
//! - `color` serializes as its canonical string form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex color regex")
});

/// Neutral background assigned to newly created notes.
pub const DEFAULT_NOTE_COLOR: &str = "#fff";

/// Swatches offered by the color picker, in display order.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#fff", "#d7aefb", "#fbbc04", "#fffa65", "#ccff90", "#a7ffeb", "#cbf0f8", "#fdcfe8",
    "#e6c9a8", "#e8eaed",
];

/// Identifier of one note within a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// Largest id a note may carry; hosts address notes as signed 64-bit ints.
pub const MAX_NOTE_ID: NoteId = i64::MAX as NoteId;

/// Error returned when a color string is not a CSS hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub value: String,
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid note color `{}`; expected #rgb, #rgba, #rrggbb or #rrggbbaa",
            self.value
        )
    }
}

impl Error for ColorParseError {}

/// Background color of a note card.
///
/// Stored in the exact spelling the user picked (`#fff` stays `#fff`), so
/// persisted bytes round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteColor(String);

impl NoteColor {
    /// Parses and validates a hex color.
    ///
    /// # Errors
    /// - Returns `ColorParseError` when `value` is not `#` plus 3/4/6/8 hex digits.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        if HEX_COLOR_RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ColorParseError {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for NoteColor {
    fn default() -> Self {
        Self(DEFAULT_NOTE_COLOR.to_string())
    }
}

impl Display for NoteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NoteColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NoteColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<NoteColor> for String {
    fn from(value: NoteColor) -> Self {
        value.0
    }
}

/// Returns the default palette as validated colors.
pub fn default_palette() -> Vec<NoteColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|value| NoteColor((*value).to_string()))
        .collect()
}

/// One user-authored note.
///
/// Field order matches the persisted JSON object `{id, title, text, color}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// May be empty; empty titles are omitted by the view.
    pub title: String,
    /// May be empty as long as `title` is not.
    pub text: String,
    pub color: NoteColor,
}

impl Note {
    /// Creates a note with the default color.
    pub fn new(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            color: NoteColor::default(),
        }
    }

    /// Returns whether both fields are blank after trimming.
    pub fn is_blank(&self) -> bool {
        is_blank_content(&self.title, &self.text)
    }
}

/// Returns whether a title/text pair carries no content.
pub fn is_blank_content(title: &str, text: &str) -> bool {
    title.trim().is_empty() && text.trim().is_empty()
}
