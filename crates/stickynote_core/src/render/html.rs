//! HTML markup renderer.
//!
//! # Responsibility
//! - Turn a `BoardView` into card markup for web-view hosts.
//!
//! # Invariants
//! - User text is always HTML-escaped.
//! - Every card and toolbar icon carries `data-id` for event delegation.

use crate::model::note::Note;
use crate::render::board::{project_board, BoardView, NoteCard};
use crate::render::NoteView;
use std::fmt::Write;

/// View that keeps the last rendered markup and placeholder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlView {
    markup: String,
    placeholder_visible: bool,
}

impl Default for HtmlView {
    fn default() -> Self {
        Self {
            markup: String::new(),
            placeholder_visible: true,
        }
    }
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup for the notes container.
    pub fn markup(&self) -> &str {
        self.markup.as_str()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }
}

impl NoteView for HtmlView {
    fn render(&mut self, notes: &[Note]) {
        let board = project_board(notes);
        self.placeholder_visible = board.placeholder_visible;
        self.markup = render_board_html(&board);
    }
}

/// Renders the notes container content for `board`.
pub fn render_board_html(board: &BoardView) -> String {
    let mut out = String::new();
    for card in &board.cards {
        write_card(&mut out, card);
    }
    out
}

fn write_card(out: &mut String, card: &NoteCard) {
    let _ = write!(
        out,
        "<div style=\"background: {};\" class=\"note\" data-id=\"{}\">",
        card.background, card.note_id
    );
    if let Some(title) = &card.title {
        let _ = write!(out, "<div class=\"note-title\">{}</div>", escape_html(title));
    }
    let _ = write!(
        out,
        "<div class=\"note-text\">{}</div>",
        escape_html(&card.text)
    );
    out.push_str("<div class=\"toolbar-container\"><div class=\"toolbar\">");
    for action in &card.toolbar {
        let _ = write!(
            out,
            "<img class=\"{}\" data-id=\"{}\">",
            action.kind.class_name(),
            action.note_id
        );
    }
    out.push_str("</div></div></div>");
}

/// Escapes text for element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, HtmlView};
    use crate::model::note::{Note, NoteColor};
    use crate::render::NoteView;

    #[test]
    fn empty_board_renders_nothing_and_shows_placeholder() {
        let mut view = HtmlView::new();
        view.render(&[]);
        assert!(view.placeholder_visible());
        assert!(view.markup().is_empty());
    }

    #[test]
    fn card_markup_tags_ids_and_color() {
        let mut note = Note::new(12, "Groceries", "Milk");
        note.color = NoteColor::parse("#fffa65").unwrap();

        let mut view = HtmlView::new();
        view.render(&[note]);

        let markup = view.markup();
        assert!(!view.placeholder_visible());
        assert!(markup.contains("background: #fffa65;"));
        assert!(markup.contains("class=\"note\" data-id=\"12\""));
        assert!(markup.contains("<div class=\"note-title\">Groceries</div>"));
        assert!(markup.contains("<img class=\"toolbar-color\" data-id=\"12\">"));
        assert!(markup.contains("<img class=\"toolbar-delete\" data-id=\"12\">"));
    }

    #[test]
    fn empty_title_is_omitted() {
        let mut view = HtmlView::new();
        view.render(&[Note::new(1, "", "body only")]);
        assert!(!view.markup().contains("note-title"));
        assert!(view.markup().contains("body only"));
    }

    #[test]
    fn user_text_is_escaped() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );

        let mut view = HtmlView::new();
        view.render(&[Note::new(1, "<script>", "x")]);
        assert!(!view.markup().contains("<script>"));
    }

    #[test]
    fn render_is_idempotent() {
        let notes = vec![Note::new(1, "a", "b"), Note::new(2, "", "c")];
        let mut view = HtmlView::new();
        view.render(&notes);
        let first = view.markup().to_string();
        view.render(&notes);
        assert_eq!(view.markup(), first);
    }
}
