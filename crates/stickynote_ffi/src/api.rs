//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the single widget session (open, dispatch input) to Dart via FRB.
//! - Translate FFI-friendly events and snapshots to and from core types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls are serialized through one session mutex.
//! - Stale or malformed ids and colors degrade to no-ops.

use log::{info, warn};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use stickynote_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner,
    BoardConfig, BoardController, InputEvent, NoteColor, NoteId, PointerAnchor, ProjectionView,
    ScrollOffset, SqliteKeyValueStore, Target,
};

const BOARD_DB_FILE_NAME: &str = "stickynote.sqlite3";
const BOARD_DB_PATH_ENV: &str = "STICKYNOTE_DB_PATH";

type Board = BoardController<SqliteKeyValueStore, ProjectionView>;

static BOARD_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static BOARD: Lazy<Mutex<Option<Board>>> = Lazy::new(|| Mutex::new(None));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects the build-mode default (`debug` or `info`).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(resolve_log_level(&level), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

fn resolve_log_level(level: &str) -> &str {
    if level.trim().is_empty() {
        default_log_level()
    } else {
        level
    }
}

/// Input event as reported by the Flutter host after hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// Tap inside the creation form.
    FormTap,
    FormCloseTap,
    FormSubmit,
    FormInput { title: String, text: String },
    /// Tap on a card body (not its toolbar).
    NoteTap { note_id: i64 },
    DeleteTap { note_id: i64 },
    /// Pointer entered a card's color icon.
    ColorIconEnter {
        note_id: i64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        scroll_x: f64,
        scroll_y: f64,
    },
    /// Pointer left a card's color icon.
    ColorIconExit { note_id: i64, into_palette: bool },
    /// Pointer left the palette overlay.
    PaletteExit { into_palette: bool },
    SwatchTap { color: String },
    ModalTap,
    ModalCloseTap,
    ModalInput { title: String, text: String },
    /// Tap anywhere else on the board.
    OutsideTap,
}

/// One rendered note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub note_id: i64,
    /// Hex background color, e.g. `#fff`.
    pub color: String,
    /// `None` when the title is empty.
    pub title: Option<String>,
    pub text: String,
}

/// Open palette overlay and its translate offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteItem {
    pub note_id: i64,
    pub x: f64,
    pub y: f64,
}

/// Full board snapshot returned after every call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
    pub placeholder_visible: bool,
    pub cards: Vec<CardItem>,
    pub form_open: bool,
    pub form_title: String,
    pub form_text: String,
    pub modal_open: bool,
    pub modal_title: String,
    pub modal_text: String,
    pub palette: Option<PaletteItem>,
}

impl BoardResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            placeholder_visible: true,
            ..Self::default()
        }
    }
}

/// Opens the widget session, loading persisted notes.
///
/// # FFI contract
/// - Idempotent: later calls return the current snapshot.
/// - Never panics; open failures are reported in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn board_open() -> BoardResponse {
    with_board(|board| snapshot(board))
}

/// Dispatches one input event and returns the updated snapshot.
///
/// Opens the session first when needed.
#[flutter_rust_bridge::frb(sync)]
pub fn board_dispatch(event: WidgetEvent) -> BoardResponse {
    with_board(|board| {
        let interactions = board.handle(to_input_event(event));
        info!(
            "event=board_dispatch module=ffi status=ok interactions={}",
            interactions.len()
        );
        snapshot(board)
    })
}

/// Swatches offered by the palette, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_palette() -> Vec<String> {
    BoardConfig::default()
        .palette
        .into_iter()
        .map(String::from)
        .collect()
}

fn with_board(f: impl FnOnce(&mut Board) -> BoardResponse) -> BoardResponse {
    let mut guard = match BOARD.lock() {
        Ok(guard) => guard,
        // Store mutations are total, so a poisoned lock still guards consistent state.
        Err(poisoned) => poisoned.into_inner(),
    };

    if guard.is_none() {
        let db_path = resolve_board_db_path();
        match SqliteKeyValueStore::open(&db_path) {
            Ok(kv) => {
                *guard = Some(BoardController::open(
                    kv,
                    ProjectionView::new(),
                    &BoardConfig::default(),
                ));
            }
            Err(err) => {
                warn!(
                    "event=board_open module=ffi status=error error_code=db_open_failed error={}",
                    err
                );
                return BoardResponse::failure(format!("board_open failed: {err}"));
            }
        }
    }

    match guard.as_mut() {
        Some(board) => f(board),
        None => BoardResponse::failure("board session unavailable"),
    }
}

fn snapshot(board: &Board) -> BoardResponse {
    let view = board.store().view().board();
    let ui = board.ui();
    BoardResponse {
        ok: true,
        message: String::new(),
        placeholder_visible: view.placeholder_visible,
        cards: view
            .cards
            .iter()
            .map(|card| CardItem {
                note_id: to_ffi_id(card.note_id),
                color: card.background.to_string(),
                title: card.title.clone(),
                text: card.text.clone(),
            })
            .collect(),
        form_open: ui.form.open,
        form_title: ui.form.title.clone(),
        form_text: ui.form.text.clone(),
        modal_open: ui.modal.open,
        modal_title: ui.modal.title.clone(),
        modal_text: ui.modal.text.clone(),
        palette: ui.palette.map(|overlay| PaletteItem {
            note_id: to_ffi_id(overlay.note_id),
            x: overlay.x,
            y: overlay.y,
        }),
    }
}

fn to_input_event(event: WidgetEvent) -> InputEvent {
    let click = |target| InputEvent::Click { target };
    match event {
        WidgetEvent::FormTap => click(Target::FormArea),
        WidgetEvent::FormCloseTap => click(Target::FormCloseButton),
        WidgetEvent::FormSubmit => InputEvent::Submit,
        WidgetEvent::FormInput { title, text } => InputEvent::FormInput { title, text },
        WidgetEvent::NoteTap { note_id } => click(note_target(note_id, Target::NoteBody)),
        WidgetEvent::DeleteTap { note_id } => click(note_target(note_id, Target::DeleteIcon)),
        WidgetEvent::ColorIconEnter {
            note_id,
            left,
            top,
            width,
            height,
            scroll_x,
            scroll_y,
        } => InputEvent::PointerOver {
            target: note_target(note_id, Target::ColorIcon),
            anchor: PointerAnchor {
                left,
                top,
                width,
                height,
            },
            scroll: ScrollOffset {
                x: scroll_x,
                y: scroll_y,
            },
        },
        WidgetEvent::ColorIconExit {
            note_id,
            into_palette,
        } => InputEvent::PointerOut {
            target: note_target(note_id, Target::ColorIcon),
            related: exit_target(into_palette),
        },
        WidgetEvent::PaletteExit { into_palette } => InputEvent::PointerOut {
            target: Target::Palette,
            related: exit_target(into_palette),
        },
        WidgetEvent::SwatchTap { color } => match NoteColor::parse(&color) {
            Ok(color) => click(Target::PaletteSwatch(color)),
            Err(err) => {
                warn!("event=board_dispatch module=ffi status=skipped reason=invalid_color error={err}");
                click(Target::Palette)
            }
        },
        WidgetEvent::ModalTap => click(Target::Modal),
        WidgetEvent::ModalCloseTap => click(Target::ModalCloseButton),
        WidgetEvent::ModalInput { title, text } => InputEvent::ModalInput { title, text },
        WidgetEvent::OutsideTap => click(Target::Elsewhere),
    }
}

/// Maps a Dart id to a note target; ids that cannot exist hit nothing.
fn note_target(note_id: i64, make: fn(NoteId) -> Target) -> Target {
    match NoteId::try_from(note_id) {
        Ok(id) if id > 0 => make(id),
        _ => Target::Elsewhere,
    }
}

fn exit_target(into_palette: bool) -> Target {
    if into_palette {
        Target::Palette
    } else {
        Target::Elsewhere
    }
}

/// Store ids never exceed `MAX_NOTE_ID`, so every id maps to a distinct i64.
fn to_ffi_id(note_id: NoteId) -> i64 {
    i64::try_from(note_id).unwrap_or(i64::MAX)
}

fn resolve_board_db_path() -> PathBuf {
    BOARD_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(BOARD_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(BOARD_DB_FILE_NAME)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{
        board_dispatch, board_open, board_palette, core_version, init_logging, ping,
        resolve_log_level, to_ffi_id, to_input_event, WidgetEvent,
    };
    use std::time::{SystemTime, UNIX_EPOCH};
    use stickynote_core::{default_log_level, InputEvent, Target, MAX_NOTE_ID};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn blank_log_level_falls_back_to_build_default() {
        assert_eq!(resolve_log_level("  "), default_log_level());
        assert_eq!(resolve_log_level("warn"), "warn");
    }

    #[test]
    fn highest_note_id_round_trips_through_dart_ids() {
        let ffi_id = to_ffi_id(MAX_NOTE_ID);
        assert_eq!(ffi_id, i64::MAX);
        assert_eq!(
            to_input_event(WidgetEvent::DeleteTap { note_id: ffi_id }),
            InputEvent::Click {
                target: Target::DeleteIcon(MAX_NOTE_ID)
            }
        );
    }

    #[test]
    fn palette_lists_default_swatches() {
        let palette = board_palette();
        assert_eq!(palette.first().map(String::as_str), Some("#fff"));
        assert!(palette.iter().any(|color| color == "#fffa65"));
    }

    #[test]
    fn invalid_ids_and_colors_hit_nothing() {
        assert_eq!(
            to_input_event(WidgetEvent::DeleteTap { note_id: -4 }),
            InputEvent::Click {
                target: Target::Elsewhere
            }
        );
        assert_eq!(
            to_input_event(WidgetEvent::SwatchTap {
                color: "blue".to_string()
            }),
            InputEvent::Click {
                target: Target::Palette
            }
        );
    }

    #[test]
    fn dispatch_creates_recolors_and_deletes_note() {
        let opened = board_open();
        assert!(opened.ok, "{}", opened.message);
        let before = opened.cards.len();

        let token = unique_token("ffi-note");
        board_dispatch(WidgetEvent::FormTap);
        board_dispatch(WidgetEvent::FormInput {
            title: token.clone(),
            text: "body".to_string(),
        });
        let created = board_dispatch(WidgetEvent::FormSubmit);
        assert!(created.ok, "{}", created.message);
        assert_eq!(created.cards.len(), before + 1);
        assert!(!created.form_open);
        let card = created
            .cards
            .iter()
            .find(|card| card.title.as_deref() == Some(token.as_str()))
            .expect("created card should be rendered")
            .clone();

        board_dispatch(WidgetEvent::ColorIconEnter {
            note_id: card.note_id,
            left: 10.0,
            top: 50.0,
            width: 16.0,
            height: 16.0,
            scroll_x: 0.0,
            scroll_y: 40.0,
        });
        let recolored = board_dispatch(WidgetEvent::SwatchTap {
            color: "#fffa65".to_string(),
        });
        assert!(recolored.palette.is_none());
        assert!(recolored
            .cards
            .iter()
            .any(|item| item.note_id == card.note_id && item.color == "#fffa65"));

        let deleted = board_dispatch(WidgetEvent::DeleteTap {
            note_id: card.note_id,
        });
        assert_eq!(deleted.cards.len(), before);
        assert!(deleted.cards.iter().all(|item| item.note_id != card.note_id));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
