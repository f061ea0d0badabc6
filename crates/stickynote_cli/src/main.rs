//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `stickynote_core` linkage.
//! - Drive one scripted widget session against an in-memory store and print
//!   the rendered board, so controller wiring can be checked without a host.

use stickynote_core::{
    BoardConfig, BoardController, HtmlView, InputEvent, MemoryKeyValueStore, NoteColor,
    PointerAnchor, ScrollOffset, Target,
};

fn main() {
    println!("stickynote_core ping={}", stickynote_core::ping());
    println!("stickynote_core version={}", stickynote_core::core_version());

    let mut board = BoardController::open(
        MemoryKeyValueStore::new(),
        HtmlView::new(),
        &BoardConfig::default(),
    );
    println!(
        "placeholder_visible={}",
        board.store().view().placeholder_visible()
    );

    let mut script = vec![
        InputEvent::Click {
            target: Target::FormArea,
        },
        InputEvent::FormInput {
            title: "Groceries".to_string(),
            text: "Milk".to_string(),
        },
        InputEvent::Submit,
        InputEvent::PointerOver {
            target: Target::ColorIcon(1),
            anchor: PointerAnchor::default(),
            scroll: ScrollOffset::default(),
        },
    ];
    if let Ok(color) = NoteColor::parse("#fffa65") {
        script.push(InputEvent::Click {
            target: Target::PaletteSwatch(color),
        });
    }

    for event in script {
        let applied = board.handle(event);
        println!("applied={applied:?}");
    }

    println!(
        "placeholder_visible={}",
        board.store().view().placeholder_visible()
    );
    println!("{}", board.store().view().markup());
}
