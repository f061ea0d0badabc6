//! Color palette overlay placement.

use crate::model::note::NoteId;

/// Vertical lift applied above the current scroll position.
pub const PALETTE_VERTICAL_OFFSET: f64 = 20.0;

/// Viewport-relative bounding box of the hovered color icon.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerAnchor {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Document scroll position at the time of the hover.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Open palette: target note plus translate offsets for the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteOverlay {
    pub note_id: NoteId,
    pub x: f64,
    pub y: f64,
}

/// Computes the overlay translation for an icon anchor.
///
/// `x` is the icon's viewport left edge with no horizontal scroll
/// compensation, and `y` ignores the icon's own top edge. Both match the
/// shipped widget; pages scrolled horizontally place the palette off the
/// icon. Known defect, kept until the host stylesheet is reworked.
pub fn position_palette(anchor: PointerAnchor, scroll: ScrollOffset) -> (f64, f64) {
    (anchor.left, scroll.y - PALETTE_VERTICAL_OFFSET)
}
