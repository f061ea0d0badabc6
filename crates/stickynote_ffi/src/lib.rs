//! Flutter bridge for the StickyNote widget core.

pub mod api;
