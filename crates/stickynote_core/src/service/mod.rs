//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative note collection and its mutations.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod note_store;
