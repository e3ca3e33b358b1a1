//! Video Console - a single-user video library backend
//!
//! This library keeps an in-memory video catalog with playlists, playback
//! state, moderation flags and search, plus the interactive console that
//! drives it.

pub mod library;
pub mod model;
pub mod repl;
pub mod seed;

pub use library::{LibraryError, LibraryManager};
pub use model::Video;
