//! Unified playback and library state management
//!
//! This is the core of the backend: the video catalog, the playlist store,
//! the playback state machine and the moderation rules, orchestrated by the
//! [`LibraryManager`] facade. Everything here is synchronous, in-memory and
//! I/O-free; operations return structured outcomes or a [`LibraryError`].

mod catalog;
mod error;
mod manager;
mod moderation;
mod outcome;
mod playback;
mod playlists;

pub use catalog::Catalog;
pub use error::LibraryError;
pub use manager::LibraryManager;
pub use moderation::DEFAULT_FLAG_REASON;
pub use outcome::{FlagOutcome, NowPlaying, PlayOutcome, SearchOutcome};
pub use playback::PlaybackState;
pub use playlists::PlaylistStore;

/// Normalized key for case-insensitive identity matching
///
/// Applied at every comparison site (ids, titles, playlist names, tags) so
/// lookups stay consistent while storage keeps the original casing.
pub(crate) fn lookup_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality through the same normalization as `lookup_key`
pub(crate) fn key_eq(a: &str, b: &str) -> bool {
    lookup_key(a) == lookup_key(b)
}
