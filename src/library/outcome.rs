//! Structured results of the user-facing operations
//!
//! The front end owns all presentation; these carry exactly the data its
//! message templates need.

use crate::model::Video;

/// Result of starting playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Title that was implicitly stopped by the switch, if any
    pub stopped: Option<String>,

    /// Title now playing
    pub title: String,
}

/// Read-only projection of the current playback state
#[derive(Debug, Clone)]
pub struct NowPlaying {
    /// The current video
    pub video: Video,

    /// Whether playback is paused
    pub paused: bool,
}

/// Result of flagging a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    /// Title of the flagged video
    pub title: String,

    /// Reason recorded on the flag (the default when none was supplied)
    pub reason: String,

    /// Title whose playback was stopped because it was the flagged video
    pub stopped: Option<String>,
}

/// Result of a title or tag search
///
/// `matches` is ordered by title ascending and is the list the 1-indexed
/// selection step refers to. An empty list is the "no results" outcome.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The term as typed, for echoing in headings
    pub term: String,

    /// Matching unflagged videos, sorted by title
    pub matches: Vec<Video>,
}
