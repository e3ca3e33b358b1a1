use thiserror::Error;

/// Business failures of the library operations
///
/// Every operation reports failure through this enum instead of panicking;
/// all of these are expected, recoverable outcomes. The display string is
/// the kind-specific phrase only; the front end wraps it in the operation
/// message ("Cannot play video: ...", "Cannot add video to <name>: ...").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    DuplicatePlaylist,

    #[error("Video already added")]
    DuplicateVideo,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { reason: String },

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,
}
