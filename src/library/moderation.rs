//! Moderation rules
//!
//! A flag is an optional reason string on a catalog video. Flagged videos
//! stay visible in listings and playlists (annotated by the front end) but
//! are barred from playback, search results and new playlist additions.

use super::catalog::Catalog;
use super::error::LibraryError;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Flag a video, recording `reason` or the default
///
/// Returns the video's title and the reason actually recorded. Stopping the
/// video when it is the one playing is the manager's job, not handled here.
pub fn flag_video(
    catalog: &mut Catalog,
    video_id: &str,
    reason: Option<&str>,
) -> Result<(String, String), LibraryError> {
    let video = catalog
        .find_by_id_mut(video_id)
        .ok_or(LibraryError::VideoNotFound)?;
    if video.is_flagged() {
        return Err(LibraryError::AlreadyFlagged);
    }

    let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
    video.set_flag(reason.clone());
    log::debug!("Flagged video {} (reason: {})", video.video_id(), reason);
    Ok((video.title().to_string(), reason))
}

/// Clear a video's flag, returning its title
pub fn allow_video(catalog: &mut Catalog, video_id: &str) -> Result<String, LibraryError> {
    let video = catalog
        .find_by_id_mut(video_id)
        .ok_or(LibraryError::VideoNotFound)?;
    if !video.is_flagged() {
        return Err(LibraryError::NotFlagged);
    }

    video.clear_flag();
    log::debug!("Removed flag from video {}", video.video_id());
    Ok(video.title().to_string())
}
