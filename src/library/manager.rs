//! Library manager
//!
//! The facade over catalog, playlists, playback and moderation. Every
//! user-facing operation lives here, returns a structured outcome and
//! performs no I/O; the front end turns outcomes into text.

use super::catalog::Catalog;
use super::error::LibraryError;
use super::outcome::{FlagOutcome, NowPlaying, PlayOutcome, SearchOutcome};
use super::playback::PlaybackState;
use super::playlists::PlaylistStore;
use super::{key_eq, lookup_key, moderation};
use crate::model::Video;
use rand::Rng;

/// Single owner of all library state
///
/// Construct one per session and pass it wherever needed; there is no
/// global instance.
#[derive(Debug)]
pub struct LibraryManager {
    catalog: Catalog,
    playlists: PlaylistStore,
    playback: PlaybackState,

    /// Video ids of the last search results, pending selection
    search_context: Vec<String>,
}

impl LibraryManager {
    /// Create a manager over a loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            playback: PlaybackState::new(),
            search_context: Vec::new(),
        }
    }

    /// Total number of videos in the library
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// All videos ordered by title ascending, flagged ones included
    pub fn all_videos(&self) -> Vec<&Video> {
        self.catalog.by_title_sorted()
    }

    /// Start playing a video by id
    ///
    /// A different current video is implicitly stopped first; its title is
    /// reported in the outcome. Flagged videos cannot be played.
    pub fn play(&mut self, video_id: &str) -> Result<PlayOutcome, LibraryError> {
        let video = self
            .catalog
            .find_by_id(video_id)
            .ok_or(LibraryError::VideoNotFound)?;
        if let Some(reason) = video.flag_reason() {
            return Err(LibraryError::VideoFlagged {
                reason: reason.to_string(),
            });
        }

        let title = video.title().to_string();
        let stopped = self.playback.start(title.clone());
        log::debug!("Playing video: {}", title);
        Ok(PlayOutcome { stopped, title })
    }

    /// Stop the current video, returning its title
    pub fn stop(&mut self) -> Result<String, LibraryError> {
        self.playback.stop()
    }

    /// Play a uniformly random unflagged video
    ///
    /// The candidate pool is validated first: with nothing unflagged this
    /// fails and the current playback state is left untouched.
    pub fn play_random(&mut self) -> Result<PlayOutcome, LibraryError> {
        let pool: Vec<&Video> = self.catalog.iter().filter(|v| !v.is_flagged()).collect();
        if pool.is_empty() {
            return Err(LibraryError::NoVideosAvailable);
        }

        let pick = pool[rand::rng().random_range(0..pool.len())];
        let title = pick.title().to_string();
        let stopped = self.playback.start(title.clone());
        log::debug!("Playing random video: {}", title);
        Ok(PlayOutcome { stopped, title })
    }

    /// Pause the playing video, returning its title
    pub fn pause(&mut self) -> Result<String, LibraryError> {
        self.playback.pause()
    }

    /// Resume the paused video, returning its title
    pub fn resume(&mut self) -> Result<String, LibraryError> {
        self.playback.resume()
    }

    /// The current video and pause flag, if anything is playing
    pub fn now_playing(&self) -> Option<NowPlaying> {
        let (title, paused) = self.playback.current()?;
        let video = self.catalog.find_by_title(title)?.clone();
        Some(NowPlaying { video, paused })
    }

    /// Create an empty playlist with the given name
    pub fn create_playlist(&mut self, name: &str) -> Result<(), LibraryError> {
        self.playlists.create(name)
    }

    /// Append a video to a playlist, returning the added title
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<String, LibraryError> {
        self.playlists.add_video(&self.catalog, name, video_id)
    }

    /// All playlist names, sorted case-insensitively ascending
    pub fn playlist_names(&self) -> Vec<&str> {
        self.playlists.names_sorted()
    }

    /// A playlist's videos in insertion order
    pub fn playlist_contents(&self, name: &str) -> Result<Vec<&Video>, LibraryError> {
        self.playlists.contents(&self.catalog, name)
    }

    /// Remove a video from a playlist, returning the removed title
    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<String, LibraryError> {
        self.playlists.remove_video(&self.catalog, name, video_id)
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), LibraryError> {
        self.playlists.clear(name)
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, name: &str) -> Result<(), LibraryError> {
        self.playlists.delete(name)
    }

    /// Search unflagged videos whose title contains `term`, case-insensitively
    ///
    /// The result list replaces any pending selection context.
    pub fn search(&mut self, term: &str) -> SearchOutcome {
        let needle = lookup_key(term);
        self.run_search(term, |video| lookup_key(video.title()).contains(&needle))
    }

    /// Search unflagged videos carrying `tag`, compared case-insensitively
    pub fn search_by_tag(&mut self, tag: &str) -> SearchOutcome {
        self.run_search(tag, |video| video.tags().iter().any(|t| key_eq(t, tag)))
    }

    fn run_search(&mut self, term: &str, is_match: impl Fn(&Video) -> bool) -> SearchOutcome {
        let mut matches: Vec<Video> = self
            .catalog
            .iter()
            .filter(|video| !video.is_flagged() && is_match(video))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.title().cmp(b.title()));

        self.search_context = matches.iter().map(|v| v.video_id().to_string()).collect();
        log::debug!("Search '{}' matched {} video(s)", term, matches.len());

        SearchOutcome {
            term: term.to_string(),
            matches,
        }
    }

    /// Play the `index`-th (1-based) video of the last search results
    ///
    /// Consumes the pending result list whatever happens. An out-of-range
    /// index, or no pending results, selects nothing (`Ok(None)`); a chosen
    /// video goes through the normal `play` checks.
    pub fn select_from_results(
        &mut self,
        index: usize,
    ) -> Result<Option<PlayOutcome>, LibraryError> {
        let context = std::mem::take(&mut self.search_context);
        match index.checked_sub(1).and_then(|i| context.get(i)) {
            Some(video_id) => self.play(video_id).map(Some),
            None => Ok(None),
        }
    }

    /// Flag a video, stopping it first if it is the one playing
    pub fn flag(
        &mut self,
        video_id: &str,
        reason: Option<&str>,
    ) -> Result<FlagOutcome, LibraryError> {
        let (title, reason) = moderation::flag_video(&mut self.catalog, video_id, reason)?;

        let interrupts = self
            .playback
            .current()
            .is_some_and(|(current, _)| key_eq(current, &title));
        let stopped = if interrupts {
            self.playback.stop().ok()
        } else {
            None
        };

        Ok(FlagOutcome {
            title,
            reason,
            stopped,
        })
    }

    /// Remove a video's flag, returning its title
    pub fn allow(&mut self, video_id: &str) -> Result<String, LibraryError> {
        moderation::allow_video(&mut self.catalog, video_id)
    }
}
