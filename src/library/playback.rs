//! Playback state machine
//!
//! At most one video is current at any time. Pausing only exists relative
//! to a current video, so the paused flag is part of the state itself
//! rather than a separate boolean that could outlive a stop.

use super::error::LibraryError;

/// Playback states, holding the current video title where one exists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// No current video
    #[default]
    Stopped,

    /// `title` is playing
    Playing(String),

    /// `title` is paused
    Paused(String),
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::Stopped
    }

    /// Switch to playing `title`, returning the title that was displaced
    ///
    /// Switching away from a playing or paused video is not an error; the
    /// previous title comes back so the caller can report the implicit stop.
    pub fn start(&mut self, title: String) -> Option<String> {
        match std::mem::replace(self, PlaybackState::Playing(title)) {
            PlaybackState::Playing(prev) | PlaybackState::Paused(prev) => Some(prev),
            PlaybackState::Stopped => None,
        }
    }

    /// Stop the current video, returning its title
    pub fn stop(&mut self) -> Result<String, LibraryError> {
        match std::mem::take(self) {
            PlaybackState::Playing(title) | PlaybackState::Paused(title) => Ok(title),
            PlaybackState::Stopped => Err(LibraryError::NothingPlaying),
        }
    }

    /// Pause the playing video, returning its title
    pub fn pause(&mut self) -> Result<String, LibraryError> {
        match std::mem::take(self) {
            PlaybackState::Playing(title) => {
                *self = PlaybackState::Paused(title.clone());
                Ok(title)
            }
            PlaybackState::Paused(title) => {
                let err = LibraryError::AlreadyPaused {
                    title: title.clone(),
                };
                *self = PlaybackState::Paused(title);
                Err(err)
            }
            PlaybackState::Stopped => Err(LibraryError::NothingPlaying),
        }
    }

    /// Resume the paused video, returning its title
    pub fn resume(&mut self) -> Result<String, LibraryError> {
        match std::mem::take(self) {
            PlaybackState::Paused(title) => {
                *self = PlaybackState::Playing(title.clone());
                Ok(title)
            }
            PlaybackState::Playing(title) => {
                *self = PlaybackState::Playing(title);
                Err(LibraryError::NotPaused)
            }
            PlaybackState::Stopped => Err(LibraryError::NothingPlaying),
        }
    }

    /// The current title and whether it is paused, if any video is current
    pub fn current(&self) -> Option<(&str, bool)> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(title) => Some((title, false)),
            PlaybackState::Paused(title) => Some((title, true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_stopped() {
        let state = PlaybackState::new();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_start_from_stopped_displaces_nothing() {
        let mut state = PlaybackState::new();
        assert_eq!(state.start("Amazing Cats".to_string()), None);
        assert_eq!(state.current(), Some(("Amazing Cats", false)));
    }

    #[test]
    fn test_start_displaces_playing_video() {
        let mut state = PlaybackState::new();
        state.start("Amazing Cats".to_string());
        let displaced = state.start("Funny Dogs".to_string());
        assert_eq!(displaced.as_deref(), Some("Amazing Cats"));
        assert_eq!(state.current(), Some(("Funny Dogs", false)));
    }

    #[test]
    fn test_start_displaces_paused_video_and_clears_pause() {
        let mut state = PlaybackState::new();
        state.start("Amazing Cats".to_string());
        state.pause().unwrap();
        let displaced = state.start("Funny Dogs".to_string());
        assert_eq!(displaced.as_deref(), Some("Amazing Cats"));
        assert_eq!(state.current(), Some(("Funny Dogs", false)));
    }

    #[test]
    fn test_stop_when_stopped_fails() {
        let mut state = PlaybackState::new();
        assert_eq!(state.stop(), Err(LibraryError::NothingPlaying));
    }

    #[test]
    fn test_stop_clears_paused_video() {
        let mut state = PlaybackState::new();
        state.start("Amazing Cats".to_string());
        state.pause().unwrap();
        assert_eq!(state.stop(), Ok("Amazing Cats".to_string()));
        assert_eq!(state.current(), None);
    }

    #[test]
    fn test_pause_requires_playing_video() {
        let mut state = PlaybackState::new();
        assert_eq!(state.pause(), Err(LibraryError::NothingPlaying));

        state.start("Amazing Cats".to_string());
        assert_eq!(state.pause(), Ok("Amazing Cats".to_string()));
        assert_eq!(state.current(), Some(("Amazing Cats", true)));

        assert_eq!(
            state.pause(),
            Err(LibraryError::AlreadyPaused {
                title: "Amazing Cats".to_string()
            })
        );
        // failed pause leaves the state untouched
        assert_eq!(state.current(), Some(("Amazing Cats", true)));
    }

    #[test]
    fn test_resume_only_from_paused() {
        let mut state = PlaybackState::new();
        assert_eq!(state.resume(), Err(LibraryError::NothingPlaying));

        state.start("Amazing Cats".to_string());
        assert_eq!(state.resume(), Err(LibraryError::NotPaused));
        assert_eq!(state.current(), Some(("Amazing Cats", false)));

        state.pause().unwrap();
        assert_eq!(state.resume(), Ok("Amazing Cats".to_string()));
        assert_eq!(state.current(), Some(("Amazing Cats", false)));
    }

    #[test]
    fn test_paused_is_never_reported_without_a_current_video() {
        // Drive the machine through every transition, valid or not, and
        // check the projection after each step: a paused flag always comes
        // with a title attached.
        let mut state = PlaybackState::new();
        let check = |state: &PlaybackState| {
            if state.current().is_none() {
                assert_eq!(*state, PlaybackState::Stopped);
            }
        };

        let _ = state.pause();
        check(&state);
        state.start("A".to_string());
        check(&state);
        let _ = state.pause();
        check(&state);
        let _ = state.resume();
        check(&state);
        let _ = state.stop();
        check(&state);
        let _ = state.resume();
        check(&state);
        state.start("B".to_string());
        let _ = state.pause();
        check(&state);
        let _ = state.stop();
        check(&state);
    }
}
