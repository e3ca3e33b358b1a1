//! Playlist store
//!
//! Playlists are resolved case-insensitively but keep the casing they were
//! created with. Membership rules (missing video, flagged video, duplicate
//! title) are all enforced here at add time against a borrowed catalog;
//! videos flagged later stay in their playlists.

use super::catalog::Catalog;
use super::error::LibraryError;
use super::{key_eq, lookup_key};
use crate::model::{Playlist, Video};
use std::collections::HashMap;

/// All playlists, keyed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self {
            playlists: HashMap::new(),
        }
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Create an empty playlist, keeping the given casing
    pub fn create(&mut self, name: &str) -> Result<(), LibraryError> {
        let key = lookup_key(name);
        if self.playlists.contains_key(&key) {
            return Err(LibraryError::DuplicatePlaylist);
        }
        self.playlists.insert(key, Playlist::new(name.to_string()));
        log::debug!("Created playlist: {}", name);
        Ok(())
    }

    /// Resolve a playlist by name, case-insensitively
    pub fn get(&self, name: &str) -> Result<&Playlist, LibraryError> {
        self.playlists
            .get(&lookup_key(name))
            .ok_or(LibraryError::PlaylistNotFound)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, LibraryError> {
        self.playlists
            .get_mut(&lookup_key(name))
            .ok_or(LibraryError::PlaylistNotFound)
    }

    /// Playlist names sorted case-insensitively ascending, in display casing
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name()).collect();
        names.sort_by_key(|name| lookup_key(name));
        names
    }

    /// Append a catalog video to a playlist
    ///
    /// Checks run in order: playlist exists, video exists, video unflagged,
    /// no case-insensitive title duplicate. Returns the added title.
    pub fn add_video(
        &mut self,
        catalog: &Catalog,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<String, LibraryError> {
        let playlist = self
            .playlists
            .get_mut(&lookup_key(playlist_name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        let video = catalog
            .find_by_id(video_id)
            .ok_or(LibraryError::VideoNotFound)?;
        if let Some(reason) = video.flag_reason() {
            return Err(LibraryError::VideoFlagged {
                reason: reason.to_string(),
            });
        }

        let duplicate = playlist.entries().iter().any(|id| {
            catalog
                .find_by_id(id)
                .is_some_and(|v| key_eq(v.title(), video.title()))
        });
        if duplicate {
            return Err(LibraryError::DuplicateVideo);
        }

        playlist.push(video.video_id().to_string());
        log::debug!("Added {} to playlist {}", video.video_id(), playlist.name());
        Ok(video.title().to_string())
    }

    /// Remove a video from a playlist by id
    ///
    /// The id must exist in the catalog even when it is not in the playlist,
    /// so a typo reports "video does not exist" rather than "not in
    /// playlist". Returns the removed title.
    pub fn remove_video(
        &mut self,
        catalog: &Catalog,
        playlist_name: &str,
        video_id: &str,
    ) -> Result<String, LibraryError> {
        let playlist = self
            .playlists
            .get_mut(&lookup_key(playlist_name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        let video = catalog
            .find_by_id(video_id)
            .ok_or(LibraryError::VideoNotFound)?;

        let position = playlist
            .entries()
            .iter()
            .position(|id| key_eq(id, video.video_id()))
            .ok_or(LibraryError::VideoNotInPlaylist)?;

        playlist.remove_at(position);
        log::debug!(
            "Removed {} from playlist {}",
            video.video_id(),
            playlist.name()
        );
        Ok(video.title().to_string())
    }

    /// Remove every video from a playlist
    pub fn clear(&mut self, name: &str) -> Result<(), LibraryError> {
        let playlist = self.get_mut(name)?;
        playlist.clear();
        log::debug!("Cleared playlist: {}", playlist.name());
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<(), LibraryError> {
        self.playlists
            .remove(&lookup_key(name))
            .map(|playlist| log::debug!("Deleted playlist: {}", playlist.name()))
            .ok_or(LibraryError::PlaylistNotFound)
    }

    /// The playlist's videos in insertion order, resolved against the catalog
    ///
    /// An empty list is a valid result, distinct from a missing playlist.
    pub fn contents<'a>(
        &self,
        catalog: &'a Catalog,
        name: &str,
    ) -> Result<Vec<&'a Video>, LibraryError> {
        let playlist = self.get(name)?;
        Ok(playlist
            .entries()
            .iter()
            .filter_map(|id| catalog.find_by_id(id))
            .collect())
    }
}
