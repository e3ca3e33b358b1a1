//! Video catalog
//!
//! Immutable after load: videos are created once from the seed list and are
//! never added or removed afterwards. The moderation flag is the only
//! mutable attribute, reached through the crate-internal mutable lookup.

use super::lookup_key;
use crate::model::Video;
use crate::seed::SeedVideo;
use std::collections::HashMap;

/// Complete set of known videos
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All videos in seed order
    videos: Vec<Video>,

    /// Lowercased id → position in `videos`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the seed list
    ///
    /// Seed order is preserved. Ids are assumed unique; on a duplicate the
    /// first occurrence is authoritative and later ones are dropped with a
    /// warning.
    pub fn from_seed(seed: impl IntoIterator<Item = SeedVideo>) -> Self {
        let mut videos = Vec::new();
        let mut index = HashMap::new();

        for entry in seed {
            let key = lookup_key(&entry.video_id);
            if index.contains_key(&key) {
                log::warn!("Duplicate video id in seed, skipping: {}", entry.video_id);
                continue;
            }
            index.insert(key, videos.len());
            videos.push(Video::new(entry.title, entry.video_id, entry.tags));
        }

        Self { videos, index }
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// All videos in seed order
    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    /// All videos ordered by title ascending
    pub fn by_title_sorted(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title().cmp(b.title()));
        videos
    }

    /// Look up a video by id, case-insensitively
    pub fn find_by_id(&self, video_id: &str) -> Option<&Video> {
        self.index
            .get(&lookup_key(video_id))
            .map(|&pos| &self.videos[pos])
    }

    /// Look up a video by exact title, case-insensitively
    ///
    /// With duplicate titles in the seed the first occurrence wins.
    pub fn find_by_title(&self, title: &str) -> Option<&Video> {
        let key = lookup_key(title);
        self.videos.iter().find(|v| lookup_key(v.title()) == key)
    }

    pub(crate) fn find_by_id_mut(&mut self, video_id: &str) -> Option<&mut Video> {
        let pos = *self.index.get(&lookup_key(video_id))?;
        Some(&mut self.videos[pos])
    }
}
