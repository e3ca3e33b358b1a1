use serde::{Deserialize, Serialize};

/// Represents a playlist
///
/// Entries reference catalog videos by id and keep insertion order. The
/// store owns every membership rule (duplicate titles, flagged videos), so
/// the mutators here stay crate-internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name with the casing it was created with
    name: String,

    /// Video ids in insertion order
    entries: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// The name as originally typed at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Video ids in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, video_id: String) {
        self.entries.push(video_id);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> String {
        self.entries.remove(index)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
