//! Seed catalog loading
//!
//! The catalog is seeded once at startup, either from a pipe-delimited
//! catalog file or from the built-in demo catalog. One video per line:
//!
//! ```text
//! Title|video_id|tag1 tag2 ...
//! ```
//!
//! The tag field is optional; tags are whitespace-separated and kept
//! verbatim, including any `#` prefix.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One video record from the seed data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedVideo {
    /// Video title
    pub title: String,

    /// Unique video id
    pub video_id: String,

    /// Tags in the order given
    pub tags: Vec<String>,
}

impl SeedVideo {
    pub fn new(title: &str, video_id: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            video_id: video_id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Parse a catalog file into seed records
///
/// Blank lines are skipped; lines without a title or id are skipped with a
/// warning rather than failing the load.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<SeedVideo>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to open catalog file: {:?}", path))?;

    let mut videos = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(video) => videos.push(video),
            None => log::warn!("Skipping malformed catalog line {}: {}", number + 1, line),
        }
    }

    log::info!("Parsed {} videos from {:?}", videos.len(), path);
    Ok(videos)
}

/// Parse one `Title|video_id|tags` line
fn parse_line(line: &str) -> Option<SeedVideo> {
    let mut fields = line.splitn(3, '|');
    let title = fields.next()?.trim();
    let video_id = fields.next()?.trim();
    if title.is_empty() || video_id.is_empty() {
        return None;
    }

    let tags = fields
        .next()
        .map(|raw| raw.split_whitespace().map(|t| t.to_string()).collect())
        .unwrap_or_default();

    Some(SeedVideo {
        title: title.to_string(),
        video_id: video_id.to_string(),
        tags,
    })
}

/// The built-in demo catalog used when no catalog file is given
pub fn default_catalog() -> Vec<SeedVideo> {
    vec![
        SeedVideo::new("Funny Dogs", "funny_dogs_video_id", &["#dog", "#animal"]),
        SeedVideo::new("Amazing Cats", "amazing_cats_video_id", &["#cat", "#animal"]),
        SeedVideo::new("Another Cat Video", "another_cat_video_id", &["#cat", "#animal"]),
        SeedVideo::new("Life at Google", "life_at_google_video_id", &["#google", "#career"]),
        SeedVideo::new("Video about nothing", "nothing_video_id", &[]),
    ]
}
