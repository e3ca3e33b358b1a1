use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
///
/// Identity (title, id, tags) is fixed at load time; the moderation flag is
/// the only mutable attribute and is reachable only through the moderation
/// operations, never as a public field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Video title (display and sort key)
    title: String,

    /// Unique identifier, compared case-insensitively on lookup
    video_id: String,

    /// Tags in the order given by the seed data
    tags: Vec<String>,

    /// Moderation flag reason; `None` means not flagged
    flag: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(title: String, video_id: String, tags: Vec<String>) -> Self {
        Self {
            title,
            video_id,
            tags,
            flag: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// True iff a moderation flag is set
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The moderation flag reason, if any
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    pub(crate) fn set_flag(&mut self, reason: String) {
        self.flag = Some(reason);
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }
}

impl fmt::Display for Video {
    /// Canonical display form: `Title (video_id) [tag1 tag2]`
    ///
    /// The flag annotation is not part of this form; callers that show
    /// flagged state append it from `flag_reason`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.video_id, self.tags.join(" "))
    }
}
