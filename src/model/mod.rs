//! Unified data model for the video library
//!
//! This module defines the data records shared by the catalog, the
//! playlist store and the playback layer. The business rules that guard
//! them live in the `library` modules.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
