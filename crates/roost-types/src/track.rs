use serde::{Deserialize, Serialize};

/// A playable track reference.
///
/// The URL is display-only. Nothing in the application ever fetches or
/// decodes it; the Music tab simply shows where playback would come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Track title shown as the Music tab headline.
    pub title: String,

    /// Source location, rendered as a footnote under the controls.
    pub url: String,
}

impl Track {
    /// Create a track reference.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
