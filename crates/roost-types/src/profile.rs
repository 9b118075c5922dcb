use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The local user's profile.
///
/// `favorite_songs` grows as a side effect of starting playback on the
/// Music tab; repeated plays of the same track append the same title again
/// on purpose. `bookmarked_posts` holds ids into the feed; membership is
/// toggled by the bookmark gesture on the Home tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name used for everything the local user composes.
    pub name: String,

    /// Titles favorited by starting playback, in play order.
    #[serde(default)]
    pub favorite_songs: Vec<String>,

    /// Ids of bookmarked posts, in bookmark order.
    #[serde(default)]
    pub bookmarked_posts: Vec<Uuid>,
}

impl UserProfile {
    /// Create a profile with empty favorites and bookmarks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            favorite_songs: Vec::new(),
            bookmarked_posts: Vec::new(),
        }
    }

    /// Append a title to the favorites list. Duplicates are kept.
    pub fn add_favorite(&mut self, title: impl Into<String>) {
        self.favorite_songs.push(title.into());
    }

    /// Whether the given post id is currently bookmarked.
    pub fn is_bookmarked(&self, id: Uuid) -> bool {
        self.bookmarked_posts.contains(&id)
    }

    /// Flip bookmark membership for the given post id.
    ///
    /// Returns `true` when the id is bookmarked after the call. Callers are
    /// expected to have resolved the id against the feed first; this method
    /// does not know what a valid post is.
    pub fn toggle_bookmark(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.bookmarked_posts.iter().position(|b| *b == id) {
            self.bookmarked_posts.remove(pos);
            false
        } else {
            self.bookmarked_posts.push(id);
            true
        }
    }
}
