use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// NOTE: Record-Level Mutation Design
//
// Why do engagement toggles live on the record (not only on FeedState)?
// - A post owns its own engagement flags, thread, and in-progress comment
//   draft; the feed only resolves ids and routes gestures here
// - Keeps each mutation a single observable flag/list change, which is the
//   entire behavioral contract of the app (no validation beyond the
//   empty-input guard, no error paths)
// - The draft comment is deliberately part of the record: each open thread
//   carries its own half-typed input, exactly like each list row in the
//   screen it renders

/// A user-authored feed entry with engagement flags and a comment thread.
///
/// Posts are created from the composer on the Home tab and mutated in place
/// by like/dislike/comment/repost/share/bookmark gestures. Nothing is ever
/// persisted or deleted: the whole feed lives in memory for the lifetime of
/// the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique post ID.
    pub id: Uuid,

    /// Display name of the author.
    pub author: String,

    /// Post body. Hashtags (`#word`) are highlighted at render time.
    pub body: String,

    /// When the post was created.
    pub posted_at: DateTime<Utc>,

    /// Whether the local user has liked this post.
    #[serde(default)]
    pub liked: bool,

    /// Whether the local user has disliked this post.
    /// Independent of `liked`: flipping one never touches the other.
    #[serde(default)]
    pub disliked: bool,

    /// Whether the local user has reposted this post.
    #[serde(default)]
    pub reposted: bool,

    /// Repost tally, kept in step with the `reposted` flag.
    #[serde(default)]
    pub repost_count: u32,

    /// Number of times the post has been shared. Shares have no toggle.
    #[serde(default)]
    pub share_count: u32,

    /// Comment thread in submission order.
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// In-progress comment input bound to this post's thread (transient).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub draft_comment: String,

    /// Whether the comment thread is currently expanded.
    #[serde(default)]
    pub comments_open: bool,
}

impl Post {
    /// Create a new post with no engagement and a collapsed, empty thread.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            posted_at: Utc::now(),
            liked: false,
            disliked: false,
            reposted: false,
            repost_count: 0,
            share_count: 0,
            comments: Vec::new(),
            draft_comment: String::new(),
            comments_open: false,
        }
    }

    /// Flip the like flag. Does not touch `disliked`.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Flip the dislike flag. Does not touch `liked`.
    pub fn toggle_dislike(&mut self) {
        self.disliked = !self.disliked;
    }

    /// Expand or collapse the comment thread.
    pub fn toggle_comments(&mut self) {
        self.comments_open = !self.comments_open;
    }

    /// Flip the repost flag, keeping the repost tally in step.
    ///
    /// The tally never underflows: un-reposting a post whose count is
    /// already zero leaves it at zero.
    pub fn toggle_repost(&mut self) {
        self.reposted = !self.reposted;
        if self.reposted {
            self.repost_count = self.repost_count.saturating_add(1);
        } else {
            self.repost_count = self.repost_count.saturating_sub(1);
        }
    }

    /// Record one share. Sharing is one-way: the count only grows.
    pub fn share(&mut self) {
        self.share_count = self.share_count.saturating_add(1);
    }

    /// Submit the pending draft comment to this post's thread.
    ///
    /// The draft is trimmed first; an empty or whitespace-only draft is a
    /// no-op that returns `None` and leaves the draft untouched. Otherwise
    /// exactly one comment is appended, the draft is cleared, and the new
    /// comment's id is returned.
    pub fn submit_comment(&mut self, author: impl Into<String>) -> Option<Uuid> {
        let body = self.draft_comment.trim();
        if body.is_empty() {
            return None;
        }
        let comment = Comment::new(author, body);
        let id = comment.id;
        self.comments.push(comment);
        self.draft_comment.clear();
        Some(id)
    }
}

/// A single comment inside a post's thread.
///
/// Comments are append-only: once submitted they are never edited or
/// removed, and they never exist outside their parent post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment ID.
    pub id: Uuid,

    /// Display name of the comment author.
    pub author: String,

    /// Comment text.
    pub body: String,

    /// When the comment was submitted.
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            posted_at: Utc::now(),
        }
    }
}
