use roost_types::{Post, UserProfile};
use uuid::Uuid;

/// The home timeline: an ordered, in-memory list of posts.
///
/// All mutation goes through named operations addressed by post id so
/// the caller never holds a `&mut Post` across a render. Unknown ids
/// are ignored rather than reported - the screens only ever pass ids
/// they just read out of this state.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Append a new post authored from the given draft text.
    ///
    /// The draft is trimmed first; an empty or whitespace-only draft
    /// appends nothing and returns `None`.
    pub fn submit_post(&mut self, author: &str, draft: &str) -> Option<Uuid> {
        let body = draft.trim();
        if body.is_empty() {
            return None;
        }
        let post = Post::new(author, body);
        let id = post.id;
        self.posts.push(post);
        Some(id)
    }

    pub fn toggle_like(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.toggle_like();
        }
    }

    pub fn toggle_dislike(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.toggle_dislike();
        }
    }

    pub fn toggle_comments(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.toggle_comments();
        }
    }

    pub fn toggle_repost(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.toggle_repost();
        }
    }

    pub fn share(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.share();
        }
    }

    /// Append one character to a post's in-progress comment draft
    pub fn push_draft_char(&mut self, id: Uuid, c: char) {
        if let Some(post) = self.post_mut(id) {
            post.draft_comment.push(c);
        }
    }

    /// Remove the last character from a post's comment draft, if any
    pub fn pop_draft_char(&mut self, id: Uuid) {
        if let Some(post) = self.post_mut(id) {
            post.draft_comment.pop();
        }
    }

    /// Turn a post's comment draft into a comment.
    ///
    /// Returns the new comment's id, or `None` when the post is unknown
    /// or the draft trims to nothing (the draft is left as typed).
    pub fn submit_comment(&mut self, id: Uuid, author: &str) -> Option<Uuid> {
        self.post_mut(id)?.submit_comment(author)
    }

    /// Flip whether the profile bookmarks the given post.
    ///
    /// Returns the new bookmark state, or `None` for an unknown id.
    pub fn toggle_bookmark(&self, id: Uuid, profile: &mut UserProfile) -> Option<bool> {
        self.post(id)?;
        Some(profile.toggle_bookmark(id))
    }

    fn post_mut(&mut self, id: Uuid) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }
}
