//! Canned demo data the screens start from.
//!
//! Everything here is plain in-memory fixture content. The timestamps
//! are offsets from now so the feed always reads as recent activity.

use chrono::{Duration, Utc};
use roost_types::{ChatMessage, Post, Track, UserProfile};

/// Two starter posts, oldest first
pub fn sample_posts() -> Vec<Post> {
    let mut first = Post::new("Alice", "Hello, world! #firstpost");
    first.posted_at = Utc::now() - Duration::minutes(12);
    let mut second = Post::new("Bob", "The terminal is home. #rust #tui");
    second.posted_at = Utc::now() - Duration::minutes(7);
    vec![first, second]
}

/// A short starter conversation, oldest first
pub fn sample_messages() -> Vec<ChatMessage> {
    let mut hi = ChatMessage::new("Alice", "Hi!");
    hi.sent_at = Utc::now() - Duration::minutes(5);
    let mut hello = ChatMessage::new("Bob", "Hello, Alice!");
    hello.sent_at = Utc::now() - Duration::minutes(4);
    vec![hi, hello]
}

/// The one track the player knows about. The URL is decoration only.
pub fn sample_track() -> Track {
    Track::new("Sample Song", "https://example.com/sample.mp3")
}

/// The demo user everything is attributed to by default
pub fn sample_profile() -> UserProfile {
    UserProfile::new("User")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_posts_read_oldest_first() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].posted_at < posts[1].posted_at);
        assert_eq!(posts[0].author, "Alice");
        assert_eq!(posts[1].author, "Bob");
    }

    #[test]
    fn test_sample_posts_carry_hashtags() {
        let posts = sample_posts();
        assert!(posts[0].body.contains("#firstpost"));
        assert!(posts[1].body.contains("#rust"));
    }

    #[test]
    fn test_sample_messages_read_oldest_first() {
        let messages = sample_messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].sent_at < messages[1].sent_at);
        assert_eq!(messages[0].sender, "Alice");
    }
}
