use roost_types::{Track, UserProfile};
use uuid::Uuid;

use crate::chat::ChatState;
use crate::feed::FeedState;
use crate::fixtures;
use crate::player::PlayerState;

/// Everything the screens read and mutate, in one place.
///
/// The fields are public: screens read them directly when rendering.
/// Mutation still goes through the named operations here or on the
/// individual states, which keep the profile in step with the feed
/// and player.
#[derive(Debug, Clone)]
pub struct AppState {
    pub feed: FeedState,
    pub chat: ChatState,
    pub player: PlayerState,
    pub profile: UserProfile,
}

impl AppState {
    /// An empty app for the given user, with nothing in the feed or chat
    pub fn new(profile: UserProfile, track: Track) -> Self {
        Self {
            feed: FeedState::new(),
            chat: ChatState::new(),
            player: PlayerState::new(track),
            profile,
        }
    }

    /// The canned demo state every screen starts from
    pub fn sample() -> Self {
        Self {
            feed: FeedState::from_posts(fixtures::sample_posts()),
            chat: ChatState::from_messages(fixtures::sample_messages()),
            player: PlayerState::new(fixtures::sample_track()),
            profile: fixtures::sample_profile(),
        }
    }

    /// Post the draft under the profile's own name
    pub fn submit_post(&mut self, draft: &str) -> Option<Uuid> {
        self.feed.submit_post(&self.profile.name, draft)
    }

    /// Send the draft in chat under the profile's own name
    pub fn send_message(&mut self, draft: &str) -> Option<Uuid> {
        self.chat.send(&self.profile.name, draft)
    }

    /// Submit a post's comment draft under the profile's own name
    pub fn submit_comment(&mut self, id: Uuid) -> Option<Uuid> {
        self.feed.submit_comment(id, &self.profile.name)
    }

    /// Flip playback, recording the favorite on this profile
    pub fn toggle_playback(&mut self) -> bool {
        self.player.toggle(&mut self.profile)
    }

    /// Flip this profile's bookmark on a post
    pub fn toggle_bookmark(&mut self, id: Uuid) -> Option<bool> {
        self.feed.toggle_bookmark(id, &mut self.profile)
    }
}
