// Engine module - Core in-memory state (feed, chat, player, fixtures)
// This layer sits between plain records (types) and CLI presentation

pub mod chat;
pub mod feed;
pub mod fixtures;
pub mod hashtag;
pub mod player;
pub mod state;

pub use chat::ChatState;
pub use feed::FeedState;
pub use hashtag::{Segment, SegmentKind, segments};
pub use player::PlayerState;
pub use state::AppState;

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Build the fully-populated sample app state the mock screens run on
pub fn sample_app() -> AppState {
    AppState::sample()
}
