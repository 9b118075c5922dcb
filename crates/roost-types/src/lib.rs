pub mod chat;
pub mod post;
pub mod profile;
pub mod track;

pub use chat::ChatMessage;
pub use post::{Comment, Post};
pub use profile::UserProfile;
pub use track::Track;
