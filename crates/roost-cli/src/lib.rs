// NOTE: roost Architecture Rationale
//
// Why in-memory only (no storage layer)?
// - The app is a fixed set of mock screens over fixture data
// - Every launch starts from the same sample feed, chat, and track
// - Quitting discards everything except the config file `roost init` writes
// - Trade-off: nothing survives a restart, but the screens stay trivially reproducible
//
// Why do posts carry their own comment draft?
// - A comment is composed against one specific post, so the in-progress text
//   belongs on that post's record, not in a screen-level buffer
// - Switching selection or tabs mid-comment keeps each draft where it was
// - The post and chat composers are screen-level buffers instead: there is
//   exactly one of each per screen
//
// Why one keymap per tab (not a global keymap)?
// - `l`/`d`/`c` etc. only mean something with a post selected on Home
// - Scoping keys to the active tab keeps collisions (space, i, j/k) harmless
// - The footer can then show exactly the keys that work right now

mod args;
mod commands;
pub mod config;
mod handlers;
mod tui;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
