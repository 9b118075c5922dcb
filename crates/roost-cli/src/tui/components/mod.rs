use chrono::{DateTime, Utc};
use ratatui::{Frame, layout::Rect};
use roost_engine::AppState;

use super::app::UiState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, ui: &mut UiState, state: &AppState);
}

pub(crate) mod chat;
pub(crate) mod feed;
pub(crate) mod footer;
pub(crate) mod player;

pub(crate) use chat::ChatComponent;
pub(crate) use feed::FeedComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use player::PlayerComponent;

/// Compact "how long ago" label for timestamps
pub(crate) fn age(timestamp: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - timestamp).num_minutes();
    if minutes < 1 {
        "now".to_string()
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if minutes < 1440 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}d", minutes / 1440)
    }
}
