use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use roost_engine::AppState;

use super::{Component, age};
use crate::tui::app::UiState;

pub(crate) struct ChatComponent;

impl Component for ChatComponent {
    fn render(&self, f: &mut Frame, area: Rect, _ui: &mut UiState, state: &AppState) {
        // Keep the newest messages on screen when the thread outgrows
        // the area
        let visible = area.height as usize;
        let skip = state.chat.len().saturating_sub(visible);

        let items: Vec<ListItem> = state
            .chat
            .messages()
            .iter()
            .skip(skip)
            .map(|message| {
                let own = message.sender == state.profile.name;
                let sender_color = if own { Color::Cyan } else { Color::White };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4} ", age(message.sent_at)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{}: ", message.sender),
                        Style::default()
                            .fg(sender_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(message.body.clone()),
                ]))
            })
            .collect();

        f.render_widget(List::new(items), area);
    }
}
