use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use roost_engine::AppState;

use super::Component;
use crate::tui::app::{InputMode, InsertTarget, UiState};
use crate::types::Tab;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, ui: &mut UiState, state: &AppState) {
        let mut lines: Vec<Line> = Vec::new();

        if let InputMode::Insert(target) = ui.input_mode {
            let (label, draft) = match target {
                InsertTarget::Post => ("post", ui.post_draft.as_str()),
                InsertTarget::Chat => ("message", ui.chat_draft.as_str()),
                InsertTarget::Comment(id) => (
                    "comment",
                    state
                        .feed
                        .post(id)
                        .map(|p| p.draft_comment.as_str())
                        .unwrap_or(""),
                ),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}> ", label), Style::default().fg(Color::Cyan)),
                Span::raw(draft.to_string()),
                Span::styled("█", Style::default().fg(Color::Cyan)),
            ]));
            lines.push(Line::from(Span::styled(
                "enter submit · esc done",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                hints(ui.active_tab),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let footer = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}

fn hints(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => {
            "tab switch · j/k select · p post · a comment · l like · d dislike · c thread · r repost · s share · b save · q quit"
        }
        Tab::Chat => "tab switch · i write · q quit",
        Tab::Music => "tab switch · space play/pause · q quit",
    }
}
