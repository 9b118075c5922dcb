use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use roost_engine::AppState;

use super::Component;
use crate::tui::app::UiState;

pub(crate) struct PlayerComponent;

impl Component for PlayerComponent {
    fn render(&self, f: &mut Frame, area: Rect, _ui: &mut UiState, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        render_now_playing(f, chunks[0], state);
        render_favorites(f, chunks[1], state);
    }
}

fn render_now_playing(f: &mut Frame, area: Rect, state: &AppState) {
    let track = state.player.track();

    let status = if state.player.is_playing() {
        Span::styled(
            "▶ playing",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("■ paused", Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(status),
    ];

    let widget = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Now Playing"),
    );

    f.render_widget(widget, area);
}

fn render_favorites(f: &mut Frame, area: Rect, state: &AppState) {
    let favorites = &state.profile.favorite_songs;

    let block = Block::default()
        .borders(Borders::NONE)
        .title(format!("Favorites ({})", favorites.len()));

    if favorites.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "Nothing yet. Every play lands here.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = favorites
        .iter()
        .map(|title| {
            ListItem::new(Line::from(vec![
                Span::styled("♪ ", Style::default().fg(Color::Yellow)),
                Span::raw(title.clone()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
