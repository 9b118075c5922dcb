use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use roost_engine::AppState;

use super::app::{InputMode, UiState};
use super::components::{ChatComponent, Component, FeedComponent, FooterComponent, PlayerComponent};
use crate::types::Tab;

pub(crate) fn draw(f: &mut Frame, ui: &mut UiState, state: &AppState) {
    let footer_height = if matches!(ui.input_mode, InputMode::Insert(_)) {
        3
    } else {
        2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(f.area());

    render_header(f, chunks[0], ui, state);

    match ui.active_tab {
        Tab::Home => FeedComponent.render(f, chunks[1], ui, state),
        Tab::Chat => ChatComponent.render(f, chunks[1], ui, state),
        Tab::Music => PlayerComponent.render(f, chunks[1], ui, state),
    }

    FooterComponent.render(f, chunks[2], ui, state);
}

fn render_header(f: &mut Frame, area: Rect, ui: &UiState, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title = Line::from(vec![
        Span::styled("━━ ", accent),
        Span::styled(
            "roost",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" · {}", state.profile.name), Style::default().fg(Color::White)),
        Span::styled(" ━━", accent),
    ]);
    f.render_widget(Paragraph::new(title), rows[0]);

    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let tabs = Tabs::new(titles)
        .select(ui.active_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(accent)
        .divider(" · ");
    f.render_widget(tabs, rows[1]);
}
