mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use roost_engine::AppState;
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::types::Tab;
use app::UiState;

pub fn run(config: &Config, tab: Tab) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut state = AppState::sample();
    state.profile.name = config.display_name.clone();
    let mut ui_state = UiState::new(tab);

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut last_tick = std::time::Instant::now();

    while !ui_state.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut ui_state, &state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            ui_state.on_key(key.code, &mut state);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = std::time::Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
