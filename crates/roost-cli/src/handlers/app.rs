use anyhow::Result;
use is_terminal::IsTerminal;

use crate::config::Config;
use crate::tui;
use crate::types::{OutputFormat, Tab};

pub fn handle(config: &Config, tab: Tab) -> Result<()> {
    // Only take over the terminal when stdout is a TTY; a piped or
    // redirected invocation gets the plain fixture dump instead
    if !std::io::stdout().is_terminal() {
        return super::sample::handle(OutputFormat::Plain);
    }

    tui::run(config, tab)
}
