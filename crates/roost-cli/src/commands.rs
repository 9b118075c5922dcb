use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, Config};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = config::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Sample { format }) => handlers::sample::handle(format),

        Some(Commands::Init { force }) => handlers::init::handle(&config_path, force),

        None => {
            let config = Config::load_from(&config_path)?;
            handlers::app::handle(&config, cli.tab)
        }
    }
}
