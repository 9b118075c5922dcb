// NOTE: Command Organization Rationale
//
// Why a default command (not `roost run`)?
// - Launching the screens is the whole point; `roost` alone should do it
// - `sample` and `init` are the only side doors, so a flat layout stays readable
// - Namespacing would earn its keep at ~10 commands; we have two

use clap::{Parser, Subcommand};

use crate::types::{OutputFormat, Tab};

#[derive(Parser)]
#[command(name = "roost")]
#[command(about = "A tabbed social feed, chat pane, and music player in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Tab to open on launch
    #[arg(long, default_value = "home")]
    pub tab: Tab,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print the fixture data the screens start from")]
    Sample {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Write a default config file")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
