use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::config::Config;

pub fn handle(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!(
            "Config already exists at {} (pass --force to overwrite)",
            config_path.display()
        );
        return Ok(());
    }

    Config::default().save_to(config_path)?;

    println!("{} {}", "Wrote".green().bold(), config_path.display());
    println!();
    println!("Edit display_name to change who your posts are attributed to, then run `roost`.");
    Ok(())
}
