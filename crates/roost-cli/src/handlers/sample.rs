use anyhow::Result;
use owo_colors::OwoColorize;
use roost_engine::{AppState, SegmentKind, segments};
use serde_json::json;

use crate::types::OutputFormat;

pub fn handle(format: OutputFormat) -> Result<()> {
    let state = roost_engine::sample_app();

    match format {
        OutputFormat::Json => print_json(&state),
        OutputFormat::Plain => {
            print_plain(&state);
            Ok(())
        }
    }
}

fn print_json(state: &AppState) -> Result<()> {
    let payload = json!({
        "profile": state.profile,
        "posts": state.feed.posts(),
        "messages": state.chat.messages(),
        "track": state.player.track(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_plain(state: &AppState) {
    println!("{}", "Feed".bold());
    for post in state.feed.posts() {
        println!("  {}", post.author.bold());
        print!("  ");
        for segment in segments(&post.body) {
            match segment.kind {
                SegmentKind::Hashtag => print!("{}", segment.text.cyan()),
                SegmentKind::Plain => print!("{}", segment.text),
            }
        }
        println!();
    }

    println!();
    println!("{}", "Chat".bold());
    for message in state.chat.messages() {
        println!("  {} {}", format!("{}:", message.sender).bold(), message.body);
    }

    println!();
    println!("{}", "Music".bold());
    println!(
        "  {} ({})",
        state.player.track().title,
        state.player.track().url.dimmed()
    );
}
