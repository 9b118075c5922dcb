use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use roost_engine::{AppState, SegmentKind, segments};
use roost_types::Post;

use super::{Component, age};
use crate::tui::app::{InputMode, InsertTarget, UiState};

pub(crate) struct FeedComponent;

impl Component for FeedComponent {
    fn render(&self, f: &mut Frame, area: Rect, ui: &mut UiState, state: &AppState) {
        let items: Vec<ListItem> = state
            .feed
            .posts()
            .iter()
            .map(|post| post_item(post, ui, state))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut ui.feed_list);
    }
}

fn post_item(post: &Post, ui: &UiState, state: &AppState) -> ListItem<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                post.author.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", age(post.posted_at)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        body_line(&post.body),
        meta_line(post, state),
    ];

    if post.comments_open {
        for comment in &post.comments {
            lines.push(Line::from(vec![
                Span::styled("  > ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{}: ", comment.author),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(comment.body.clone()),
            ]));
        }

        let composing = ui.input_mode == InputMode::Insert(InsertTarget::Comment(post.id));
        if composing {
            lines.push(Line::from(vec![
                Span::styled("  > ", Style::default().fg(Color::Cyan)),
                Span::raw(post.draft_comment.clone()),
                Span::styled("█", Style::default().fg(Color::Cyan)),
            ]));
        } else if !post.draft_comment.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("  > ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{} (draft)", post.draft_comment),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn body_line(body: &str) -> Line<'static> {
    let spans: Vec<Span> = segments(body)
        .iter()
        .map(|segment| match segment.kind {
            SegmentKind::Hashtag => Span::styled(
                segment.text.to_string(),
                Style::default().fg(Color::Blue),
            ),
            SegmentKind::Plain => Span::raw(segment.text.to_string()),
        })
        .collect();
    Line::from(spans)
}

fn meta_line(post: &Post, state: &AppState) -> Line<'static> {
    let toggle = |active: bool, color: Color| {
        if active {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![
        Span::styled("♥ like", toggle(post.liked, Color::Red)),
        Span::raw("  "),
        Span::styled("▼ dislike", toggle(post.disliked, Color::Blue)),
        Span::raw("  "),
        Span::styled(
            format!("↻ {}", post.repost_count),
            toggle(post.reposted, Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("↗ {}", post.share_count),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("≡ {}", post.comments.len()),
            toggle(post.comments_open, Color::Yellow),
        ),
    ];

    if state.profile.is_bookmarked(post.id) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("⚑ saved", Style::default().fg(Color::Magenta)));
    }

    Line::from(spans)
}
