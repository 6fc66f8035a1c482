use healthteen_core::models::Post;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::format;
use crate::ui::{layout, theme, App};

/// Groups on top, the social feed below. One cursor spans both lists.
pub fn render_community(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let data = app.controller.data();
    let groups = data.directory().groups();

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(groups.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    f.render_widget(Paragraph::new(Span::styled("Groups", theme::heading())), rows[0]);
    let group_items: Vec<ListItem> = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let selected = i == app.selected_index;
            ListItem::new(Line::from(vec![
                Span::styled(group.name.clone(), theme::list_item(selected)),
                Span::styled(
                    format!("  {} members", format::thousands(u64::from(group.members))),
                    theme::text_muted(),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(group_items), rows[1]);

    f.render_widget(Paragraph::new(Span::styled("Feed", theme::heading())), rows[3]);

    let post_items: Vec<ListItem> = data
        .posts()
        .iter()
        .enumerate()
        .map(|(i, post)| post_item(post, groups.len() + i == app.selected_index, rows[4].width))
        .collect();
    let mut state = ListState::default();
    if app.selected_index >= groups.len() {
        state.select(Some(app.selected_index - groups.len()));
    }
    f.render_stateful_widget(List::new(post_items), rows[4], &mut state);
}

fn post_item(post: &Post, selected: bool, width: u16) -> ListItem<'static> {
    let heart = if post.liked_by_viewer {
        Span::styled("♥ ", theme::liked())
    } else {
        Span::styled("♡ ", theme::text_muted())
    };
    let body = format::truncate_to_width(&post.body, width.saturating_sub(2) as usize);

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(post.author.clone(), theme::list_item(selected)),
            Span::styled(format!(" · {}", post.posted_at), theme::text_dim()),
        ]),
        Line::from(Span::styled(body, theme::text_primary())),
        Line::from(vec![
            heart,
            Span::styled(format!("{}", post.like_count), theme::text_muted()),
            Span::styled(format!("   💬 {}", post.comment_count), theme::text_muted()),
        ]),
        Line::from(""),
    ])
}
