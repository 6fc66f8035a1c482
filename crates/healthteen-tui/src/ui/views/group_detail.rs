use healthteen_core::models::Group;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::ui::format;
use crate::ui::{layout, theme, App};

pub fn render_group_detail(f: &mut Frame, app: &App, name: &str, area: Rect) {
    let area = layout::with_content_padding(area);
    let Ok(group) = app.controller.data().directory().group(name) else {
        f.render_widget(
            Paragraph::new(Span::styled(format!("No group named {name}"), theme::status_error())),
            area,
        );
        return;
    };

    let rows = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(area);
    render_group_header(f, group, rows[0]);

    let items: Vec<ListItem> = group
        .posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let selected = i == app.selected_index;
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(post.author.clone(), theme::list_item(selected)),
                    Span::styled(format!(" · {}", post.posted_at), theme::text_dim()),
                ]),
                Line::from(Span::styled(post.body.clone(), theme::text_primary())),
                Line::from(Span::styled(
                    format!("♡ {}   💬 {}", post.like_count, post.comment_count),
                    theme::text_muted(),
                )),
                Line::from(""),
            ])
        })
        .collect();
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(List::new(items), rows[1], &mut state);
}

fn render_group_header(f: &mut Frame, group: &Group, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .style(theme::card_bg());
    let text = vec![
        Line::from(Span::styled(
            format!("{} members", format::thousands(u64::from(group.members))),
            theme::text_muted(),
        )),
        Line::from(Span::styled(group.description.clone(), theme::text_primary())),
    ];
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(block), area);
}
