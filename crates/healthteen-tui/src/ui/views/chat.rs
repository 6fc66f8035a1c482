use healthteen_core::models::ChatMessage;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::ui::format;
use crate::ui::{layout, theme, App};

/// Contact list with unread markers.
pub fn render_chat_list(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .controller
        .data()
        .directory()
        .contacts()
        .iter()
        .enumerate()
        .map(|(i, contact)| {
            let selected = i == app.selected_index;
            let dot = if contact.unread {
                Span::styled("● ", theme::unread_dot())
            } else {
                Span::raw("  ")
            };
            ListItem::new(vec![
                Line::from(vec![
                    dot,
                    Span::styled(format!("[{}] ", contact.initial()), theme::text_muted()),
                    Span::styled(contact.name.clone(), theme::list_item(selected)),
                    Span::styled(format!("  {}", contact.last_active), theme::text_dim()),
                ]),
                Line::from(vec![
                    Span::raw("      "),
                    Span::styled(
                        format::truncate_to_width(&contact.last_message, width.saturating_sub(6)),
                        theme::text_muted(),
                    ),
                ]),
            ])
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(List::new(items), area, &mut state);
}

/// One thread plus the compose line.
pub fn render_chat_detail(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(layout::CHAT_INPUT_HEIGHT)]).split(area);

    let width = rows[0].width as usize;
    let lines: Vec<Line> = app
        .controller
        .active_thread()
        .iter()
        .flat_map(|message| message_lines(message, width))
        .collect();

    // Keep the newest messages in view.
    let overflow = scroll_offset(lines.len(), rows[0].height);
    f.render_widget(Paragraph::new(lines).scroll((overflow, 0)), rows[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_focused());
    let input = if app.chat_draft.is_empty() {
        Paragraph::new(Span::styled("Type a message...", theme::input_placeholder()))
    } else {
        Paragraph::new(Span::styled(format!("{}▏", app.chat_draft), theme::input_active()))
    };
    f.render_widget(input.block(input_block), rows[1]);
}

/// Rows to skip so the last of `total` rows sits at the bottom of `height`.
fn scroll_offset(total: usize, height: u16) -> u16 {
    u16::try_from(total.saturating_sub(height as usize)).unwrap_or(u16::MAX)
}

/// A message pre-wrapped to `width`: bubble rows, then the timestamp.
fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (bubble, mine) = if message.is_mine() {
        (theme::bubble_mine(), true)
    } else {
        (theme::bubble_theirs(), false)
    };

    let mut lines: Vec<Line<'static>> = format::wrap_text(&message.text, width.saturating_sub(2))
        .into_iter()
        .map(|row| Line::from(Span::styled(format!(" {row} "), bubble)))
        .collect();
    lines.push(Line::from(Span::styled(message.sent_at.clone(), theme::text_dim())));

    if mine {
        lines.into_iter().map(Line::right_aligned).collect()
    } else {
        lines
    }
}
