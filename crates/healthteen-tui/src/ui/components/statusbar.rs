// Single line at the bottom: the latest notification, else key hints

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_to_width;
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

pub fn render_statusbar(f: &mut Frame, area: Rect, notification: Option<&Notification>, hints: &str, right: &str) {
    let right_width = (right.width() as u16 + 1).min(area.width);
    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(area);

    let max_left = chunks[0].width.saturating_sub(1) as usize;
    let left = match notification {
        Some(n) => {
            let style = match n.level {
                NotificationLevel::Info => theme::status_info(),
                NotificationLevel::Success => theme::status_success(),
                NotificationLevel::Error => theme::status_error(),
            };
            let text = truncate_to_width(&format!("{} {}", n.level.icon(), n.message), max_left);
            Line::from(vec![Span::raw(" "), Span::styled(text, style)])
        }
        None => Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate_to_width(hints, max_left), theme::text_dim()),
        ]),
    };
    f.render_widget(Paragraph::new(left), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(right, theme::text_muted())).right_aligned(),
        chunks[1],
    );
}
