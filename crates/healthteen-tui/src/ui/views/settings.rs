use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::{layout, theme};

const NOTIFICATION_PREFS: [&str; 4] = [
    "Health Reminders",
    "Community Updates",
    "Chat Messages",
    "Challenge Alerts",
];

/// Static account, notification and privacy panels.
pub fn render_settings(f: &mut Frame, area: Rect) {
    let area = layout::with_content_padding(area);
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(NOTIFICATION_PREFS.len() as u16 + 2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .split(area);

    panel(
        f,
        rows[0],
        "Account Settings",
        vec![
            row("Email", "ethan.carter@email.com"),
            row("Password", "••••••••"),
        ],
    );
    panel(
        f,
        rows[1],
        "Notification Preferences",
        NOTIFICATION_PREFS.iter().map(|item| row(item, "On")).collect(),
    );
    panel(
        f,
        rows[2],
        "Privacy",
        vec![row("Profile Visibility", "Public"), row("Activity Sharing", "Friends")],
    );
}

fn panel(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .title(Span::styled(format!(" {title} "), theme::text_muted()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), theme::text_primary()),
        Span::styled(value.to_string(), theme::text_muted()),
    ])
}
