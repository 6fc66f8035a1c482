use healthteen_core::models::Metric;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::format;
use crate::ui::{layout, theme, App};

/// Centered "log today's value" dialog over a dimmed screen.
pub fn render_log_modal(f: &mut Frame, app: &App, metric: Metric) {
    let screen = f.area();
    render_modal_overlay(f, screen);

    let area = modal_area(screen, &ModalSize::default());
    render_modal_background(f, area);

    let title = format!("Log {}", metric.label());
    let body = render_modal_header(f, area, &title, "Enter save · Esc cancel");
    let body = layout::with_modal_padding(body);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(body);

    let current = format::metric_value(metric, app.controller.data().ledger().latest(metric));
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(metric.log_prompt(), theme::text_muted()),
            Span::styled(format!("  (now {current})"), theme::text_dim()),
        ])),
        rows[0],
    );

    let input = if app.log_input.is_empty() {
        Span::styled(format!("0 {}", metric.unit()), theme::input_placeholder())
    } else {
        Span::styled(format!("{}▏", app.log_input), theme::input_active())
    };
    f.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_focused()),
        ),
        rows[1],
    );

    if let Some(error) = &app.log_error {
        f.render_widget(
            Paragraph::new(Span::styled(error.clone(), theme::status_error())),
            rows[2],
        );
    }
}
