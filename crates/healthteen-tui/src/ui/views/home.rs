use healthteen_core::models::{display_progress, Metric};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::ui::format;
use crate::ui::{layout, theme, App};

/// Today's three metric cards with their goal gauges.
pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let mut constraints: Vec<Constraint> = Metric::ALL
        .iter()
        .map(|_| Constraint::Length(layout::METRIC_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    for (i, metric) in Metric::ALL.iter().enumerate() {
        render_metric_card(f, app, *metric, i == app.selected_index, rows[i]);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter details · + log today · d dashboard",
        theme::text_dim(),
    )));
    f.render_widget(hint, rows[Metric::ALL.len()]);
}

fn render_metric_card(f: &mut Frame, app: &App, metric: Metric, selected: bool, area: Rect) {
    let ledger = app.controller.data().ledger();
    let progress = ledger.goal_progress(metric);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(selected))
        .title(Span::styled(
            format!(" {} ", metric.label()),
            Style::default().fg(theme::metric_color(metric)),
        ))
        .style(theme::card_bg());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).split(inner);

    let value_line = Line::from(vec![
        Span::styled(format::metric_value(metric, ledger.latest(metric)), theme::text_bold()),
        Span::styled(format!(" {}", metric.unit()), theme::text_muted()),
        Span::styled(format!("  goal {}", format::metric_goal(metric)), theme::text_dim()),
    ]);
    f.render_widget(Paragraph::new(value_line), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme::metric_color(metric))
                .bg(theme::PROGRESS_EMPTY),
        )
        .ratio(display_progress(progress) / 100.0)
        .label(format!("{}%", progress.round()));
    f.render_widget(gauge, rows[1]);
}
