use healthteen_core::constants::WEEKDAY_LABELS;
use healthteen_core::models::{display_progress, Metric};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::ui::format;
use crate::ui::{layout, theme, App};

/// Current value, goal gauge, the week as bars and a one-line insight.
pub fn render_metric_detail(f: &mut Frame, app: &App, metric: Metric, area: Rect) {
    let area = layout::with_content_padding(area);
    let ledger = app.controller.data().ledger();
    let progress = ledger.goal_progress(metric);
    let color = theme::metric_color(metric);

    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(8),
        Constraint::Length(4),
    ])
    .split(area);

    // Current status
    let status = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .title(Span::styled(" Current ", theme::text_muted()));
    let status_inner = status.inner(rows[0]);
    f.render_widget(status, rows[0]);
    let status_rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(status_inner);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format::metric_value(metric, ledger.latest(metric)), theme::text_bold()),
            Span::styled(format!("   Goal: {}", format::metric_goal(metric)), theme::text_muted()),
        ])),
        status_rows[0],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(theme::PROGRESS_EMPTY))
            .ratio(display_progress(progress) / 100.0)
            .label(format!("{}%", progress.round())),
        status_rows[1],
    );

    // This week
    let history = ledger.history(metric);
    let bars: Vec<Bar> = history
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let day = WEEKDAY_LABELS.get(i).copied().unwrap_or("");
            Bar::default()
                .label(Line::from(day))
                .value(bar_value(metric, *value))
                .text_value(format::metric_value(metric, *value))
                .style(Style::default().fg(color))
        })
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_inactive())
                .title(Span::styled(" This Week ", theme::text_muted())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(rows[1].width, history.len()))
        .bar_gap(1)
        .max(bar_value(metric, ledger.peak(metric)).max(1))
        .value_style(theme::text_primary());
    f.render_widget(chart, rows[1]);

    // Insights
    let insight = Paragraph::new(insight_text(app, metric))
        .style(theme::text_muted())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_inactive())
                .title(Span::styled(" Insights ", theme::text_muted())),
        );
    f.render_widget(insight, rows[2]);
}

// Bars are u64; sleep hours are scaled to tenths so fractional nights differ.
fn bar_value(metric: Metric, value: f64) -> u64 {
    let scaled = if metric.is_integral() { value } else { value * 10.0 };
    scaled.max(0.0).round() as u64
}

fn bar_width(available: u16, days: usize) -> u16 {
    let days = days.max(1) as u16;
    (available.saturating_sub(2) / days).saturating_sub(1).clamp(3, 9)
}

pub fn insight_text(app: &App, metric: Metric) -> String {
    let ledger = app.controller.data().ledger();
    match metric {
        Metric::Steps => format!(
            "You're {}% towards your daily goal! Keep moving to reach {} steps.",
            ledger.goal_progress(metric).round(),
            format::metric_goal(metric)
        ),
        Metric::Sleep => format!(
            "Great sleep quality this week! You're averaging {:.1} hours per night.",
            ledger.average(metric)
        ),
        Metric::Calories => format!(
            "You're burning an average of {} calories daily. Stay consistent!",
            format::rounded(ledger.average(metric))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthteen_core::AppController;

    #[test]
    fn test_insights_use_ledger_figures() {
        let app = App::new(AppController::in_memory());
        assert_eq!(
            insight_text(&app, Metric::Steps),
            "You're 75% towards your daily goal! Keep moving to reach 10,000 steps."
        );
        assert!(insight_text(&app, Metric::Sleep).contains("7.6 hours"));
        assert!(insight_text(&app, Metric::Calories).contains("1,909 calories"));
    }

    #[test]
    fn test_bar_value_scales_sleep() {
        assert_eq!(bar_value(Metric::Sleep, 7.75), 78);
        assert_eq!(bar_value(Metric::Steps, 5234.0), 5234);
    }
}
