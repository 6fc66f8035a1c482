use healthteen_core::constants::WEEKDAY_LABELS;
use healthteen_core::models::Metric;
use healthteen_core::CoreError;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::ui::app::DashboardCategory;
use crate::ui::format;
use crate::ui::{layout, theme, App};

const BADGES: [(&str, &str); 3] = [
    ("Sleep Champion", "7 days of consistent sleep"),
    ("Healthy Eater", "Tracked 50 meals"),
    ("Active Achiever", "Completed 10 workouts"),
];

const MEALS: [(&str, u16, u32); 4] = [
    ("Breakfast", 85, 17),
    ("Lunch", 92, 18),
    ("Dinner", 78, 16),
    ("Snacks", 65, 13),
];

const ACTIVE_MINUTES: [u64; 7] = [25, 35, 28, 42, 30, 38, 45];

const ACTIVE_MINUTES_TOTAL: u32 = 210;

pub fn render_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    let mut tabs = Vec::new();
    for category in DashboardCategory::ALL {
        let style = if category == app.dashboard_category {
            theme::tab_active()
        } else {
            theme::tab_inactive()
        };
        tabs.push(Span::styled(format!(" {} ", category.label()), style));
        tabs.push(Span::raw(" "));
    }
    tabs.push(Span::styled(" Tab to switch", theme::text_dim()));
    f.render_widget(Paragraph::new(Line::from(tabs)), rows[0]);

    match app.dashboard_category {
        DashboardCategory::Sleep => render_sleep(f, app, rows[1]),
        DashboardCategory::Food => render_food(f, rows[1]),
        DashboardCategory::Exercise => render_exercise(f, rows[1]),
    }
}

/// Trend label for a metric: `+N%`, `-N%`, or `no trend` when undefined.
pub fn trend_label(app: &App, metric: Metric) -> (String, Style) {
    match app.controller.data().ledger().trend_percent(metric) {
        Ok(percent) => (format::signed_percent(percent), theme::trend_style(percent)),
        Err(CoreError::DivisionUndefined { .. }) => ("no trend".to_string(), theme::text_dim()),
        Err(e) => (e.to_string(), theme::status_error()),
    }
}

fn render_sleep(f: &mut Frame, app: &App, area: Rect) {
    let ledger = app.controller.data().ledger();
    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(8),
        Constraint::Length(BADGES.len() as u16 + 2),
        Constraint::Length(4),
    ])
    .split(area);

    let (trend, trend_style) = trend_label(app, Metric::Sleep);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Sleep Duration", theme::heading())),
            Line::from(vec![
                Span::styled(format!("{:.1}h", ledger.average(Metric::Sleep)), theme::text_bold()),
                Span::styled("  Last 7 Days ", theme::text_muted()),
                Span::styled(trend, trend_style),
            ]),
        ]),
        rows[0],
    );

    let bars: Vec<Bar> = ledger
        .history(Metric::Sleep)
        .iter()
        .enumerate()
        .map(|(i, hours)| {
            Bar::default()
                .label(Line::from(WEEKDAY_LABELS.get(i).copied().unwrap_or("")))
                .value((hours * 10.0).max(0.0).round() as u64)
                .text_value(format::hours(*hours))
        })
        .collect();
    f.render_widget(
        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme::METRIC_SLEEP)),
        rows[1],
    );

    let badges: Vec<Line> = BADGES
        .iter()
        .map(|(title, description)| {
            Line::from(vec![
                Span::styled("★ ", theme::status_warning()),
                Span::styled(format!("{title:<18}"), theme::text_bold()),
                Span::styled(*description, theme::text_muted()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(badges).block(section(" Badges & Awards ")), rows[2]);

    let history = vec![
        Line::from(vec![
            Span::styled("Night Sleep  ", theme::text_primary()),
            Span::styled(format::hours(ledger.latest(Metric::Sleep)), theme::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("Nap          ", theme::text_primary()),
            Span::styled("1h 30m", theme::text_muted()),
        ]),
    ];
    f.render_widget(Paragraph::new(history).block(section(" History ")), rows[3]);
}

fn render_food(f: &mut Frame, area: Rect) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(MEALS.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Meals Tracked", theme::heading())),
            Line::from(vec![
                Span::styled("50", theme::text_bold()),
                Span::styled("  This month ", theme::text_muted()),
                Span::styled("+12%", theme::status_success()),
            ]),
        ]),
        rows[0],
    );

    for (i, (meal, percent, count)) in MEALS.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(11), Constraint::Min(0)]).split(rows[i + 1]);
        f.render_widget(Paragraph::new(Span::styled(*meal, theme::text_muted())), cols[0]);
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme::METRIC_CALORIES).bg(theme::PROGRESS_EMPTY))
                .percent(*percent)
                .label(count.to_string()),
            cols[1],
        );
    }
}

fn render_exercise(f: &mut Frame, area: Rect) {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Active Minutes", theme::heading())),
            Line::from(vec![
                Span::styled(ACTIVE_MINUTES_TOTAL.to_string(), theme::text_bold()),
                Span::styled("  This week ", theme::text_muted()),
                Span::styled("+8%", theme::status_success()),
            ]),
        ]),
        rows[0],
    );

    let bars: Vec<Bar> = ACTIVE_MINUTES
        .iter()
        .zip(WEEKDAY_LABELS)
        .map(|(minutes, day)| Bar::default().label(Line::from(day)).value(*minutes))
        .collect();
    f.render_widget(
        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme::METRIC_STEPS)),
        rows[1],
    );
}

fn section(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .title(Span::styled(title, theme::text_muted()))
}
