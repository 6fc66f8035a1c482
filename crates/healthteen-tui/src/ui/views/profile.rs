use healthteen_core::constants::{VIEWER_NAME, VIEWER_TIER};
use healthteen_core::models::Metric;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::ProfileEntry;
use crate::ui::format;
use crate::ui::{layout, theme, App};

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let area = layout::with_content_padding(area);
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let header = vec![
        Line::from(Span::styled(VIEWER_NAME, theme::text_bold())).centered(),
        Line::from(Span::styled(VIEWER_TIER, theme::text_muted())).centered(),
    ];
    f.render_widget(Paragraph::new(header), rows[0]);

    render_averages(f, app, rows[1]);

    let items: Vec<ListItem> = ProfileEntry::ALL
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == app.selected_index;
            let marker = if selected { "› " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, theme::status_info()),
                Span::styled(entry.label(), theme::list_item(selected)),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme::border_inactive())
                .title(Span::styled(" Account Settings ", theme::text_muted())),
        ),
        rows[3],
    );
}

/// Week averages: sleep to one decimal, the counts rounded with separators.
fn render_averages(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .title(Span::styled(" Dashboard ", theme::text_muted()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for (metric, cell) in [Metric::Sleep, Metric::Calories, Metric::Steps].iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(metric.label(), theme::text_muted())),
            Line::from(Span::styled(average_label(app, *metric), theme::text_bold())),
        ];
        f.render_widget(Paragraph::new(lines), *cell);
    }
}

pub fn average_label(app: &App, metric: Metric) -> String {
    let average = app.controller.data().ledger().average(metric);
    match metric {
        Metric::Sleep => format!("{average:.1}h"),
        Metric::Steps | Metric::Calories => format::rounded(average),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthteen_core::AppController;

    #[test]
    fn test_average_labels() {
        let app = App::new(AppController::in_memory());
        assert_eq!(average_label(&app, Metric::Sleep), "7.6h");
        assert_eq!(average_label(&app, Metric::Calories), "1,909");
        assert_eq!(average_label(&app, Metric::Steps), "7,245");
    }
}
