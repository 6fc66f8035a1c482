use chrono::Local;
use healthteen_core::constants::APP_TITLE;
use healthteen_core::{Tab, View};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::{render_statusbar, render_tab_bar};
use crate::ui::{layout, theme, App};

pub fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let nav = app.controller.nav();
    let tab_bar_height = if nav.is_main() { layout::TAB_BAR_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(tab_bar_height),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    render_header(f, app, chunks[0]);

    match nav.view() {
        View::Main => match nav.active_tab() {
            Tab::Home => ui::views::render_home(f, app, chunks[1]),
            Tab::Community => ui::views::render_community(f, app, chunks[1]),
            Tab::Chat => ui::views::render_chat_list(f, app, chunks[1]),
            Tab::Profile => ui::views::render_profile(f, app, chunks[1]),
        },
        View::MetricDetail(metric) => ui::views::render_metric_detail(f, app, *metric, chunks[1]),
        View::GroupDetail(name) => ui::views::render_group_detail(f, app, name, chunks[1]),
        View::ChatDetail(_) => ui::views::render_chat_detail(f, app, chunks[1]),
        View::Settings => ui::views::render_settings(f, chunks[1]),
        View::Dashboard => ui::views::render_dashboard(f, app, chunks[1]),
    }

    if nav.is_main() {
        render_tab_bar(f, chunks[2], nav.active_tab());
    }

    let updated = format!(
        "updated {}",
        app.controller.data().ledger().last_updated().format("%b %-d")
    );
    render_statusbar(f, chunks[3], app.notification(), key_hints(app), &updated);

    if let Some(metric) = app.controller.log_modal().target() {
        ui::views::render_log_modal(f, app, metric);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let view = app.controller.nav().view();
    let clock = Local::now().format("%H:%M").to_string();
    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(clock.len() as u16 + 2)])
        .split(layout::with_content_padding(area));

    let mut spans = Vec::new();
    if *view != View::Main {
        spans.push(Span::styled("← ", theme::text_muted()));
    }
    spans.push(Span::styled(view_title(view), theme::text_bold()));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(clock, theme::text_muted())).right_aligned(),
        chunks[1],
    );
}

/// Header title for a view: the app name on main, otherwise what is open.
pub fn view_title(view: &View) -> String {
    match view {
        View::Main => APP_TITLE.to_string(),
        View::MetricDetail(metric) => metric.label().to_string(),
        View::GroupDetail(name) | View::ChatDetail(name) => name.clone(),
        View::Settings => "Settings".to_string(),
        View::Dashboard => "Dashboard".to_string(),
    }
}

fn key_hints(app: &App) -> &'static str {
    if app.controller.log_modal().is_open() {
        return "Enter save · Esc cancel";
    }
    let nav = app.controller.nav();
    match nav.view() {
        View::Main => match nav.active_tab() {
            Tab::Home => "↑↓ select · Enter details · + log · d dashboard · 1-4 tabs · q quit",
            Tab::Community => "↑↓ select · Enter open/like · l like · 1-4 tabs · q quit",
            Tab::Chat => "↑↓ select · Enter open chat · 1-4 tabs · q quit",
            Tab::Profile => "↑↓ select · Enter open · 1-4 tabs · q quit",
        },
        View::MetricDetail(_) => "+ log today · Esc back",
        View::ChatDetail(_) => "Enter send · Esc back",
        View::Dashboard => "Tab category · Esc back",
        View::GroupDetail(_) => "↑↓ scroll · Esc back",
        View::Settings => "Esc back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthteen_core::models::Metric;
    use healthteen_core::{AppController, Intent};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_home_renders_cards_and_tabs() {
        let app = App::new(AppController::in_memory());
        let screen = draw(&app);
        assert!(screen.contains("Health Teen"));
        assert!(screen.contains("7,456"));
        assert!(screen.contains("Community"));
        assert!(!screen.contains("←"));
    }

    #[test]
    fn test_detail_hides_tab_bar() {
        let mut app = App::new(AppController::in_memory());
        app.dispatch(Intent::NavigateToDetail(View::MetricDetail(Metric::Sleep)))
            .unwrap();
        let screen = draw(&app);
        assert!(screen.contains("← Sleep"));
        assert!(screen.contains("This Week"));
        assert!(!screen.contains("2 Community"));
    }

    #[test]
    fn test_every_view_renders() {
        let mut app = App::new(AppController::in_memory());
        for tab in Tab::ALL {
            app.dispatch(Intent::SelectTab(tab)).unwrap();
            draw(&app);
        }
        for view in [
            View::GroupDetail("Mental Wellness".into()),
            View::ChatDetail("Liam".into()),
            View::Settings,
            View::Dashboard,
        ] {
            app.dispatch(Intent::NavigateToDetail(view.clone())).unwrap();
            let screen = draw(&app);
            assert!(screen.contains(&view_title(&view)));
            app.dispatch(Intent::NavigateBack).unwrap();
        }
    }

    #[test]
    fn test_long_chat_scrolls_to_newest_message() {
        let mut app = App::new(AppController::in_memory());
        app.dispatch(Intent::NavigateToDetail(View::ChatDetail("Liam".into())))
            .unwrap();
        for end in ["first-stop", "second-stop", "finish-line"] {
            app.dispatch(Intent::SendMessage {
                contact: "Liam".into(),
                text: format!("{} {end}", "run ".repeat(250)),
            })
            .unwrap();
        }
        let screen = draw(&app);
        assert!(screen.contains("finish-line"));
        assert!(!screen.contains("Hey! How's your fitness"));
    }

    #[test]
    fn test_log_modal_overlay() {
        let mut app = App::new(AppController::in_memory());
        app.dispatch(Intent::OpenLogModal(Metric::Calories)).unwrap();
        let screen = draw(&app);
        assert!(screen.contains("Log Calories"));
        assert!(screen.contains("Calories burned"));
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(view_title(&View::Main), "Health Teen");
        assert_eq!(view_title(&View::MetricDetail(Metric::Steps)), "Steps");
        assert_eq!(view_title(&View::ChatDetail("Lana".into())), "Lana");
    }
}
