use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use healthteen_core::models::Metric;
use healthteen_core::{Intent, Tab, View};

use crate::ui::notifications::Notification;
use crate::ui::{App, CommunityItem};

/// Translate one key press into intents. Rejected intents are reported by
/// `App::dispatch`, so results are not inspected here unless the UI reacts.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.controller.log_modal().is_open() {
        handle_log_modal_key(app, key);
        return;
    }

    match app.view().clone() {
        View::Main => handle_main_key(app, key),
        View::ChatDetail(contact) => handle_chat_detail_key(app, &contact, key),
        view => handle_detail_key(app, &view, key),
    }
}

fn open_log_modal(app: &mut App, metric: Metric) {
    app.log_input.clear();
    app.log_error = None;
    let _ = app.dispatch(Intent::OpenLogModal(metric));
}

fn handle_log_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.log_input.clear();
            app.log_error = None;
            let _ = app.dispatch(Intent::CloseLogModal);
        }
        KeyCode::Enter => {
            let target = app.controller.log_modal().target();
            let text = app.log_input.clone();
            // Validation errors stay inside the modal rather than the status line.
            match app.controller.dispatch(Intent::SubmitLog(text)) {
                Ok(()) => {
                    app.log_input.clear();
                    app.log_error = None;
                    if let Some(metric) = target {
                        app.notify(Notification::success(format!("Logged {metric}")));
                    }
                }
                Err(e) => app.log_error = Some(e.to_string()),
            }
        }
        KeyCode::Backspace => {
            app.log_input.pop();
            app.log_error = None;
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.log_input.push(c);
            app.log_error = None;
        }
        _ => {}
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                let _ = app.dispatch(Intent::SelectTab(tab));
            }
        }
        KeyCode::Right => {
            let _ = app.dispatch(Intent::SelectTab(app.active_tab().next()));
        }
        KeyCode::Left => {
            let _ = app.dispatch(Intent::SelectTab(app.active_tab().prev()));
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        _ => match app.active_tab() {
            Tab::Home => handle_home_key(app, key),
            Tab::Community => handle_community_key(app, key),
            Tab::Chat => handle_chat_list_key(app, key),
            Tab::Profile => handle_profile_key(app, key),
        },
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let metric = app.selected_metric();
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('l') => open_log_modal(app, metric),
        KeyCode::Enter => {
            let _ = app.dispatch(Intent::NavigateToDetail(View::MetricDetail(metric)));
        }
        KeyCode::Char('d') => {
            let _ = app.dispatch(Intent::NavigateToDetail(View::Dashboard));
        }
        _ => {}
    }
}

fn handle_community_key(app: &mut App, key: KeyEvent) {
    let intent = match (app.selected_community_item(), key.code) {
        (Some(CommunityItem::Group(group)), KeyCode::Enter) => {
            Intent::NavigateToDetail(View::GroupDetail(group.name.clone()))
        }
        (Some(CommunityItem::Post(post)), KeyCode::Enter | KeyCode::Char('l')) => {
            Intent::ToggleLike(post.id.clone())
        }
        _ => return,
    };
    let _ = app.dispatch(intent);
}

fn handle_chat_list_key(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Enter {
        return;
    }
    if let Some(contact) = app.selected_contact() {
        let view = View::ChatDetail(contact.name.clone());
        app.chat_draft.clear();
        let _ = app.dispatch(Intent::NavigateToDetail(view));
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    if key.code != KeyCode::Enter {
        return;
    }
    if let Some(entry) = app.selected_profile_entry() {
        let _ = app.dispatch(Intent::NavigateToDetail(entry.target()));
    }
}

fn handle_chat_detail_key(app: &mut App, contact: &str, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.chat_draft.clear();
            let _ = app.dispatch(Intent::NavigateBack);
        }
        KeyCode::Enter => {
            let intent = Intent::SendMessage {
                contact: contact.to_string(),
                text: app.chat_draft.clone(),
            };
            if app.dispatch(intent).is_ok() {
                app.chat_draft.clear();
            }
        }
        KeyCode::Backspace => {
            app.chat_draft.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_draft.push(c);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, view: &View, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            let _ = app.dispatch(Intent::NavigateBack);
        }
        KeyCode::Char('+') | KeyCode::Char('l') => {
            if let View::MetricDetail(metric) = view {
                open_log_modal(app, *metric);
            }
        }
        KeyCode::Tab if *view == View::Dashboard => app.cycle_dashboard_category(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::DashboardCategory;
    use healthteen_core::AppController;

    fn app() -> App {
        App::new(AppController::in_memory())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_log_steps_from_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.controller.log_modal().target(), Some(Metric::Steps));

        type_text(&mut app, "8500");
        press(&mut app, KeyCode::Enter);
        assert!(!app.controller.log_modal().is_open());
        assert_eq!(app.controller.data().ledger().latest(Metric::Steps), 8500.0);
        assert!(app.log_input.is_empty());
    }

    #[test]
    fn test_invalid_log_keeps_modal_open() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('l'));
        type_text(&mut app, "x.");
        assert_eq!(app.log_input, ".");

        press(&mut app, KeyCode::Enter);
        assert!(app.controller.log_modal().is_open());
        assert!(app.log_error.is_some());
        assert_eq!(app.controller.data().ledger().latest(Metric::Sleep), 7.2);

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.log_modal().is_open());
        assert!(app.log_error.is_none());
    }

    #[test]
    fn test_metric_detail_and_back() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.nav().selected_metric(), Some(Metric::Sleep));

        // Tabs are frozen while a detail view is open.
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab(), Tab::Home);

        press(&mut app, KeyCode::Esc);
        assert!(app.controller.nav().is_main());
        assert_eq!(app.controller.nav().selected_metric(), None);
    }

    #[test]
    fn test_send_chat_message() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.nav().selected_chat(), Some("Liam"));

        type_text(&mut app, "quick run?");
        assert!(app.running);
        press(&mut app, KeyCode::Enter);
        let thread = app.controller.data().thread("Liam");
        assert_eq!(thread.len(), 6);
        assert_eq!(thread[5].text, "quick run?");
        assert!(app.chat_draft.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.data().thread("Liam").len(), 6);
        assert!(app.notification().is_some());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_tab(), Tab::Chat);
        assert!(app.controller.nav().is_main());
        assert_eq!(app.controller.data().thread("Liam").len(), 5);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.nav().selected_chat(), Some("Liam"));
        assert_eq!(app.controller.active_thread().len(), 5);
    }

    #[test]
    fn test_like_from_community_feed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.data().posts()[0].like_count, 24);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.controller.data().posts()[0].like_count, 23);
    }

    #[test]
    fn test_open_group_from_community() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.nav().selected_group(), Some("Healthy Recipes"));
    }

    #[test]
    fn test_profile_to_dashboard() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.active_tab(), Tab::Profile);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), &View::Dashboard);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.dashboard_category, DashboardCategory::Food);
    }

    #[test]
    fn test_profile_settings_entries() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), &View::Settings);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);

        let mut app = self::app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
