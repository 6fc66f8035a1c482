use healthteen_core::models::{Contact, Group, Metric, Post};
use healthteen_core::{AppController, CoreError, Intent, Tab, View};

use crate::ui::notifications::Notification;

/// Rows of the profile tab's settings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEntry {
    Dashboard,
    Password,
    Privacy,
    Notifications,
}

impl ProfileEntry {
    pub const ALL: [ProfileEntry; 4] = [
        ProfileEntry::Dashboard,
        ProfileEntry::Password,
        ProfileEntry::Privacy,
        ProfileEntry::Notifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileEntry::Dashboard => "Dashboard",
            ProfileEntry::Password => "Password",
            ProfileEntry::Privacy => "Privacy",
            ProfileEntry::Notifications => "Notifications",
        }
    }

    pub fn target(&self) -> View {
        match self {
            ProfileEntry::Dashboard => View::Dashboard,
            _ => View::Settings,
        }
    }
}

/// Category switcher on the dashboard. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardCategory {
    #[default]
    Sleep,
    Food,
    Exercise,
}

impl DashboardCategory {
    pub const ALL: [DashboardCategory; 3] = [
        DashboardCategory::Sleep,
        DashboardCategory::Food,
        DashboardCategory::Exercise,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardCategory::Sleep => "Sleep",
            DashboardCategory::Food => "Food",
            DashboardCategory::Exercise => "Exercise",
        }
    }

    pub fn next(&self) -> DashboardCategory {
        match self {
            DashboardCategory::Sleep => DashboardCategory::Food,
            DashboardCategory::Food => DashboardCategory::Exercise,
            DashboardCategory::Exercise => DashboardCategory::Sleep,
        }
    }
}

/// What the cursor points at on the community tab: groups first, then posts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommunityItem<'a> {
    Group(&'a Group),
    Post(&'a Post),
}

/// UI state around the core controller. Everything the core owns is reached
/// through `controller`; only cursor positions and text buffers live here.
pub struct App {
    pub controller: AppController,
    pub running: bool,
    pub selected_index: usize,
    pub log_input: String,
    /// Inline error shown inside the log modal.
    pub log_error: Option<String>,
    pub chat_draft: String,
    pub dashboard_category: DashboardCategory,
    notification: Option<Notification>,
}

impl App {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller,
            running: true,
            selected_index: 0,
            log_input: String::new(),
            log_error: None,
            chat_draft: String::new(),
            dashboard_category: DashboardCategory::default(),
            notification: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // ===== Intents =====

    /// Forward an intent to the core. A rejection lands in the status line.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), CoreError> {
        let navigates = matches!(
            intent,
            Intent::NavigateToDetail(_) | Intent::NavigateBack | Intent::SelectTab(_)
        );
        let result = self.controller.dispatch(intent);
        match &result {
            Ok(()) if navigates => self.selected_index = 0,
            Ok(()) => {}
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
        result
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Drop the notification once it has been up long enough.
    pub fn tick(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    // ===== Selection =====

    pub fn view(&self) -> &View {
        self.controller.nav().view()
    }

    pub fn active_tab(&self) -> Tab {
        self.controller.nav().active_tab()
    }

    /// Number of selectable rows in whatever is on screen.
    pub fn selection_len(&self) -> usize {
        let data = self.controller.data();
        match self.view() {
            View::Main => match self.active_tab() {
                Tab::Home => Metric::ALL.len(),
                Tab::Community => data.directory().groups().len() + data.posts().len(),
                Tab::Chat => data.directory().contacts().len(),
                Tab::Profile => ProfileEntry::ALL.len(),
            },
            View::GroupDetail(name) => data
                .directory()
                .group(name)
                .map(|g| g.posts.len())
                .unwrap_or(0),
            _ => 0,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.selection_len();
        if len > 0 && self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn selected_metric(&self) -> Metric {
        Metric::ALL[self.selected_index.min(Metric::ALL.len() - 1)]
    }

    pub fn selected_community_item(&self) -> Option<CommunityItem<'_>> {
        let data = self.controller.data();
        let groups = data.directory().groups();
        if let Some(group) = groups.get(self.selected_index) {
            return Some(CommunityItem::Group(group));
        }
        data.posts()
            .get(self.selected_index - groups.len())
            .map(CommunityItem::Post)
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.controller
            .data()
            .directory()
            .contacts()
            .get(self.selected_index)
    }

    pub fn selected_profile_entry(&self) -> Option<ProfileEntry> {
        ProfileEntry::ALL.get(self.selected_index).copied()
    }

    pub fn cycle_dashboard_category(&mut self) {
        self.dashboard_category = self.dashboard_category.next();
    }
}
