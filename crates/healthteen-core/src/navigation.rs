use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::models::Metric;

/// Bottom-bar tabs of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Community,
    Chat,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Community, Tab::Chat, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Community => "Community",
            Tab::Chat => "Chat",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Community => 1,
            Tab::Chat => 2,
            Tab::Profile => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Payload-free name of a view, as used in the loose `(kind, payload)` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Main,
    MetricDetail,
    GroupDetail,
    ChatDetail,
    Settings,
    Dashboard,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Main => "main",
            ViewKind::MetricDetail => "metric-detail",
            ViewKind::GroupDetail => "group-detail",
            ViewKind::ChatDetail => "chat-detail",
            ViewKind::Settings => "settings",
            ViewKind::Dashboard => "dashboard",
        }
    }

    pub fn takes_payload(&self) -> bool {
        matches!(
            self,
            ViewKind::MetricDetail | ViewKind::GroupDetail | ViewKind::ChatDetail
        )
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(ViewKind::Main),
            "metric-detail" => Ok(ViewKind::MetricDetail),
            "group-detail" => Ok(ViewKind::GroupDetail),
            "chat-detail" => Ok(ViewKind::ChatDetail),
            "settings" => Ok(ViewKind::Settings),
            "dashboard" => Ok(ViewKind::Dashboard),
            other => Err(CoreError::validation(format!("unknown view '{other}'"))),
        }
    }
}

/// What is on screen. Detail views carry their selection with them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    MetricDetail(Metric),
    GroupDetail(String),
    ChatDetail(String),
    Settings,
    Dashboard,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Main => ViewKind::Main,
            View::MetricDetail(_) => ViewKind::MetricDetail,
            View::GroupDetail(_) => ViewKind::GroupDetail,
            View::ChatDetail(_) => ViewKind::ChatDetail,
            View::Settings => ViewKind::Settings,
            View::Dashboard => ViewKind::Dashboard,
        }
    }

    /// Build a typed view from a kind and optional payload.
    ///
    /// Payload-bearing kinds require a payload; the others ignore it.
    pub fn from_parts(kind: ViewKind, payload: Option<&str>) -> Result<View, CoreError> {
        if kind.takes_payload() && payload.is_none() {
            return Err(CoreError::validation(format!("{kind} needs a payload")));
        }
        let payload = payload.unwrap_or_default();
        Ok(match kind {
            ViewKind::Main => View::Main,
            ViewKind::MetricDetail => View::MetricDetail(payload.parse()?),
            ViewKind::GroupDetail => View::GroupDetail(payload.to_string()),
            ViewKind::ChatDetail => View::ChatDetail(payload.to_string()),
            ViewKind::Settings => View::Settings,
            ViewKind::Dashboard => View::Dashboard,
        })
    }

    /// The payload in its loose string form.
    pub fn payload(&self) -> Option<String> {
        match self {
            View::MetricDetail(metric) => Some(metric.label().to_string()),
            View::GroupDetail(name) | View::ChatDetail(name) => Some(name.clone()),
            _ => None,
        }
    }
}

/// Active tab plus the single-level view stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_tab: Tab,
    view: View,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Getters =====

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_main(&self) -> bool {
        self.view == View::Main
    }

    pub fn selected_metric(&self) -> Option<Metric> {
        match self.view {
            View::MetricDetail(metric) => Some(metric),
            _ => None,
        }
    }

    pub fn selected_group(&self) -> Option<&str> {
        match &self.view {
            View::GroupDetail(name) => Some(name),
            _ => None,
        }
    }

    pub fn selected_chat(&self) -> Option<&str> {
        match &self.view {
            View::ChatDetail(name) => Some(name),
            _ => None,
        }
    }

    // ===== Transitions =====

    /// Replace the current view. There is no deeper history to push onto.
    pub fn navigate_to_detail(&mut self, view: View) {
        self.view = view;
    }

    pub fn navigate(&mut self, kind: ViewKind, payload: Option<&str>) -> Result<(), CoreError> {
        let view = View::from_parts(kind, payload)?;
        self.navigate_to_detail(view);
        Ok(())
    }

    /// Back to main, dropping any selection. The active tab is kept.
    pub fn navigate_back(&mut self) {
        self.view = View::Main;
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), CoreError> {
        if !self.is_main() {
            return Err(CoreError::validation(format!(
                "cannot switch tabs from {}",
                self.view.kind()
            )));
        }
        self.active_tab = tab;
        Ok(())
    }
}

/// The "log today's value" dialog. Closed when there is no target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogModalState {
    target: Option<Metric>,
}

impl LogModalState {
    pub fn open(&mut self, metric: Metric) {
        self.target = Some(metric);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<Metric> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupKind;

    #[test]
    fn test_initial_state() {
        let nav = NavigationState::new();
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(nav.is_main());
        assert_eq!(nav.selected_metric(), None);
    }

    #[test]
    fn test_back_clears_selected_metric() {
        let mut nav = NavigationState::new();
        nav.navigate(ViewKind::MetricDetail, Some("Sleep")).unwrap();
        assert_eq!(nav.selected_metric(), Some(Metric::Sleep));

        nav.navigate_back();
        assert!(nav.is_main());
        assert_eq!(nav.selected_metric(), None);
        assert_eq!(nav.view().payload(), None);
    }

    #[test]
    fn test_back_from_any_detail_returns_to_main() {
        for view in [
            View::GroupDetail("Fitness Teens".into()),
            View::ChatDetail("Liam".into()),
            View::Settings,
            View::Dashboard,
        ] {
            let mut nav = NavigationState::new();
            nav.navigate_to_detail(view);
            nav.navigate_back();
            assert_eq!(nav.view(), &View::Main);
            assert_eq!(nav.selected_group(), None);
            assert_eq!(nav.selected_chat(), None);
        }
    }

    #[test]
    fn test_only_active_payload_is_visible() {
        let mut nav = NavigationState::new();
        nav.navigate_to_detail(View::GroupDetail("Healthy Recipes".into()));
        nav.navigate_to_detail(View::ChatDetail("Lana".into()));
        assert_eq!(nav.selected_chat(), Some("Lana"));
        assert_eq!(nav.selected_group(), None);
    }

    #[test]
    fn test_select_tab_only_on_main() {
        let mut nav = NavigationState::new();
        nav.select_tab(Tab::Chat).unwrap();
        assert_eq!(nav.active_tab(), Tab::Chat);

        nav.navigate_to_detail(View::ChatDetail("Liam".into()));
        assert!(matches!(
            nav.select_tab(Tab::Profile),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(nav.active_tab(), Tab::Chat);
        assert_eq!(nav.selected_chat(), Some("Liam"));

        nav.navigate_back();
        assert_eq!(nav.active_tab(), Tab::Chat);
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            View::from_parts(ViewKind::MetricDetail, Some("steps")),
            Ok(View::MetricDetail(Metric::Steps))
        );
        assert_eq!(View::from_parts(ViewKind::Settings, Some("x")), Ok(View::Settings));
        assert!(matches!(
            View::from_parts(ViewKind::ChatDetail, None),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(
            View::from_parts(ViewKind::MetricDetail, Some("Water")),
            Err(CoreError::not_found(LookupKind::Metric, "Water"))
        );
    }

    #[test]
    fn test_view_kind_strings() {
        for kind in [
            ViewKind::Main,
            ViewKind::MetricDetail,
            ViewKind::GroupDetail,
            ViewKind::ChatDetail,
            ViewKind::Settings,
            ViewKind::Dashboard,
        ] {
            assert_eq!(kind.as_str().parse::<ViewKind>(), Ok(kind));
        }
        assert!("profile".parse::<ViewKind>().is_err());
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(Tab::Home.next(), Tab::Community);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        assert_eq!(Tab::Home.prev(), Tab::Profile);
        assert_eq!(Tab::from_index(2), Some(Tab::Chat));
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn test_log_modal() {
        let mut modal = LogModalState::default();
        assert!(!modal.is_open());
        modal.open(Metric::Calories);
        assert_eq!(modal.target(), Some(Metric::Calories));
        modal.close();
        assert!(!modal.is_open());
    }
}
