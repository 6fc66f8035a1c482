use anyhow::Result;

use crate::config::CoreConfig;
use crate::error::CoreError;
use crate::models::{ChatMessage, Metric};
use crate::navigation::{LogModalState, NavigationState, Tab, View};
use crate::store::{AppDataStore, PersistentStore};

/// A discrete user request raised by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    LogMetric { metric: Metric, value: f64 },
    /// Text typed into the log modal, for the modal's current target.
    SubmitLog(String),
    ToggleLike(String),
    SendMessage { contact: String, text: String },
    NavigateToDetail(View),
    NavigateBack,
    SelectTab(Tab),
    OpenLogModal(Metric),
    CloseLogModal,
}

/// Single owner of all app state. Intents are applied one at a time, each
/// fully persisted before `dispatch` returns.
#[derive(Debug)]
pub struct AppController {
    data: AppDataStore,
    nav: NavigationState,
    log_modal: LogModalState,
}

impl AppController {
    pub fn new(data: AppDataStore) -> Self {
        Self {
            data,
            nav: NavigationState::new(),
            log_modal: LogModalState::default(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self> {
        Ok(Self::new(AppDataStore::from_config(config)?))
    }

    /// Seeded controller backed by memory only.
    pub fn in_memory() -> Self {
        Self::new(AppDataStore::new(PersistentStore::in_memory()))
    }

    // ===== Getters =====

    pub fn data(&self) -> &AppDataStore {
        &self.data
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn log_modal(&self) -> &LogModalState {
        &self.log_modal
    }

    /// Thread of the open chat, empty when no chat is open.
    pub fn active_thread(&self) -> &[ChatMessage] {
        self.nav
            .selected_chat()
            .map(|contact| self.data.thread(contact))
            .unwrap_or(&[])
    }

    // ===== Dispatch =====

    pub fn dispatch(&mut self, intent: Intent) -> Result<(), CoreError> {
        tracing::debug!(?intent, "dispatch");
        let result = self.apply(intent);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "intent rejected");
        }
        result
    }

    fn apply(&mut self, intent: Intent) -> Result<(), CoreError> {
        match intent {
            Intent::LogMetric { metric, value } => self.data.log_metric(metric, value),
            Intent::SubmitLog(text) => {
                let Some(metric) = self.log_modal.target() else {
                    return Err(CoreError::validation("no metric is being logged"));
                };
                self.data.log_metric_text(metric, &text)?;
                self.log_modal.close();
                Ok(())
            }
            Intent::ToggleLike(id) => self.data.toggle_like(&id),
            Intent::SendMessage { contact, text } => self.data.send_message(&contact, &text),
            Intent::NavigateToDetail(view) => {
                self.check_payload(&view)?;
                let open_chat = self.open_chat();
                self.nav.navigate_to_detail(view);
                self.close_chat(open_chat);
                Ok(())
            }
            Intent::NavigateBack => {
                let open_chat = self.open_chat();
                self.nav.navigate_back();
                self.close_chat(open_chat);
                Ok(())
            }
            Intent::SelectTab(tab) => self.nav.select_tab(tab),
            Intent::OpenLogModal(metric) => {
                self.log_modal.open(metric);
                Ok(())
            }
            Intent::CloseLogModal => {
                self.log_modal.close();
                Ok(())
            }
        }
    }

    fn open_chat(&self) -> Option<String> {
        self.nav.selected_chat().map(str::to_owned)
    }

    /// A thread's messages last only as long as its view stays open.
    fn close_chat(&mut self, previous: Option<String>) {
        if let Some(contact) = previous {
            if self.nav.selected_chat() != Some(contact.as_str()) {
                self.data.reset_thread(&contact);
            }
        }
    }

    fn check_payload(&self, view: &View) -> Result<(), CoreError> {
        let directory = self.data.directory();
        match view {
            View::GroupDetail(name) => directory.group(name).map(|_| ()),
            View::ChatDetail(name) => directory.contact(name).map(|_| ()),
            _ => Ok(()),
        }
    }
}
