use std::collections::HashMap;

use crate::error::CoreError;
use crate::models::{ChatMessage, Sender};

/// Per-contact message logs.
///
/// A log lives only while its thread view is open: closing the view resets it
/// to the transcript. Logs are never persisted.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    threads: HashMap<String, Vec<ChatMessage>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every named contact's thread with a copy of `transcript`.
    pub fn seeded<I, S>(contacts: I, transcript: &[ChatMessage]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let threads = contacts
            .into_iter()
            .map(|name| (name.into(), transcript.to_vec()))
            .collect();
        Self { threads }
    }

    /// Messages exchanged with `contact`, oldest first. Unknown contacts have an empty log.
    pub fn thread(&self, contact: &str) -> &[ChatMessage] {
        self.threads.get(contact).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace `contact`'s log with a fresh copy of `transcript`.
    pub fn reset_thread(&mut self, contact: &str, transcript: &[ChatMessage]) {
        self.threads.insert(contact.to_string(), transcript.to_vec());
    }

    /// Append a message from the viewer. Blank text is rejected.
    pub fn send_message(
        &mut self,
        contact: &str,
        text: &str,
        sent_at: impl Into<String>,
    ) -> Result<&ChatMessage, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::validation("message is empty"));
        }
        let thread = self.threads.entry(contact.to_string()).or_default();
        thread.push(ChatMessage::new(Sender::Me, text, sent_at));
        Ok(&thread[thread.len() - 1])
    }
}
