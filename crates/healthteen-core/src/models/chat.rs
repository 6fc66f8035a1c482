use serde::{Deserialize, Serialize};

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Formatted wall-clock label, e.g. "10:32 AM".
    #[serde(rename = "time")]
    pub sent_at: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>, sent_at: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            sent_at: sent_at.into(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// An entry in the chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub last_message: String,
    /// Relative age label of the last message ("2m", "1d").
    pub last_active: String,
    pub unread: bool,
}

impl Contact {
    /// First character of the name, for avatar placeholders.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
