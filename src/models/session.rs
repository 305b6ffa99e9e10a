use serde::{Deserialize, Serialize};

use super::TodoList;

/// The complete state of one browser session.
///
/// A fresh session starts with no lists and no messages. The struct is
/// serialized as JSON into the session store after every request that
/// touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub lists: Vec<TodoList>,
    /// Messages queued for the next rendered page.
    #[serde(default)]
    pub flashes: Vec<Flash>,
}

impl SessionData {
    pub fn flash(&mut self, kind: FlashKind, message: impl Into<String>) {
        self.flashes.push(Flash {
            kind,
            message: message.into(),
        });
    }

    /// Drain pending messages. Each message is shown exactly once.
    pub fn take_flashes(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.flashes)
    }
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

/// Category of a flash message, used as its CSS class.
///
/// - `Success`: an action went through
/// - `Error`: input was rejected
/// - `Info`: neutral notice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}
