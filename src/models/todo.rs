use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Titled;

/// A single item on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Create an incomplete todo with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Titled for Todo {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Form body for adding a todo to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoInput {
    pub todo: String,
}
