use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Titled, Todo};

/// A named collection of todos.
///
/// The `todos` vector keeps insertion order. Views sort a borrowed copy, so
/// the stored order never changes after an item is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list with a fresh id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a new incomplete todo and return its id.
    pub fn push_todo(&mut self, title: impl Into<String>) -> Uuid {
        let todo = Todo::new(title);
        let id = todo.id;
        self.todos.push(todo);
        id
    }
}

impl Titled for TodoList {
    fn title(&self) -> &str {
        &self.title
    }
}

/// Form body for creating a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListInput {
    pub list_title: String,
}

/// Form body for renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameListInput {
    pub new_title: String,
}
