use thiserror::Error;

/// Errors produced by the todo-list domain functions.
///
/// Every variant is recoverable by the user: validation failures are shown
/// next to the form that caused them, lookups that miss become a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("The title must be unique.")]
    DuplicateTitle,

    #[error("The title must be between 1 and 100 characters")]
    InvalidLength,

    #[error("List not found")]
    ListNotFound,

    #[error("Todo not found")]
    TodoNotFound,
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound | Self::TodoNotFound)
    }
}
