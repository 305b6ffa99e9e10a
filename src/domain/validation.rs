use crate::error::TodoError;
use crate::models::TodoList;

/// Inclusive bounds on title length, counted in characters after trimming.
pub const MIN_TITLE_LEN: usize = 1;
pub const MAX_TITLE_LEN: usize = 100;

/// Check a proposed list title against the existing lists.
///
/// Uniqueness is checked first and is case-sensitive, so renaming a list to
/// its current title is reported as a duplicate.
pub fn validate_list_title(title: &str, lists: &[TodoList]) -> Result<(), TodoError> {
    let title = title.trim();
    if lists.iter().any(|list| list.title == title) {
        return Err(TodoError::DuplicateTitle);
    }
    check_length(title)
}

/// Check a proposed todo title. Todo titles need not be unique.
pub fn validate_todo_title(title: &str) -> Result<(), TodoError> {
    check_length(title.trim())
}

fn check_length(title: &str) -> Result<(), TodoError> {
    let len = title.chars().count();
    if (MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&len) {
        Ok(())
    } else {
        Err(TodoError::InvalidLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(titles: &[&str]) -> Vec<TodoList> {
        titles.iter().map(|t| TodoList::new(*t)).collect()
    }

    #[test]
    fn accepts_unique_title_within_bounds() {
        assert_eq!(validate_list_title("Groceries", &lists(&["Chores"])), Ok(()));
    }

    #[test]
    fn rejects_exact_duplicate() {
        assert_eq!(
            validate_list_title("Chores", &lists(&["Chores"])),
            Err(TodoError::DuplicateTitle)
        );
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        assert_eq!(validate_list_title("chores", &lists(&["Chores"])), Ok(()));
    }

    #[test]
    fn duplicate_takes_precedence_over_length() {
        let long = "x".repeat(150);
        assert_eq!(
            validate_list_title(&long, &lists(&[long.as_str()])),
            Err(TodoError::DuplicateTitle)
        );
    }

    #[test]
    fn whitespace_only_title_is_too_short() {
        assert_eq!(validate_list_title("   ", &[]), Err(TodoError::InvalidLength));
        assert_eq!(validate_todo_title("\t\n"), Err(TodoError::InvalidLength));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert_eq!(validate_todo_title("a"), Ok(()));
        assert_eq!(validate_todo_title(&"a".repeat(100)), Ok(()));
        assert_eq!(
            validate_todo_title(&"a".repeat(101)),
            Err(TodoError::InvalidLength)
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate_todo_title(&"é".repeat(100)), Ok(()));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let padded = format!("  {}  ", "a".repeat(100));
        assert_eq!(validate_todo_title(&padded), Ok(()));
        assert_eq!(
            validate_list_title(" Chores ", &lists(&["Chores"])),
            Err(TodoError::DuplicateTitle)
        );
    }
}
