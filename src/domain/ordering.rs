use crate::models::{Titled, Todo, TodoList};

/// Number of todos on the list still open.
pub fn todos_remaining(list: &TodoList) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// A list is complete when it has at least one todo and none are open.
pub fn is_list_completed(list: &TodoList) -> bool {
    !list.todos.is_empty() && todos_remaining(list) == 0
}

pub fn is_todo_completed(todo: &Todo) -> bool {
    todo.completed
}

/// Order items for display: incomplete first, then completed, each group
/// alphabetical by title ignoring case.
///
/// Both passes are stable, so items whose titles differ only in case keep
/// their stored relative order.
pub fn sort_items<T, F>(items: &[T], is_completed: F) -> Vec<&T>
where
    T: Titled,
    F: Fn(&T) -> bool,
{
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| item.title().to_lowercase());

    let (mut incomplete, complete): (Vec<&T>, Vec<&T>) =
        sorted.into_iter().partition(|item| !is_completed(*item));
    incomplete.extend(complete);
    incomplete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, completed: bool) -> Todo {
        Todo {
            completed,
            ..Todo::new(title)
        }
    }

    fn list_of(todos: Vec<Todo>) -> TodoList {
        TodoList {
            todos,
            ..TodoList::new("list")
        }
    }

    fn titles<T: Titled>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.title().to_string()).collect()
    }

    #[test]
    fn counts_remaining_todos() {
        let list = list_of(vec![todo("a", true), todo("b", false), todo("c", false)]);
        assert_eq!(todos_remaining(&list), 2);
    }

    #[test]
    fn empty_list_is_not_completed() {
        assert!(!is_list_completed(&list_of(vec![])));
    }

    #[test]
    fn list_completion_requires_every_todo_done() {
        assert!(is_list_completed(&list_of(vec![todo("a", true)])));
        assert!(!is_list_completed(&list_of(vec![
            todo("a", true),
            todo("b", false)
        ])));
    }

    #[test]
    fn incomplete_items_sort_before_completed_ones() {
        let todos = vec![
            todo("Banana", false),
            todo("apple", true),
            todo("Cherry", false),
        ];
        let sorted = sort_items(&todos, is_todo_completed);
        assert_eq!(titles(&sorted), vec!["Banana", "Cherry", "apple"]);
    }

    #[test]
    fn alphabetical_order_ignores_case() {
        let todos = vec![todo("beta", false), todo("Alpha", false), todo("gamma", false)];
        let sorted = sort_items(&todos, is_todo_completed);
        assert_eq!(titles(&sorted), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn equal_keys_keep_stored_order() {
        let todos = vec![todo("milk", false), todo("Milk", false), todo("MILK", false)];
        let sorted = sort_items(&todos, is_todo_completed);
        assert_eq!(titles(&sorted), vec!["milk", "Milk", "MILK"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let todos = vec![
            todo("d", true),
            todo("B", false),
            todo("a", true),
            todo("c", false),
        ];
        let once: Vec<Todo> = sort_items(&todos, is_todo_completed)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Todo> = sort_items(&once, is_todo_completed)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn lists_sort_by_completion() {
        let lists = vec![
            list_of(vec![todo("x", true)]),
            TodoList::new("zebra"),
            list_of(vec![todo("y", false)]),
        ];
        let sorted = sort_items(&lists, is_list_completed);
        assert!(!is_list_completed(sorted[0]));
        assert!(!is_list_completed(sorted[1]));
        assert!(is_list_completed(sorted[2]));
    }
}
