use uuid::Uuid;

use crate::error::TodoError;
use crate::models::{Todo, TodoList};

pub fn find_list_by_id(id: Uuid, lists: &[TodoList]) -> Option<&TodoList> {
    lists.iter().find(|list| list.id == id)
}

pub fn find_list_by_id_mut(id: Uuid, lists: &mut [TodoList]) -> Option<&mut TodoList> {
    lists.iter_mut().find(|list| list.id == id)
}

pub fn find_todo_by_id(id: Uuid, list: &TodoList) -> Option<&Todo> {
    list.todos.iter().find(|todo| todo.id == id)
}

pub fn find_todo_by_id_mut(id: Uuid, list: &mut TodoList) -> Option<&mut Todo> {
    list.todos.iter_mut().find(|todo| todo.id == id)
}

/// Like [`find_list_by_id`], but a miss is an error.
pub fn require_list(id: Uuid, lists: &[TodoList]) -> Result<&TodoList, TodoError> {
    find_list_by_id(id, lists).ok_or(TodoError::ListNotFound)
}

pub fn require_list_mut(id: Uuid, lists: &mut [TodoList]) -> Result<&mut TodoList, TodoError> {
    find_list_by_id_mut(id, lists).ok_or(TodoError::ListNotFound)
}

/// Look up a todo inside a list, reporting which of the two was missing.
pub fn require_todo_mut(
    list_id: Uuid,
    todo_id: Uuid,
    lists: &mut [TodoList],
) -> Result<&mut Todo, TodoError> {
    let list = require_list_mut(list_id, lists)?;
    find_todo_by_id_mut(todo_id, list).ok_or(TodoError::TodoNotFound)
}

/// Remove a todo from its list. Unknown ids leave the list untouched.
pub fn delete_todo_by_id(id: Uuid, list: &mut TodoList) {
    list.todos.retain(|todo| todo.id != id);
}

/// Return the collection without the list matching `id`.
pub fn delete_list_by_id(id: Uuid, lists: Vec<TodoList>) -> Vec<TodoList> {
    lists.into_iter().filter(|list| list.id != id).collect()
}

pub fn complete_all(list: &mut TodoList) {
    for todo in &mut list.todos {
        todo.completed = true;
    }
}
