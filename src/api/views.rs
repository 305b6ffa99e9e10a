//! HTML rendering for the todo pages.
//!
//! Pages are plain strings assembled here. Every piece of user input goes
//! through [`escape`] before it lands in markup.

use uuid::Uuid;

use crate::domain::{is_list_completed, todos_remaining};
use crate::models::{Flash, Todo, TodoList};

const STYLE: &str = "body{font-family:sans-serif;max-width:40em;margin:2em auto;}\
.flash{padding:.5em;margin:.5em 0;}\
.flash.success{background:#dfd;}.flash.error{background:#fdd;}.flash.info{background:#ddf;}\
li.complete{color:#888;text-decoration:line-through;}\
ul.lists li,ul.todos li{margin:.3em 0;}\
form.inline{display:inline;}";

pub fn list_path(id: Uuid) -> String {
    format!("/lists/{}", id)
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} - Todos</title>\n", escape(title)));
    out.push_str(&format!("<style>{}</style>\n", STYLE));
    out.push_str("</head>\n<body>\n<header><h1><a href=\"/lists\">Todos</a></h1></header>\n");
    for flash in flashes {
        out.push_str(&format!(
            "<div class=\"flash {}\">{}</div>\n",
            flash.kind.as_str(),
            escape(&flash.message)
        ));
    }
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn post_button(action: &str, label: &str) -> String {
    format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\"><button type=\"submit\">{}</button></form>",
        action, label
    )
}

/// The overview of all lists. `lists` is expected in display order.
pub fn lists_page(lists: &[&TodoList], flashes: &[Flash]) -> String {
    let mut body = String::new();

    if lists.is_empty() {
        body.push_str(
            "<p id=\"no_list\">You don't have any todo lists. \
             <a href=\"/lists/new\">Why not create one?</a></p>\n",
        );
    } else {
        body.push_str("<ul class=\"lists\">\n");
        for list in lists {
            let class = if is_list_completed(list) { "complete" } else { "" };
            body.push_str(&format!(
                "<li class=\"{}\"><a href=\"{}\">{}</a> <span class=\"count\">{}/{}</span></li>\n",
                class,
                list_path(list.id),
                escape(&list.title),
                todos_remaining(list),
                list.todos.len()
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<p><a href=\"/lists/new\">New List</a></p>\n");
    layout("Lists", flashes, &body)
}

/// The create-list form, pre-filled with `title` after a rejected attempt.
pub fn new_list_page(flashes: &[Flash], title: &str) -> String {
    let body = format!(
        "<h2>Create a new list</h2>\n\
         <form method=\"post\" action=\"/lists\">\n\
         <label for=\"list_title\">Enter the name for your new list:</label>\n\
         <input id=\"list_title\" name=\"list_title\" placeholder=\"List Name\" value=\"{}\" maxlength=\"100\">\n\
         <button type=\"submit\">Save</button>\n\
         <a href=\"/lists\">Cancel</a>\n\
         </form>\n",
        escape(title)
    );
    layout("New List", flashes, &body)
}

/// A single list. `todos` is expected in display order; `todo_title`
/// pre-fills the add form after a rejected attempt.
pub fn list_page(list: &TodoList, todos: &[&Todo], flashes: &[Flash], todo_title: &str) -> String {
    let path = list_path(list.id);
    let mut body = String::new();

    let class = if is_list_completed(list) { " class=\"complete\"" } else { "" };
    body.push_str(&format!("<h2{}>{}</h2>\n", class, escape(&list.title)));
    body.push_str(&format!(
        "<p><a href=\"{}/edit\">Edit list</a> | {}/{} remaining</p>\n",
        path,
        todos_remaining(list),
        list.todos.len()
    ));

    if todos_remaining(list) > 0 {
        body.push_str(&post_button(&format!("{}/complete_all", path), "Complete All"));
        body.push('\n');
    }

    body.push_str("<ul class=\"todos\">\n");
    for todo in todos {
        let todo_path = format!("{}/todos/{}", path, todo.id);
        let (class, toggle_label) = if todo.completed {
            ("complete", "Mark incomplete")
        } else {
            ("", "Mark complete")
        };
        body.push_str(&format!(
            "<li class=\"{}\">{} {} {}</li>\n",
            class,
            escape(&todo.title),
            post_button(&format!("{}/toggle", todo_path), toggle_label),
            post_button(&format!("{}/delete", todo_path), "Delete")
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}/todos\">\n\
         <label for=\"todo\">Enter a new todo item:</label>\n\
         <input id=\"todo\" name=\"todo\" placeholder=\"Something to do\" value=\"{}\" maxlength=\"100\">\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <p><a href=\"/lists\">All lists</a></p>\n",
        path,
        escape(todo_title)
    ));

    layout(&list.title, flashes, &body)
}

/// The rename form. After a rejected rename the input shows what the user
/// typed rather than the current title.
pub fn edit_list_page(list: &TodoList, flashes: &[Flash], invalid_title: Option<&str>) -> String {
    let path = list_path(list.id);
    let value = invalid_title.unwrap_or(&list.title);
    let body = format!(
        "<h2>Editing '{title}'</h2>\n\
         <form method=\"post\" action=\"{path}/edit\">\n\
         <label for=\"new_title\">Enter the new name for the list:</label>\n\
         <input id=\"new_title\" name=\"new_title\" value=\"{value}\" maxlength=\"100\">\n\
         <button type=\"submit\">Save</button>\n\
         <a href=\"{path}\">Cancel</a>\n\
         </form>\n\
         <form method=\"post\" action=\"{path}/delete\">\n\
         <button type=\"submit\" class=\"delete\">Delete List</button>\n\
         </form>\n",
        title = escape(&list.title),
        path = path,
        value = escape(value),
    );
    layout("Edit List", flashes, &body)
}

pub fn error_page(heading: &str, message: &str) -> String {
    let body = format!(
        "<h2>{}</h2>\n<p>{}</p>\n<p><a href=\"/lists\">Back to your lists</a></p>\n",
        escape(heading),
        escape(message)
    );
    layout(heading, &[], &body)
}
