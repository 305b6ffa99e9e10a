use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use uuid::Uuid;

use super::error::ApiError;
use super::session::Session;
use super::views::{self, list_path};
use crate::domain::*;
use crate::models::*;

type HandlerResult<T> = Result<T, ApiError>;

/// Parse an id from the URL. Malformed ids become the nil UUID, which no
/// list or todo ever has, so they fall through to the usual not-found path.
fn parse_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or_else(|_| Uuid::nil())
}

fn render_list(session: &mut Session, list_id: Uuid, todo_title: &str) -> HandlerResult<Html<String>> {
    // Check before draining so a 404 leaves pending flashes for the next page.
    require_list(list_id, &session.data.lists)?;
    let flashes = session.drain_flashes()?;
    let list = require_list(list_id, &session.data.lists)?;
    let todos = sort_items(&list.todos, is_todo_completed);
    Ok(Html(views::list_page(list, &todos, &flashes, todo_title)))
}

fn render_edit_list(
    session: &mut Session,
    list_id: Uuid,
    invalid_title: Option<&str>,
) -> HandlerResult<Html<String>> {
    // Same ordering as render_list: 404 before consuming flashes.
    require_list(list_id, &session.data.lists)?;
    let flashes = session.drain_flashes()?;
    let list = require_list(list_id, &session.data.lists)?;
    Ok(Html(views::edit_list_page(list, &flashes, invalid_title)))
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page("Not Found", "That page does not exist.")),
    )
}

// ============================================================
// Lists
// ============================================================

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

pub async fn get_lists(mut session: Session) -> HandlerResult<Html<String>> {
    let flashes = session.drain_flashes()?;
    let lists = sort_items(&session.data.lists, is_list_completed);
    Ok(Html(views::lists_page(&lists, &flashes)))
}

pub async fn new_list(mut session: Session) -> HandlerResult<Html<String>> {
    let flashes = session.drain_flashes()?;
    Ok(Html(views::new_list_page(&flashes, "")))
}

pub async fn create_list(
    mut session: Session,
    Form(input): Form<CreateListInput>,
) -> HandlerResult<Response> {
    let title = input.list_title.trim();

    if let Err(e) = validate_list_title(title, &session.data.lists) {
        tracing::debug!("Rejected list title {:?}: {}", title, e);
        session.data.flash(FlashKind::Error, e.to_string());
        let flashes = session.drain_flashes()?;
        return Ok(Html(views::new_list_page(&flashes, title)).into_response());
    }

    let list = TodoList::new(title);
    tracing::info!("Created list {} in session {}", list.id, session.id());
    session.data.lists.push(list);
    session.data.flash(FlashKind::Success, "The list has been created.");
    session.commit()?;

    Ok(Redirect::to("/lists").into_response())
}

pub async fn show_list(
    mut session: Session,
    Path(list_id): Path<String>,
) -> HandlerResult<Html<String>> {
    render_list(&mut session, parse_id(&list_id), "")
}

pub async fn edit_list(
    mut session: Session,
    Path(list_id): Path<String>,
) -> HandlerResult<Html<String>> {
    render_edit_list(&mut session, parse_id(&list_id), None)
}

pub async fn update_list(
    mut session: Session,
    Path(list_id): Path<String>,
    Form(input): Form<RenameListInput>,
) -> HandlerResult<Response> {
    let list_id = parse_id(&list_id);
    require_list(list_id, &session.data.lists)?;
    let title = input.new_title.trim();

    if let Err(e) = validate_list_title(title, &session.data.lists) {
        tracing::debug!("Rejected rename of list {} to {:?}: {}", list_id, title, e);
        session.data.flash(FlashKind::Error, e.to_string());
        return render_edit_list(&mut session, list_id, Some(title)).map(IntoResponse::into_response);
    }

    require_list_mut(list_id, &mut session.data.lists)?.rename(title);
    session.data.flash(
        FlashKind::Info,
        format!("Title successfully changed to '{}'", title),
    );
    session.commit()?;
    tracing::info!("Renamed list {}", list_id);

    Ok(Redirect::to(&list_path(list_id)).into_response())
}

pub async fn delete_list(
    mut session: Session,
    Path(list_id): Path<String>,
) -> HandlerResult<Redirect> {
    let list_id = parse_id(&list_id);
    let title = require_list(list_id, &session.data.lists)?.title.clone();

    let lists = std::mem::take(&mut session.data.lists);
    session.data.lists = delete_list_by_id(list_id, lists);
    session.data.flash(FlashKind::Info, format!("'{}' was successfully deleted", title));
    session.commit()?;
    tracing::info!("Deleted list {}", list_id);

    Ok(Redirect::to("/lists"))
}

pub async fn complete_all_todos(
    mut session: Session,
    Path(list_id): Path<String>,
) -> HandlerResult<Redirect> {
    let list_id = parse_id(&list_id);
    complete_all(require_list_mut(list_id, &mut session.data.lists)?);
    session.data.flash(FlashKind::Success, "All todos have been completed.");
    session.commit()?;

    Ok(Redirect::to(&list_path(list_id)))
}

// ============================================================
// Todos
// ============================================================

pub async fn add_todo(
    mut session: Session,
    Path(list_id): Path<String>,
    Form(input): Form<CreateTodoInput>,
) -> HandlerResult<Response> {
    let list_id = parse_id(&list_id);
    require_list(list_id, &session.data.lists)?;
    let title = input.todo.trim();

    if let Err(e) = validate_todo_title(title) {
        tracing::debug!("Rejected todo title {:?}: {}", title, e);
        session.data.flash(FlashKind::Error, e.to_string());
        return render_list(&mut session, list_id, title).map(IntoResponse::into_response);
    }

    let todo_id = require_list_mut(list_id, &mut session.data.lists)?.push_todo(title);
    session.data.flash(FlashKind::Success, "The todo was added.");
    session.commit()?;
    tracing::debug!("Added todo {} to list {}", todo_id, list_id);

    Ok(Redirect::to(&list_path(list_id)).into_response())
}

pub async fn toggle_todo(
    mut session: Session,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> HandlerResult<Redirect> {
    let list_id = parse_id(&list_id);
    require_todo_mut(list_id, parse_id(&todo_id), &mut session.data.lists)?.toggle();
    session.data.flash(FlashKind::Success, "The todo has been updated.");
    session.commit()?;

    Ok(Redirect::to(&list_path(list_id)))
}

pub async fn delete_todo(
    mut session: Session,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> HandlerResult<Redirect> {
    let list_id = parse_id(&list_id);
    let todo_id = parse_id(&todo_id);
    require_todo_mut(list_id, todo_id, &mut session.data.lists)?;
    delete_todo_by_id(todo_id, require_list_mut(list_id, &mut session.data.lists)?);
    session.data.flash(FlashKind::Success, "The todo has been deleted.");
    session.commit()?;

    Ok(Redirect::to(&list_path(list_id)))
}
