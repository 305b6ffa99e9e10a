mod error;
mod handlers;
mod middleware;
mod session;
pub mod views;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::db::SessionStore;

pub use error::ApiError;
pub use session::{Session, SessionId};

/// Shared state handed to every handler and to the session middleware.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub config: Arc<AppConfig>,
}

pub fn create_router(store: SessionStore, config: AppConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::index))
        // Lists
        .route("/lists", get(handlers::get_lists))
        .route("/lists", post(handlers::create_list))
        .route("/lists/new", get(handlers::new_list))
        .route("/lists/{list_id}", get(handlers::show_list))
        .route("/lists/{list_id}/edit", get(handlers::edit_list))
        .route("/lists/{list_id}/edit", post(handlers::update_list))
        .route("/lists/{list_id}/delete", post(handlers::delete_list))
        .route("/lists/{list_id}/complete_all", post(handlers::complete_all_todos))
        // Todos
        .route("/lists/{list_id}/todos", post(handlers::add_todo))
        .route(
            "/lists/{list_id}/todos/{todo_id}/toggle",
            post(handlers::toggle_todo),
        )
        .route(
            "/lists/{list_id}/todos/{todo_id}/delete",
            post(handlers::delete_todo),
        )
        // Health
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::session_middleware,
                )),
        )
        .with_state(state)
}
