//! Session cookie middleware.
//!
//! Every request leaves this layer with a [`SessionId`] in its extensions.
//! Browsers that arrive without a usable cookie get a fresh id, issued via
//! `Set-Cookie` on the way out.

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Request,
    },
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::session::SessionId;
use super::AppState;
use crate::config::SESSION_COOKIE;

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let (id, issued) = match session_id_from_headers(request.headers()) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    };
    request.extensions_mut().insert(SessionId(id));

    let mut response = next.run(request).await;

    if issued {
        match HeaderValue::from_str(&state.config.session_cookie(id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
                tracing::debug!("Issued new session {}", id);
            }
            Err(e) => tracing::error!("Could not encode session cookie: {}", e),
        }
    }

    response
}

/// Find the session id in the request's `Cookie` headers.
///
/// Missing cookies and values that are not UUIDs are both treated as "no
/// session".
fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn reads_session_cookie_among_others() {
        let id = Uuid::new_v4();
        let headers = headers(&format!("theme=dark; todos_session={}; lang=en", id));
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);
        assert_eq!(session_id_from_headers(&headers("theme=dark")), None);
    }

    #[test]
    fn malformed_session_id_yields_none() {
        assert_eq!(session_id_from_headers(&headers("todos_session=garbage")), None);
    }
}
