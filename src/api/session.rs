use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::{error::ApiError, AppState};
use crate::db::SessionStore;
use crate::models::{Flash, SessionData};

/// Request extension set by the session middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// One request's working copy of the browser session.
///
/// Extracting a `Session` loads its data from the store. Nothing is written
/// back until the handler calls [`Session::commit`].
pub struct Session {
    id: Uuid,
    store: SessionStore,
    pub data: SessionData,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn commit(&self) -> anyhow::Result<()> {
        self.store.save(self.id, &self.data)
    }

    /// Take the pending flash messages for rendering, persisting their removal.
    pub fn drain_flashes(&mut self) -> anyhow::Result<Vec<Flash>> {
        let flashes = self.data.take_flashes();
        if !flashes.is_empty() {
            self.commit()?;
        }
        Ok(flashes)
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let SessionId(id) = parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("session middleware is not installed"))?;

        let data = state.store.load(id)?.unwrap_or_default();

        Ok(Self {
            id,
            store: state.store.clone(),
            data,
        })
    }
}
