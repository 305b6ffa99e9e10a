//! SQLite-backed session store.
//!
//! Each row holds one browser session's [`SessionData`] as JSON. The store is
//! in-memory unless a file path is configured, in which case sessions survive
//! a restart until they are pruned for inactivity.

mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::models::SessionData;

pub struct SessionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SessionStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("session store lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Load a session's state, or `None` if the id has never been saved.
    pub fn load(&self, id: Uuid) -> Result<Option<SessionData>> {
        let conn = self.conn.lock().expect("session store lock poisoned");
        let data: Option<String> = conn
            .query_row(
                "SELECT data FROM sessions WHERE id = ?",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        data.map(|json| {
            serde_json::from_str(&json)
                .with_context(|| format!("Corrupt session payload for {}", id))
        })
        .transpose()
    }

    /// Insert or replace a session's state and bump its `updated_at`.
    pub fn save(&self, id: Uuid, data: &SessionData) -> Result<()> {
        let json = serde_json::to_string(data).context("Failed to serialize session")?;
        let now = timestamp(Utc::now());

        let conn = self.conn.lock().expect("session store lock poisoned");
        conn.execute(
            "INSERT INTO sessions (id, data, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
            (id.to_string(), &json, &now),
        )?;
        Ok(())
    }

    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let conn = self.conn.lock().expect("session store lock poisoned");
        let rows = conn.execute("DELETE FROM sessions WHERE id = ?", [id.to_string()])?;
        Ok(rows > 0)
    }

    /// When the session was last written, if it exists.
    pub fn last_updated(&self, id: Uuid) -> Result<Option<DateTime<Utc>>> {
        let conn = self.conn.lock().expect("session store lock poisoned");
        let updated: Option<String> = conn
            .query_row(
                "SELECT updated_at FROM sessions WHERE id = ?",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated.map(parse_datetime))
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock().expect("session store lock poisoned");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete sessions not written within `max_idle`. Returns how many went.
    ///
    /// `max_idle` must be positive. A cutoff before the representable range
    /// of timestamps prunes nothing.
    pub fn prune_idle(&self, max_idle: Duration) -> Result<usize> {
        if max_idle <= Duration::zero() {
            anyhow::bail!("Session idle limit must be positive, got {}", max_idle);
        }
        let Some(cutoff) = Utc::now().checked_sub_signed(max_idle) else {
            return Ok(0);
        };
        let cutoff = timestamp(cutoff);
        let conn = self.conn.lock().expect("session store lock poisoned");
        let rows = conn.execute("DELETE FROM sessions WHERE updated_at < ?", [cutoff])?;
        Ok(rows)
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Fixed-width UTC timestamps so `updated_at` compares correctly as text.
fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
