//! Runtime configuration loaded from environment variables.
//!
//! Environment variables:
//! - `TODOS_HOST`: Address to bind (default: 127.0.0.1)
//! - `TODOS_PORT`: Port to bind (default: 8080)
//! - `TODOS_ENV`: `development` or `production` (default: development)
//! - `TODOS_SESSION_DB`: SQLite file for sessions (default: in-memory)
//! - `TODOS_SESSION_TTL_SECS`: Idle time before a session is pruned (default: 86400,
//!   accepted range 1..=31536000)
//! - `TODOS_SECURE_COOKIE`: Mark the session cookie `Secure` (default: false)

use std::path::PathBuf;

use chrono::Duration;

pub const SESSION_COOKIE: &str = "todos_session";

/// Longest accepted session idle time: one year.
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Convert a TTL in seconds, rejecting zero and anything above
/// [`MAX_SESSION_TTL_SECS`].
pub fn session_ttl_from_secs(secs: u64) -> Option<Duration> {
    if !(1..=MAX_SESSION_TTL_SECS).contains(&secs) {
        return None;
    }
    Duration::try_seconds(i64::try_from(secs).ok()?)
}

fn parse_session_ttl(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().and_then(session_ttl_from_secs)
}

/// Deployment mode. Controls default log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Read `TODOS_ENV`, falling back to development.
    pub fn from_env() -> Self {
        std::env::var("TODOS_ENV")
            .ok()
            .and_then(|s| Self::from_str(&s))
            .unwrap_or(Self::Development)
    }

    /// Default `RUST_LOG` filter when none is set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Development => "todolists=debug,tower_http=debug",
            Self::Production => "todolists=info,tower_http=info",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// SQLite file backing the session store. `None` keeps sessions in memory.
    pub session_db: Option<PathBuf>,
    /// Sessions untouched for longer than this are pruned.
    pub session_ttl: Duration,
    /// Add the `Secure` attribute to the session cookie.
    pub secure_cookie: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("TODOS_HOST").unwrap_or(defaults.host);

        let port = std::env::var("TODOS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let environment = Environment::from_env();

        let session_db = std::env::var("TODOS_SESSION_DB")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let session_ttl = match std::env::var("TODOS_SESSION_TTL_SECS") {
            Ok(raw) => parse_session_ttl(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring TODOS_SESSION_TTL_SECS={:?}: expected 1..={}",
                    raw,
                    MAX_SESSION_TTL_SECS
                );
                defaults.session_ttl
            }),
            Err(_) => defaults.session_ttl,
        };

        let secure_cookie = std::env::var("TODOS_SECURE_COOKIE")
            .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            host,
            port,
            environment,
            session_db,
            session_ttl,
            secure_cookie,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The `Set-Cookie` value issuing `session_id` to a browser.
    pub fn session_cookie(&self, session_id: uuid::Uuid) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session_id
        );
        if self.secure_cookie {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: Environment::Development,
            session_db: None,
            session_ttl: Duration::hours(24),
            secure_cookie: false,
        }
    }
}
