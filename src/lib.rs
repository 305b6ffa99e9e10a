//! Session-backed todo lists.
//!
//! [`domain`] holds the pure list/todo helpers. [`api`] is the HTTP boundary
//! that loads a session from [`db::SessionStore`], calls into the domain, and
//! writes the session back.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod models;
