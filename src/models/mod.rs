//! Domain models for todolists.
//!
//! # Core Concepts
//!
//! - [`TodoList`]: A titled, ordered collection of todos. List titles are unique
//!   across a session.
//! - [`Todo`]: A titled item with a completion flag, owned by exactly one list.
//! - [`SessionData`]: Everything a browser session holds: its lists plus any
//!   pending flash messages.
//!
//! Lists and todos are stored in insertion order. Display order is derived
//! with [`crate::domain::sort_items`].

mod list;
mod session;
mod todo;

pub use list::*;
pub use session::*;
pub use todo::*;

/// Anything with a display title, used for ordering.
pub trait Titled {
    fn title(&self) -> &str;
}
