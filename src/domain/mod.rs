//! Pure helpers over [`TodoList`](crate::models::TodoList) and
//! [`Todo`](crate::models::Todo) values.
//!
//! Nothing here touches the session store or HTTP. Handlers load the session,
//! call into this module, then write the session back.

mod lookup;
mod ordering;
mod validation;

pub use lookup::*;
pub use ordering::*;
pub use validation::*;
