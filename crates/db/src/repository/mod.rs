//! Repository modules for database operations
//!
//! Provides the read interface used by the fetch query and the
//! SurrealDB repositories behind it.

mod store;
mod writer;

pub use store::{TodoListRepository, TodoListStore};
pub use writer::TodoListWriter;
