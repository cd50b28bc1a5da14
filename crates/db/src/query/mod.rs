//! Read-side queries built on top of the repositories

mod fetch;
mod ordering;

pub use fetch::FetchTodoList;
pub use ordering::{OrderingPolicy, sort_todos};
