//! Data models for to-do lists
//!
//! Row types returned by the store, the assembled list view handed to
//! callers, and string newtypes that keep list, todo and owner ids apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw id string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a to-do list
    TodoListId
);
string_id!(
    /// Identifier of a single todo item
    TodoId
);
string_id!(
    /// The principal a list and its items belong to
    OwnerId
);

/// List metadata as stored, including the display ordering hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListRow {
    pub id: TodoListId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Item ids in display order. May be partial or hold stale ids.
    pub todos_order: Vec<String>,
}

/// A todo item as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Consolidated view of one list: metadata plus ordered items split by completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListView {
    pub id: TodoListId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub doing_todos: Vec<TodoRow>,
    pub completed_todos: Vec<TodoRow>,
}

impl TodoListView {
    /// Total number of items across both partitions
    pub fn len(&self) -> usize {
        self.doing_todos.len() + self.completed_todos.len()
    }

    /// True when the list holds no items at all
    pub fn is_empty(&self) -> bool {
        self.doing_todos.is_empty() && self.completed_todos.is_empty()
    }
}

/// Short description of a list for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListSummary {
    pub id: TodoListId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}
