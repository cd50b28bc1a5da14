//! Fetch a list with its ordered items
//!
//! Runs the metadata query and both item queries concurrently, refuses to
//! return anything for a list the owner cannot see, and orders each item
//! partition by the list's stored `todos_order`.

use crate::error::{DbError, DbResult};
use crate::models::{OwnerId, TodoListId, TodoListView};
use crate::query::ordering::{OrderingPolicy, sort_todos};
use crate::repository::TodoListStore;
use tracing::{debug, trace};

/// Query object that assembles a [`TodoListView`] from a [`TodoListStore`]
pub struct FetchTodoList<S> {
    store: S,
    policy: OrderingPolicy,
}

impl<S: TodoListStore> FetchTodoList<S> {
    /// Create a fetcher over `store` using the default ordering policy
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: OrderingPolicy::default(),
        }
    }

    /// Use `policy` for items missing from the stored order
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The ordering policy in effect
    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Fetch the list `list_id` owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if no such list exists for this owner.
    /// Store failures are returned unchanged.
    pub async fn run(&self, list_id: &TodoListId, owner_id: &OwnerId) -> DbResult<TodoListView> {
        debug!("Fetching todo list {} for owner {}", list_id, owner_id);

        let (list, doing, completed) = tokio::try_join!(
            self.store.query_list_metadata(list_id, owner_id),
            self.store.query_items(list_id, owner_id, false),
            self.store.query_items(list_id, owner_id, true),
        )?;

        let Some(list) = list else {
            debug!("Todo list not found: {}", list_id);
            return Err(DbError::NotFound {
                list_id: list_id.to_string(),
            });
        };

        trace!(
            "List {} has {} doing and {} completed items, order hint of {}",
            list_id,
            doing.len(),
            completed.len(),
            list.todos_order.len()
        );

        Ok(TodoListView {
            doing_todos: sort_todos(doing, &list.todos_order, self.policy),
            completed_todos: sort_todos(completed, &list.todos_order, self.policy),
            id: list.id,
            title: list.title,
            created_at: list.created_at,
        })
    }
}
