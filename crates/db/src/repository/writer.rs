//! Write operations for lists and todos
//!
//! Creates lists and items, toggles completion and maintains each list's
//! `todos_order` array. Every statement carries the owner predicate.

use crate::error::{DbError, DbResult};
use crate::models::{OwnerId, TodoId, TodoListId, TodoListRow, TodoListSummary};
use crate::repository::store::{TodoListRepository, TodoListStore};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::debug;

/// Attempts at swapping a list's order before giving up
const MAX_ORDER_ATTEMPTS: usize = 5;

mod sql {
    pub const CREATE_LIST: &str = r#"
        CREATE type::thing("todo_list", $list_id) SET
            title = $title,
            owner_id = $owner_id,
            todos_order = []
        RETURN NONE
    "#;

    pub const CREATE_TODO: &str = r#"
        BEGIN TRANSACTION;
        CREATE type::thing("todo", $todo_id) SET
            title = $title,
            is_complete = false,
            todo_list_id = $list_id,
            owner_id = $owner_id
        RETURN NONE;
        UPDATE type::thing("todo_list", $list_id)
            SET todos_order = array::append(todos_order, $todo_id)
            WHERE owner_id = $owner_id
        RETURN NONE;
        COMMIT TRANSACTION;
    "#;

    pub const SELECT_TODO_SCOPE: &str = r#"
        SELECT record::id(id) AS id, todo_list_id
        FROM type::thing("todo", $todo_id)
        WHERE owner_id = $owner_id
    "#;

    pub const SET_COMPLETION: &str = r#"
        UPDATE type::thing("todo", $todo_id)
            SET is_complete = $is_complete
            WHERE owner_id = $owner_id
        RETURN NONE
    "#;

    /// Writes only if the order is still the one the caller read.
    pub const SWAP_ORDER: &str = r#"
        UPDATE type::thing("todo_list", $list_id)
            SET todos_order = $todos_order
            WHERE owner_id = $owner_id AND todos_order = $expected
        RETURN VALUE todos_order
    "#;

    pub const SELECT_LISTS_FOR_OWNER: &str = r#"
        SELECT record::id(id) AS id, title, created_at
        FROM todo_list
        WHERE owner_id = $owner_id
        ORDER BY created_at DESC
    "#;

    pub const RECORD_EXISTS: &str = r#"
        SELECT record::id(id) AS id FROM type::thing($table, $id)
    "#;
}

/// Minimal row for checking record existence
#[derive(Debug, Deserialize)]
struct IdOnly {
    #[allow(dead_code)]
    id: String,
}

/// Row describing which list a todo belongs to
#[derive(Debug, Deserialize)]
struct TodoScopeRow {
    #[allow(dead_code)]
    id: String,
    todo_list_id: String,
}

/// Row for list summaries
#[derive(Debug, Deserialize)]
struct SummaryRow {
    id: String,
    title: String,
    created_at: surrealdb::sql::Datetime,
}

/// Repository for list and todo mutations
pub struct TodoListWriter<'a> {
    client: &'a Surreal<Db>,
}

impl<'a> TodoListWriter<'a> {
    /// Create a new TodoListWriter with the given database client
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self { client }
    }

    /// Check whether a list record with this id exists, regardless of owner.
    ///
    /// Used for id collision checks.
    pub async fn list_exists(&self, list_id: &TodoListId) -> DbResult<bool> {
        self.record_exists("todo_list", list_id.as_str()).await
    }

    /// Check whether a todo record with this id exists, regardless of owner.
    pub async fn todo_exists(&self, todo_id: &TodoId) -> DbResult<bool> {
        self.record_exists("todo", todo_id.as_str()).await
    }

    async fn record_exists(&self, table: &'static str, id: &str) -> DbResult<bool> {
        let mut result = self
            .client
            .query(sql::RECORD_EXISTS)
            .bind(("table", table))
            .bind(("id", id.to_owned()))
            .await?;
        let rows: Vec<IdOnly> = result.take(0)?;
        Ok(!rows.is_empty())
    }

    /// Create an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DbError::ValidationError` if the title is blank.
    /// Returns `DbError::Query` if the record cannot be created (including id clashes).
    pub async fn create_list(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        title: &str,
    ) -> DbResult<()> {
        let title = validate_title(title)?;
        debug!("Creating list: {} for owner {}", list_id, owner_id);

        self.client
            .query(sql::CREATE_LIST)
            .bind(("list_id", list_id.as_str().to_owned()))
            .bind(("title", title))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?
            .check()?;
        Ok(())
    }

    /// Add an incomplete todo to a list and append it to the list's order.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the list does not exist for this owner.
    /// Returns `DbError::ValidationError` if the title is blank.
    pub async fn add_todo(
        &self,
        todo_id: &TodoId,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        title: &str,
    ) -> DbResult<()> {
        let title = validate_title(title)?;
        self.require_list(list_id, owner_id).await?;
        debug!("Adding todo {} to list {}", todo_id, list_id);

        self.client
            .query(sql::CREATE_TODO)
            .bind(("todo_id", todo_id.as_str().to_owned()))
            .bind(("title", title))
            .bind(("list_id", list_id.as_str().to_owned()))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?
            .check()?;
        Ok(())
    }

    /// Mark a todo complete or incomplete.
    ///
    /// # Errors
    ///
    /// Returns `DbError::TodoNotFound` if no todo with this id belongs to the owner.
    pub async fn set_completion(
        &self,
        todo_id: &TodoId,
        owner_id: &OwnerId,
        is_complete: bool,
    ) -> DbResult<()> {
        self.todo_scope(todo_id, owner_id).await?;
        debug!("Setting todo {} is_complete = {}", todo_id, is_complete);

        self.client
            .query(sql::SET_COMPLETION)
            .bind(("todo_id", todo_id.as_str().to_owned()))
            .bind(("is_complete", is_complete))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?
            .check()?;
        Ok(())
    }

    /// Move a todo to `index` within the list's display order.
    ///
    /// Indexes past the end place the todo last. A todo missing from the
    /// stored order is inserted. The new order is written only if the stored
    /// order has not changed since it was read, so concurrent appends are
    /// never overwritten; on a mismatch the order is re-read and the move
    /// retried.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the list does not exist for this owner.
    /// Returns `DbError::TodoNotFound` if the todo is not in that list for this owner.
    /// Returns `DbError::Conflict` if the order kept changing underneath the move.
    pub async fn move_todo(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        todo_id: &TodoId,
        index: usize,
    ) -> DbResult<Vec<String>> {
        let mut list = self.require_list(list_id, owner_id).await?;
        let todo_list_id = self.todo_scope(todo_id, owner_id).await?;
        if todo_list_id != list_id.as_str() {
            return Err(DbError::TodoNotFound {
                todo_id: todo_id.to_string(),
            });
        }

        for _ in 0..MAX_ORDER_ATTEMPTS {
            let expected = list.todos_order;
            let order = reposition(expected.clone(), todo_id.as_str(), index);
            debug!("Moving todo {} in list {} to {}", todo_id, list_id, index);

            let mut result = self
                .client
                .query(sql::SWAP_ORDER)
                .bind(("list_id", list_id.as_str().to_owned()))
                .bind(("todos_order", order.clone()))
                .bind(("expected", expected))
                .bind(("owner_id", owner_id.as_str().to_owned()))
                .await?;
            let swapped: Vec<Vec<String>> = result.take(0)?;
            if !swapped.is_empty() {
                return Ok(order);
            }

            debug!("Order of list {} changed during move, retrying", list_id);
            list = self.require_list(list_id, owner_id).await?;
        }

        Err(DbError::Conflict {
            list_id: list_id.to_string(),
        })
    }

    /// Summaries of every list owned by `owner_id`, newest first.
    pub async fn lists_for_owner(&self, owner_id: &OwnerId) -> DbResult<Vec<TodoListSummary>> {
        let mut result = self
            .client
            .query(sql::SELECT_LISTS_FOR_OWNER)
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?;
        let rows: Vec<SummaryRow> = result.take(0)?;
        Ok(rows
            .into_iter()
            .map(|r| TodoListSummary {
                id: TodoListId::new(r.id),
                title: r.title,
                created_at: r.created_at.0,
            })
            .collect())
    }

    async fn require_list(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
    ) -> DbResult<TodoListRow> {
        TodoListRepository::new(self.client)
            .query_list_metadata(list_id, owner_id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                list_id: list_id.to_string(),
            })
    }

    /// Returns the id of the list the todo belongs to.
    async fn todo_scope(&self, todo_id: &TodoId, owner_id: &OwnerId) -> DbResult<String> {
        let mut result = self
            .client
            .query(sql::SELECT_TODO_SCOPE)
            .bind(("todo_id", todo_id.as_str().to_owned()))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?;
        let row: Option<TodoScopeRow> = result.take(0)?;
        row.map(|r| r.todo_list_id)
            .ok_or_else(|| DbError::TodoNotFound {
                todo_id: todo_id.to_string(),
            })
    }
}

fn validate_title(title: &str) -> DbResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DbError::ValidationError {
            message: "title required".to_string(),
        });
    }
    Ok(title.to_string())
}

/// Place `id` at `index` in `order`, dropping any earlier occurrences.
fn reposition(mut order: Vec<String>, id: &str, index: usize) -> Vec<String> {
    order.retain(|existing| existing != id);
    let index = index.min(order.len());
    order.insert(index, id.to_string());
    order
}
