//! Read access to lists and their items
//!
//! `TodoListStore` is the narrow interface the fetch query depends on.
//! `TodoListRepository` implements it against SurrealDB with bound
//! parameters and the owner predicate applied on every statement.

use crate::error::DbResult;
use crate::models::{OwnerId, TodoId, TodoListId, TodoListRow, TodoRow};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tracing::{debug, trace};

/// Read operations needed to assemble a list view.
///
/// Implementations must scope both operations by `owner_id`.
#[allow(async_fn_in_trait)]
pub trait TodoListStore {
    /// Fetch the metadata row for a list owned by `owner_id`, if any.
    async fn query_list_metadata(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
    ) -> DbResult<Option<TodoListRow>>;

    /// Fetch the items of a list owned by `owner_id` with the given completion state.
    async fn query_items(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        is_complete: bool,
    ) -> DbResult<Vec<TodoRow>>;
}

impl<T: TodoListStore + ?Sized> TodoListStore for &T {
    async fn query_list_metadata(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
    ) -> DbResult<Option<TodoListRow>> {
        (**self).query_list_metadata(list_id, owner_id).await
    }

    async fn query_items(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        is_complete: bool,
    ) -> DbResult<Vec<TodoRow>> {
        (**self).query_items(list_id, owner_id, is_complete).await
    }
}

mod sql {
    pub const SELECT_LIST_METADATA: &str = r#"
        SELECT record::id(id) AS id, title, created_at, todos_order
        FROM type::thing("todo_list", $list_id)
        WHERE owner_id = $owner_id
    "#;

    pub const SELECT_ITEMS: &str = r#"
        SELECT record::id(id) AS id, title, is_complete, created_at
        FROM todo
        WHERE is_complete = $is_complete
            AND todo_list_id = $list_id
            AND owner_id = $owner_id
    "#;
}

/// Internal row type for deserializing list metadata from SurrealDB
#[derive(Debug, Deserialize)]
struct ListRow {
    id: String,
    title: String,
    created_at: surrealdb::sql::Datetime,
    #[serde(default)]
    todos_order: Vec<String>,
}

impl ListRow {
    fn into_row(self) -> TodoListRow {
        TodoListRow {
            id: TodoListId::new(self.id),
            title: self.title,
            created_at: self.created_at.0,
            todos_order: self.todos_order,
        }
    }
}

/// Internal row type for deserializing todo items from SurrealDB
#[derive(Debug, Deserialize)]
struct ItemRow {
    id: String,
    title: String,
    is_complete: bool,
    created_at: surrealdb::sql::Datetime,
}

impl ItemRow {
    fn into_row(self) -> TodoRow {
        TodoRow {
            id: TodoId::new(self.id),
            title: self.title,
            is_complete: self.is_complete,
            created_at: self.created_at.0,
        }
    }
}

/// SurrealDB-backed implementation of [`TodoListStore`]
#[derive(Clone, Copy)]
pub struct TodoListRepository<'a> {
    client: &'a Surreal<Db>,
}

impl<'a> TodoListRepository<'a> {
    /// Create a new TodoListRepository with the given database client
    pub fn new(client: &'a Surreal<Db>) -> Self {
        Self { client }
    }
}

impl TodoListStore for TodoListRepository<'_> {
    async fn query_list_metadata(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
    ) -> DbResult<Option<TodoListRow>> {
        debug!("Fetching list metadata: {} for owner {}", list_id, owner_id);
        let mut result = self
            .client
            .query(sql::SELECT_LIST_METADATA)
            .bind(("list_id", list_id.as_str().to_owned()))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?;
        let row: Option<ListRow> = result.take(0)?;
        trace!("List metadata found: {}", row.is_some());
        Ok(row.map(ListRow::into_row))
    }

    async fn query_items(
        &self,
        list_id: &TodoListId,
        owner_id: &OwnerId,
        is_complete: bool,
    ) -> DbResult<Vec<TodoRow>> {
        debug!(
            "Fetching items of list {} (is_complete = {}) for owner {}",
            list_id, is_complete, owner_id
        );
        let mut result = self
            .client
            .query(sql::SELECT_ITEMS)
            .bind(("is_complete", is_complete))
            .bind(("list_id", list_id.as_str().to_owned()))
            .bind(("owner_id", owner_id.as_str().to_owned()))
            .await?;
        let rows: Vec<ItemRow> = result.take(0)?;
        trace!("Fetched {} items", rows.len());
        Ok(rows.into_iter().map(ItemRow::into_row).collect())
    }
}
