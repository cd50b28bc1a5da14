//! Database module for owner-scoped to-do lists
//!
//! Provides SurrealDB connection management with an embedded SurrealKV
//! backend, schema initialization, data models, and the list fetch query.

pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use models::{OwnerId, TodoId, TodoListId, TodoListRow, TodoListSummary, TodoListView, TodoRow};
pub use query::{FetchTodoList, OrderingPolicy, sort_todos};
pub use repository::{TodoListRepository, TodoListStore, TodoListWriter};

use std::path::{Path, PathBuf};
use std::process::Command;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, SurrealKv};

/// Default database path relative to project root or current working directory
pub const DEFAULT_DB_PATH: &str = ".todo/data";

const NAMESPACE: &str = "todolist";
const DATABASE: &str = "main";

/// Database wrapper providing connection management for SurrealDB
pub struct Database {
    /// The underlying SurrealDB client
    client: Surreal<Db>,
    /// Path where the database is stored, `None` for in-memory databases
    path: Option<PathBuf>,
}

impl Database {
    /// Connect to a SurrealDB database at the specified path.
    ///
    /// Creates the database directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `DbError::CreateDirectory` if directory creation fails.
    /// Returns `DbError::Connection` if database connection fails.
    pub async fn connect(path: &Path) -> DbResult<Self> {
        let path = Self::prepare_path(path)?;

        let client =
            Surreal::new::<SurrealKv>(path.clone())
                .await
                .map_err(|e| DbError::Connection {
                    path: path.clone(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            client,
            path: Some(path),
        })
    }

    /// Open a throwaway in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Connection` if the engine cannot be started.
    pub async fn connect_in_memory() -> DbResult<Self> {
        let client = Surreal::new::<Mem>(())
            .await
            .map_err(|e| DbError::Connection {
                path: PathBuf::from("memory"),
                source: Box::new(e),
            })?;

        Ok(Self { client, path: None })
    }

    /// Initialize the database schema.
    ///
    /// Selects the namespace and database, then defines the list and todo tables.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Schema` if schema initialization fails.
    pub async fn init(&self) -> DbResult<()> {
        self.client
            .use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| DbError::Schema(Box::new(e)))?;

        schema::init_schema(&self.client).await?;

        Ok(())
    }

    /// Get a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<Db> {
        &self.client
    }

    /// Get the path where the database is stored.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read access to lists and items
    pub fn lists(&self) -> TodoListRepository<'_> {
        TodoListRepository::new(&self.client)
    }

    /// Write access to lists and items
    pub fn writer(&self) -> TodoListWriter<'_> {
        TodoListWriter::new(&self.client)
    }

    /// The list fetch query bound to this database
    pub fn fetch_todo_list(&self, policy: OrderingPolicy) -> FetchTodoList<TodoListRepository<'_>> {
        FetchTodoList::new(self.lists()).with_policy(policy)
    }

    /// Get the default database path based on project root.
    ///
    /// Uses `git rev-parse --show-toplevel` to find the project root and
    /// returns `<project_root>/.todo/data`. If not in a git repository,
    /// falls back to `.todo/data` relative to the current working directory.
    pub fn default_path() -> PathBuf {
        let base_path = find_project_root().unwrap_or_else(|| PathBuf::from("."));
        base_path.join(DEFAULT_DB_PATH)
    }

    /// Prepare the database path by validating and creating directories.
    fn prepare_path(path: &Path) -> DbResult<PathBuf> {
        let path = path.to_path_buf();

        if path.exists() && !path.is_dir() {
            return Err(DbError::InvalidPath {
                path,
                reason: "not a directory".to_string(),
            });
        }

        if !path.exists() {
            std::fs::create_dir_all(&path).map_err(|e| DbError::CreateDirectory {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(path)
    }
}

// Ensure Database is Send + Sync for async compatibility
static_assertions::assert_impl_all!(Database: Send, Sync);

/// Find the project root by running `git rev-parse --show-toplevel`.
///
/// Returns `None` if not in a git repository or the command fails.
pub fn find_project_root() -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if output.status.success() {
        let path_str = String::from_utf8(output.stdout).ok()?;
        Some(PathBuf::from(path_str.trim()))
    } else {
        None
    }
}

/// Test utilities for creating isolated test databases
#[cfg(test)]
pub mod test_utils {
    use super::*;

    /// Create an isolated in-memory SurrealDB database with the schema applied.
    ///
    /// Each call returns an independent database, so tests can run
    /// concurrently without interference.
    pub async fn create_test_db() -> DbResult<Surreal<Db>> {
        let client = Surreal::new::<Mem>(())
            .await
            .map_err(|e| DbError::Connection {
                path: PathBuf::from("memory"),
                source: Box::new(e),
            })?;

        client
            .use_ns(NAMESPACE)
            .use_db("test")
            .await
            .map_err(|e| DbError::Schema(Box::new(e)))?;

        schema::init_schema(&client).await?;

        Ok(client)
    }

    /// Insert a list row directly, bypassing the writer.
    pub async fn create_list_in_db(
        db: &Surreal<Db>,
        id: &str,
        title: &str,
        owner_id: &str,
        todos_order: &[&str],
    ) -> DbResult<()> {
        let order: Vec<String> = todos_order.iter().map(|s| s.to_string()).collect();
        db.query(
            r#"CREATE type::thing("todo_list", $id) SET
                title = $title,
                owner_id = $owner_id,
                todos_order = $todos_order"#,
        )
        .bind(("id", id.to_string()))
        .bind(("title", title.to_string()))
        .bind(("owner_id", owner_id.to_string()))
        .bind(("todos_order", order))
        .await?
        .check()?;
        Ok(())
    }

    /// Insert a todo row directly. Does not touch the list's order.
    pub async fn create_todo_in_db(
        db: &Surreal<Db>,
        id: &str,
        title: &str,
        is_complete: bool,
        list_id: &str,
        owner_id: &str,
    ) -> DbResult<()> {
        db.query(
            r#"CREATE type::thing("todo", $id) SET
                title = $title,
                is_complete = $is_complete,
                todo_list_id = $list_id,
                owner_id = $owner_id"#,
        )
        .bind(("id", id.to_string()))
        .bind(("title", title.to_string()))
        .bind(("is_complete", is_complete))
        .bind(("list_id", list_id.to_string()))
        .bind(("owner_id", owner_id.to_string()))
        .await?
        .check()?;
        Ok(())
    }
}
