//! Test infrastructure for integration tests
//!
//! Provides isolated database setup/teardown and command helpers.
//! Each test gets its own database directory to ensure no shared state.

use std::path::PathBuf;
use todolist_cli::commands::{AddCommand, CompletionCommand, MoveCommand, NewCommand, ShowCommand};
use todolist_cli::config::Session;
use todolist_db::{Database, DbError, TodoListView};

/// Test context containing an isolated database and temp directory
pub struct TestContext {
    pub db: Database,
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated on-disk database.
    ///
    /// Each call creates a uniquely named temp directory using process ID,
    /// thread ID, and nanosecond timestamp to guarantee isolation.
    pub async fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "todo-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));

        let db = Database::connect(&temp_dir).await.unwrap();
        db.init().await.unwrap();

        Self { db, temp_dir }
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

// =============================================================================
// Command Helpers
// =============================================================================

/// Session for `owner` with the default ordering policy
pub fn session(owner: &str) -> Session {
    Session::new(owner)
}

/// Create a list and return its id
pub async fn new_list(db: &Database, session: &Session, title: &str) -> String {
    NewCommand {
        title: title.to_string(),
    }
    .execute(db, session)
    .await
    .unwrap()
}

/// Add a todo and return its id
pub async fn add_todo(db: &Database, session: &Session, list_id: &str, title: &str) -> String {
    AddCommand {
        list_id: list_id.to_string(),
        title: title.to_string(),
    }
    .execute(db, session)
    .await
    .unwrap()
}

/// Mark a todo complete
pub async fn complete(db: &Database, session: &Session, todo_id: &str) {
    CompletionCommand {
        id: todo_id.to_string(),
    }
    .execute(db, session, true)
    .await
    .unwrap();
}

/// Move a todo within a list
pub async fn move_todo(db: &Database, session: &Session, list_id: &str, todo_id: &str, index: usize) {
    MoveCommand {
        list_id: list_id.to_string(),
        todo_id: todo_id.to_string(),
        index,
    }
    .execute(db, session)
    .await
    .unwrap();
}

/// Fetch a list view through the show command
pub async fn show(db: &Database, session: &Session, list_id: &str) -> Result<TodoListView, DbError> {
    ShowCommand {
        list_id: list_id.to_string(),
        json: false,
    }
    .fetch(db, session)
    .await
}

/// Ids of a partition, in order
pub fn ids(todos: &[todolist_db::TodoRow]) -> Vec<String> {
    todos.iter().map(|t| t.id.to_string()).collect()
}

/// Overwrite a list's stored order directly, e.g. to simulate stale ids
pub async fn set_raw_order(db: &Database, list_id: &str, order: &[&str]) {
    let order: Vec<String> = order.iter().map(|s| s.to_string()).collect();
    db.client()
        .query(r#"UPDATE type::thing("todo_list", $id) SET todos_order = $order"#)
        .bind(("id", list_id.to_string()))
        .bind(("order", order))
        .await
        .unwrap()
        .check()
        .unwrap();
}
