//! Database schema initialization
//!
//! Defines the SurrealDB tables for lists and their todo items. Ownership
//! and list membership are plain string fields so every read can be scoped
//! with a simple predicate.

use crate::error::DbError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// SQL statements for schema initialization
mod sql {
    /// Define the todo_list table
    pub const DEFINE_TODO_LIST_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS todo_list SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS title ON todo_list TYPE string;

        DEFINE FIELD IF NOT EXISTS owner_id ON todo_list TYPE string;

        DEFINE FIELD IF NOT EXISTS created_at ON todo_list TYPE datetime DEFAULT time::now();

        DEFINE FIELD IF NOT EXISTS todos_order ON todo_list TYPE array<string> DEFAULT [];

        DEFINE INDEX IF NOT EXISTS todo_list_owner ON todo_list FIELDS owner_id;
    "#;

    /// Define the todo table
    pub const DEFINE_TODO_TABLE: &str = r#"
        DEFINE TABLE IF NOT EXISTS todo SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS title ON todo TYPE string;

        DEFINE FIELD IF NOT EXISTS is_complete ON todo TYPE bool DEFAULT false;

        DEFINE FIELD IF NOT EXISTS created_at ON todo TYPE datetime DEFAULT time::now();

        DEFINE FIELD IF NOT EXISTS todo_list_id ON todo TYPE string;

        DEFINE FIELD IF NOT EXISTS owner_id ON todo TYPE string;

        DEFINE INDEX IF NOT EXISTS todo_scope ON todo FIELDS todo_list_id, owner_id;
    "#;
}

/// Initialize the database schema.
///
/// Idempotent: every definition uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns `DbError::Schema` if any schema definition fails.
pub async fn init_schema(client: &Surreal<Db>) -> Result<(), DbError> {
    client
        .query(sql::DEFINE_TODO_LIST_TABLE)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    client
        .query(sql::DEFINE_TODO_TABLE)
        .await
        .and_then(|response| response.check())
        .map_err(|e| DbError::Schema(Box::new(e)))?;

    Ok(())
}
