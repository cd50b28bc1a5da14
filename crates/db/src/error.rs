use std::path::PathBuf;
use thiserror::Error;

/// Database error types for to-do list storage
#[derive(Error, Debug)]
pub enum DbError {
    /// Error establishing connection to the database
    #[error("Failed to connect to database at {path}: {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: Box<surrealdb::Error>,
    },

    /// Error during schema initialization
    #[error("Failed to initialize database schema: {0}")]
    Schema(#[source] Box<surrealdb::Error>),

    /// Error executing a query
    #[error("Query execution failed")]
    Query(#[source] Box<surrealdb::Error>),

    /// Error with database path (invalid or inaccessible)
    #[error("Invalid database path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// The requested list does not exist for the requesting owner
    #[error("Todo list \"{list_id}\" was not found.")]
    NotFound { list_id: String },

    /// The requested todo does not exist for the requesting owner
    #[error("Todo \"{todo_id}\" was not found.")]
    TodoNotFound { todo_id: String },

    /// The list's order changed repeatedly while a move was being applied
    #[error("Todo list \"{list_id}\" changed while it was being updated; try again.")]
    Conflict { list_id: String },

    /// Error rendering a value as JSON
    #[error("Failed to render JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error creating database directory
    #[error("Failed to create database directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error for invalid input or validation failure
    #[error("{message}")]
    ValidationError { message: String },
}

impl From<surrealdb::Error> for DbError {
    fn from(err: surrealdb::Error) -> Self {
        DbError::Query(Box::new(err))
    }
}

impl DbError {
    /// Get the full error message including nested SurrealDB error details.
    ///
    /// This is useful for displaying detailed error information to users.
    pub fn full_message(&self) -> String {
        match self {
            DbError::Query(err) => format!("Query execution failed: {}", err),
            other => other.to_string(),
        }
    }

    /// Whether this error means the requested record is absent for the owner.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DbError::NotFound { .. } | DbError::TodoNotFound { .. }
        )
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;
