//! Add command for creating todos
//!
//! Implements `todo add` which appends an incomplete item to a list.

use crate::config::Session;
use crate::id::IdGenerator;
use clap::Args;
use todolist_db::{Database, DbError, TodoId, TodoListId};
use tracing::debug;

/// Add a todo to a list
#[derive(Debug, Args)]
pub struct AddCommand {
    /// List to add the todo to
    #[arg(required = true)]
    pub list_id: String,

    /// Title of the todo
    #[arg(required = true)]
    pub title: String,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// # Returns
    ///
    /// The id of the created todo.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the list does not belong to the owner.
    /// Returns `DbError` if the title is blank or the database operation fails.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        let writer = db.writer();
        let list_id = TodoListId::new(self.list_id.as_str());
        let mut generator = IdGenerator::new(&self.title);

        while let Some(candidate) = generator.next_id() {
            let id = TodoId::new(candidate);
            if writer.todo_exists(&id).await? {
                debug!("Todo id collision, retrying: {}", id);
                continue;
            }
            writer
                .add_todo(&id, &list_id, &session.owner, &self.title)
                .await?;
            return Ok(id.to_string());
        }

        Err(DbError::ValidationError {
            message: "failed to generate unique todo id after maximum retries".to_string(),
        })
    }
}
