//! Move command for reordering todos
//!
//! Implements `todo move`, which rewrites a list's stored display order.

use crate::config::Session;
use clap::Args;
use todolist_db::{Database, DbError, TodoId, TodoListId};

/// Move a todo to a new position in its list
#[derive(Debug, Args)]
pub struct MoveCommand {
    /// List containing the todo
    #[arg(required = true)]
    pub list_id: String,

    /// Todo to move
    #[arg(required = true)]
    pub todo_id: String,

    /// Zero-based target position (past the end moves it last)
    #[arg(required = true)]
    pub index: usize,
}

impl MoveCommand {
    /// Execute the move command.
    ///
    /// # Returns
    ///
    /// The list's new order, one id per line.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` / `DbError::TodoNotFound` when the list or
    /// todo is not visible to the owner.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        let order = db
            .writer()
            .move_todo(
                &TodoListId::new(self.list_id.as_str()),
                &session.owner,
                &TodoId::new(self.todo_id.as_str()),
                self.index,
            )
            .await?;

        Ok(order
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{:>3}. {}", i, id))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
