//! Done and undo commands
//!
//! Implements `todo done` and `todo undo`, which move a todo between the
//! completed and doing partitions of its list.

use crate::config::Session;
use clap::Args;
use todolist_db::{Database, DbError, TodoId};

/// Identify a todo whose completion state should change
#[derive(Debug, Args)]
pub struct CompletionCommand {
    /// Todo ID
    #[arg(required = true)]
    pub id: String,
}

impl CompletionCommand {
    /// Set the todo's completion state to `is_complete`.
    ///
    /// # Errors
    ///
    /// Returns `DbError::TodoNotFound` if the todo does not belong to the owner.
    pub async fn execute(
        &self,
        db: &Database,
        session: &Session,
        is_complete: bool,
    ) -> Result<String, DbError> {
        let id = TodoId::new(self.id.as_str());
        db.writer()
            .set_completion(&id, &session.owner, is_complete)
            .await?;

        Ok(if is_complete {
            format!("Completed todo: {}", id)
        } else {
            format!("Reopened todo: {}", id)
        })
    }
}
