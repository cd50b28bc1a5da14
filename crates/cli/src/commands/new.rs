//! New command for creating lists
//!
//! Implements `todo new` which creates an empty list for the current owner.

use crate::config::Session;
use crate::id::IdGenerator;
use clap::Args;
use todolist_db::{Database, DbError, TodoListId};
use tracing::debug;

/// Create a new, empty list
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Title of the list
    #[arg(required = true)]
    pub title: String,
}

impl NewCommand {
    /// Execute the new command.
    ///
    /// # Returns
    ///
    /// The id of the created list.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the title is blank or the database operation fails.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        let writer = db.writer();
        let mut generator = IdGenerator::new(&self.title);

        while let Some(candidate) = generator.next_id() {
            let id = TodoListId::new(candidate);
            if writer.list_exists(&id).await? {
                debug!("List id collision, retrying: {}", id);
                continue;
            }
            writer.create_list(&id, &session.owner, &self.title).await?;
            return Ok(id.to_string());
        }

        Err(DbError::ValidationError {
            message: "failed to generate unique list id after maximum retries".to_string(),
        })
    }
}
