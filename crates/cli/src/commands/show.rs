//! Show command for displaying a list with its ordered todos
//!
//! Implements `todo show`, the front end of the list fetch query.

use crate::config::Session;
use crate::output::format_list_view;
use clap::Args;
use todolist_db::{Database, DbError, TodoListId, TodoListView};

/// Show a list with its doing and completed todos
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// List ID to show
    #[arg(required = true)]
    pub list_id: String,

    /// Print the list as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Fetch the list view for the session owner.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if the list does not exist for this owner.
    pub async fn fetch(&self, db: &Database, session: &Session) -> Result<TodoListView, DbError> {
        db.fetch_todo_list(session.policy)
            .run(&TodoListId::new(self.list_id.as_str()), &session.owner)
            .await
    }

    /// Execute the show command, returning the rendered list.
    ///
    /// # Errors
    ///
    /// Returns `DbError::Serialization` if the view cannot be rendered as JSON.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        let view = self.fetch(db, session).await?;

        if self.json {
            Ok(serde_json::to_string_pretty(&view)?)
        } else {
            Ok(format_list_view(&view))
        }
    }
}
