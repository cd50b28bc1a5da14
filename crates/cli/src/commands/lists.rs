//! Lists command: show every list the owner has

use crate::config::Session;
use crate::output::format_list_table;
use clap::Args;
use todolist_db::{Database, DbError};

/// List the current owner's lists
#[derive(Debug, Args)]
pub struct ListsCommand {}

impl ListsCommand {
    /// Execute the lists command, returning a formatted table.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        let lists = db.writer().lists_for_owner(&session.owner).await?;
        Ok(format_list_table(&lists))
    }
}
