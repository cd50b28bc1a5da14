//! CLI commands for the todo tool
//!
//! This module contains all subcommand implementations for the todo CLI.

pub mod add;
pub mod done;
pub mod lists;
pub mod new;
pub mod reorder;
pub mod show;

pub use add::AddCommand;
pub use done::CompletionCommand;
pub use lists::ListsCommand;
pub use new::NewCommand;
pub use reorder::MoveCommand;
pub use show::ShowCommand;

use crate::config::Session;
use clap::Subcommand;
use todolist_db::{Database, DbError};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new list
    New(NewCommand),
    /// Add a todo to a list
    Add(AddCommand),
    /// Mark a todo as complete
    Done(CompletionCommand),
    /// Mark a todo as not complete
    Undo(CompletionCommand),
    /// Move a todo within its list
    Move(MoveCommand),
    /// Show your lists
    Lists(ListsCommand),
    /// Show a list with its ordered todos
    Show(ShowCommand),
}

impl Command {
    /// Execute the command with the given database connection.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the command execution fails.
    pub async fn execute(&self, db: &Database, session: &Session) -> Result<String, DbError> {
        match self {
            Command::New(cmd) => cmd.execute(db, session).await,
            Command::Add(cmd) => cmd.execute(db, session).await,
            Command::Done(cmd) => cmd.execute(db, session, true).await,
            Command::Undo(cmd) => cmd.execute(db, session, false).await,
            Command::Move(cmd) => cmd.execute(db, session).await,
            Command::Lists(cmd) => cmd.execute(db, session).await,
            Command::Show(cmd) => cmd.execute(db, session).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_command_new_parses() {
        let cli = TestCli::try_parse_from(["test", "new", "Groceries"]).unwrap();
        match cli.command {
            Command::New(cmd) => assert_eq!(cmd.title, "Groceries"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_add_parses() {
        let cli = TestCli::try_parse_from(["test", "add", "abc123", "Buy milk"]).unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.list_id, "abc123");
                assert_eq!(cmd.title, "Buy milk");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_add_requires_title() {
        assert!(TestCli::try_parse_from(["test", "add", "abc123"]).is_err());
    }

    #[test]
    fn test_command_done_and_undo_parse() {
        let done = TestCli::try_parse_from(["test", "done", "t1"]).unwrap();
        assert!(matches!(done.command, Command::Done(ref c) if c.id == "t1"));

        let undo = TestCli::try_parse_from(["test", "undo", "t1"]).unwrap();
        assert!(matches!(undo.command, Command::Undo(ref c) if c.id == "t1"));
    }

    #[test]
    fn test_command_move_parses_index() {
        let cli = TestCli::try_parse_from(["test", "move", "l1", "t1", "2"]).unwrap();
        match cli.command {
            Command::Move(cmd) => {
                assert_eq!(cmd.list_id, "l1");
                assert_eq!(cmd.todo_id, "t1");
                assert_eq!(cmd.index, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_move_rejects_negative_index() {
        assert!(TestCli::try_parse_from(["test", "move", "l1", "t1", "-1"]).is_err());
    }

    #[test]
    fn test_command_show_json_flag() {
        let cli = TestCli::try_parse_from(["test", "show", "l1", "--json"]).unwrap();
        match cli.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.list_id, "l1");
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_command_lists_parses() {
        let cli = TestCli::try_parse_from(["test", "lists"]).unwrap();
        assert!(matches!(cli.command, Command::Lists(_)));
    }
}
