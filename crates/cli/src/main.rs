use clap::Parser;
use std::path::PathBuf;
use std::process;
use todolist_cli::commands::Command;
use todolist_cli::config::{self, Session};
use todolist_db::{Database, DbError, OrderingPolicy};
use tracing_subscriber::EnvFilter;

/// Exit code for a list or todo the owner cannot see
const EXIT_NOT_FOUND: i32 = 2;

/// todo - owner-scoped to-do lists
#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "Owner-scoped to-do lists", long_about = None)]
struct Args {
    /// Path to the database directory (can also be set via TODO_DB_PATH env var)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Owner id all commands act as (can also be set via TODO_OWNER_ID env var)
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Placement of todos missing from a list's stored order: first or last
    /// (can also be set via TODO_UNMATCHED_ORDER env var)
    #[arg(long, global = true)]
    unmatched: Option<OrderingPolicy>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging from RUST_LOG, defaulting to warn
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Map an error to the process exit code
fn exit_code(err: &DbError) -> i32 {
    if err.is_not_found() {
        EXIT_NOT_FOUND
    } else {
        1
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let args = Args::parse();
    match run_with_args(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e.full_message());
            process::exit(exit_code(&e));
        }
    }
}

/// Run the application with the given arguments
async fn run_with_args(args: &Args) -> Result<String, DbError> {
    let Some(command) = &args.command else {
        return Ok("Use 'todo --help' for usage information.".to_string());
    };

    // Settings are checked before the database directory is created.
    let session = resolve_session(args)?;

    let db_path = config::resolve_db_path(args.db.clone());
    let db = Database::connect(&db_path).await?;
    db.init().await?;

    command.execute(&db, &session).await
}

/// Resolve the owner and ordering policy for this invocation
fn resolve_session(args: &Args) -> Result<Session, DbError> {
    Ok(Session::new(config::resolve_owner(args.owner.clone())?)
        .with_policy(config::resolve_policy(args.unmatched)?))
}
