//! Runtime configuration
//!
//! Every setting resolves with the same priority: command line flag, then
//! environment variable (ignored when blank), then default.

use std::path::PathBuf;
use todolist_db::{Database, DbError, DbResult, OrderingPolicy, OwnerId};

/// Environment variable name for the database path
pub const DB_PATH_ENV: &str = "TODO_DB_PATH";

/// Environment variable name for the owner id
pub const OWNER_ENV: &str = "TODO_OWNER_ID";

/// Environment variable name for the unmatched-id ordering policy
pub const UNMATCHED_ORDER_ENV: &str = "TODO_UNMATCHED_ORDER";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The principal all reads and writes are scoped to
    pub owner: OwnerId,
    /// Placement of items missing from a list's stored order
    pub policy: OrderingPolicy,
}

impl Session {
    /// Build a session for `owner` with the default ordering policy
    pub fn new(owner: impl Into<OwnerId>) -> Self {
        Self {
            owner: owner.into(),
            policy: OrderingPolicy::default(),
        }
    }

    /// Set the ordering policy
    pub fn with_policy(mut self, policy: OrderingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Read an environment variable, treating blank values as unset
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Get the database path from command line, environment variable, or default.
pub fn resolve_db_path(cli_db: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_db {
        return path;
    }

    if let Some(env_path) = non_empty_env(DB_PATH_ENV) {
        return PathBuf::from(env_path);
    }

    Database::default_path()
}

/// Get the owner id from command line or environment variable.
///
/// # Errors
///
/// Returns `DbError::ValidationError` if neither is set.
pub fn resolve_owner(cli_owner: Option<String>) -> DbResult<OwnerId> {
    cli_owner
        .filter(|owner| !owner.trim().is_empty())
        .or_else(|| non_empty_env(OWNER_ENV))
        .map(OwnerId::from)
        .ok_or_else(|| DbError::ValidationError {
            message: format!("owner id required (use --owner or {})", OWNER_ENV),
        })
}

/// Get the ordering policy from command line, environment variable, or default.
///
/// # Errors
///
/// Returns `DbError::ValidationError` if the environment value is not a known policy.
pub fn resolve_policy(cli_policy: Option<OrderingPolicy>) -> DbResult<OrderingPolicy> {
    if let Some(policy) = cli_policy {
        return Ok(policy);
    }

    match non_empty_env(UNMATCHED_ORDER_ENV) {
        Some(value) => value
            .parse()
            .map_err(|message| DbError::ValidationError { message }),
        None => Ok(OrderingPolicy::default()),
    }
}
