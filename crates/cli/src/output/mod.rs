//! Output formatting for the todo CLI
//!
//! Renders list views and list summaries as plain text.

use chrono::{DateTime, Utc};
use todolist_db::{TodoListSummary, TodoListView, TodoRow};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 40;

/// Timestamp format used in all text output
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn push_section(out: &mut Vec<String>, heading: &str, todos: &[TodoRow]) {
    out.push(format!("{} ({})", heading, todos.len()));
    if todos.is_empty() {
        out.push("  (none)".to_string());
        return;
    }

    let id_width = todos.iter().map(|t| t.id.as_str().len()).max().unwrap_or(0);
    for todo in todos {
        let mark = if todo.is_complete { "x" } else { " " };
        out.push(format!(
            "  [{}] {:<id_width$}  {}",
            mark,
            todo.id.as_str(),
            todo.title,
            id_width = id_width
        ));
    }
}

/// Format a list view with its doing and completed sections.
///
/// ```text
/// Chores (a1b2c3d4)
/// Created: 2026-10-19 09:30
///
/// Doing (1)
///   [ ] 0f3e9a21  Sweep the floor
///
/// Completed (0)
///   (none)
/// ```
pub fn format_list_view(view: &TodoListView) -> String {
    let mut out = vec![
        format!("{} ({})", view.title, view.id),
        format!("Created: {}", timestamp(&view.created_at)),
        String::new(),
    ];
    push_section(&mut out, "Doing", &view.doing_todos);
    out.push(String::new());
    push_section(&mut out, "Completed", &view.completed_todos);
    out.join("\n")
}

/// Format list summaries into an aligned table.
pub fn format_list_table(lists: &[TodoListSummary]) -> String {
    if lists.is_empty() {
        return "No lists found.".to_string();
    }

    let headers = ["ID", "Title", "Created"];

    let id_width = lists
        .iter()
        .map(|l| l.id.as_str().len())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let title_width = lists
        .iter()
        .map(|l| truncate(&l.title, MAX_TITLE_WIDTH).chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let mut lines = Vec::with_capacity(lists.len() + 2);
    lines.push(format!(
        "{:<id_width$}  {:<title_width$}  {}",
        headers[0],
        headers[1],
        headers[2],
        id_width = id_width,
        title_width = title_width
    ));
    lines.push(format!(
        "{}  {}  {}",
        "-".repeat(id_width),
        "-".repeat(title_width),
        "-".repeat(TIMESTAMP_FORMAT.len() + 2)
    ));

    for list in lists {
        lines.push(format!(
            "{:<id_width$}  {:<title_width$}  {}",
            list.id.as_str(),
            truncate(&list.title, MAX_TITLE_WIDTH),
            timestamp(&list.created_at),
            id_width = id_width,
            title_width = title_width
        ));
    }

    lines.join("\n")
}
