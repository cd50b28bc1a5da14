//! Display ordering of todo items
//!
//! Each list stores `todos_order`, an array of item ids. Items are sorted
//! ascending by the index of their id in that array. Ids the array does not
//! mention are placed according to an [`OrderingPolicy`].

use crate::models::TodoRow;
use std::collections::HashMap;
use std::str::FromStr;

/// Where items whose id is missing from `todos_order` are placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Unmatched ids get position -1 and sort ahead of every ordered item.
    ///
    /// This is the historical output of the list endpoint and is kept as the
    /// default so existing clients see the same ordering.
    #[default]
    UnmatchedFirst,
    /// Unmatched ids sort after every ordered item.
    UnmatchedLast,
}

impl OrderingPolicy {
    /// Returns the string representation used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingPolicy::UnmatchedFirst => "first",
            OrderingPolicy::UnmatchedLast => "last",
        }
    }

    fn unmatched_position(&self) -> i64 {
        match self {
            OrderingPolicy::UnmatchedFirst => -1,
            OrderingPolicy::UnmatchedLast => i64::MAX,
        }
    }
}

impl std::fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(OrderingPolicy::UnmatchedFirst),
            "last" => Ok(OrderingPolicy::UnmatchedLast),
            _ => Err(format!(
                "invalid ordering policy '{}'. Valid values: first, last",
                s
            )),
        }
    }
}

/// Sort `todos` by the position of their ids in `order`.
///
/// The sort is stable: items with the same position keep their incoming
/// relative order. When an id appears more than once in `order`, its first
/// occurrence counts.
pub fn sort_todos(mut todos: Vec<TodoRow>, order: &[String], policy: OrderingPolicy) -> Vec<TodoRow> {
    let mut positions: HashMap<&str, i64> = HashMap::with_capacity(order.len());
    for (index, id) in order.iter().enumerate() {
        positions.entry(id.as_str()).or_insert(index as i64);
    }

    let unmatched = policy.unmatched_position();
    todos.sort_by_key(|todo| {
        positions
            .get(todo.id.as_str())
            .copied()
            .unwrap_or(unmatched)
    });
    todos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;
    use chrono::{TimeZone, Utc};

    fn todo(id: &str) -> TodoRow {
        todo_titled(id, id)
    }

    fn todo_titled(id: &str, title: &str) -> TodoRow {
        TodoRow {
            id: TodoId::new(id),
            title: title.to_string(),
            is_complete: false,
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn ids(todos: &[TodoRow]) -> Vec<&str> {
        todos.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_sorts_by_stored_order() {
        let sorted = sort_todos(
            vec![todo("a"), todo("b"), todo("c")],
            &order(&["c", "a", "b"]),
            OrderingPolicy::UnmatchedFirst,
        );
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_unmatched_sorts_first_by_default() {
        let sorted = sort_todos(
            vec![todo("a"), todo("b"), todo("c")],
            &order(&["b", "c"]),
            OrderingPolicy::default(),
        );
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unmatched_sorts_ahead_of_first_ordered_item() {
        let sorted = sort_todos(
            vec![todo("b"), todo("c"), todo("x")],
            &order(&["b", "c"]),
            OrderingPolicy::UnmatchedFirst,
        );
        assert_eq!(ids(&sorted), vec!["x", "b", "c"]);
    }

    #[test]
    fn test_unmatched_sorts_last_when_requested() {
        let sorted = sort_todos(
            vec![todo("a"), todo("b"), todo("c")],
            &order(&["b", "c"]),
            OrderingPolicy::UnmatchedLast,
        );
        assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_unmatched_keep_relative_order() {
        let sorted = sort_todos(
            vec![todo("z"), todo("b"), todo("y"), todo("a"), todo("x")],
            &order(&["a", "b"]),
            OrderingPolicy::UnmatchedFirst,
        );
        assert_eq!(ids(&sorted), vec!["z", "y", "x", "a", "b"]);

        let sorted = sort_todos(
            vec![todo("z"), todo("b"), todo("y"), todo("a"), todo("x")],
            &order(&["a", "b"]),
            OrderingPolicy::UnmatchedLast,
        );
        assert_eq!(ids(&sorted), vec!["a", "b", "z", "y", "x"]);
    }

    #[test]
    fn test_equal_keys_are_stable() {
        // Same id twice (e.g. rows from a stale join) share a key.
        let sorted = sort_todos(
            vec![
                todo_titled("b", "first b"),
                todo("a"),
                todo_titled("b", "second b"),
            ],
            &order(&["a", "b"]),
            OrderingPolicy::UnmatchedFirst,
        );
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "first b", "second b"]);
    }

    #[test]
    fn test_duplicate_ids_in_order_use_first_occurrence() {
        let sorted = sort_todos(
            vec![todo("a"), todo("b")],
            &order(&["b", "a", "b"]),
            OrderingPolicy::UnmatchedFirst,
        );
        assert_eq!(ids(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_order_keeps_input_order() {
        let sorted = sort_todos(
            vec![todo("c"), todo("a"), todo("b")],
            &[],
            OrderingPolicy::UnmatchedLast,
        );
        assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_todos() {
        let sorted = sort_todos(vec![], &order(&["a"]), OrderingPolicy::UnmatchedFirst);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "first".parse::<OrderingPolicy>().unwrap(),
            OrderingPolicy::UnmatchedFirst
        );
        assert_eq!(
            "LAST".parse::<OrderingPolicy>().unwrap(),
            OrderingPolicy::UnmatchedLast
        );
        assert!("middle".parse::<OrderingPolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for policy in [OrderingPolicy::UnmatchedFirst, OrderingPolicy::UnmatchedLast] {
            assert_eq!(policy.to_string().parse::<OrderingPolicy>().unwrap(), policy);
        }
    }
}
