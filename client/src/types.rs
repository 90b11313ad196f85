//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The server owns every `Todo` — ids are assigned server-side and the client
//! only holds cached copies. Extra response fields (the server also sends
//! `created_at`) are ignored on deserialization, so the client stays
//! insulated from backend schema additions. Integration tests catch any
//! real drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for flipping a todo's completion flag. The title is never
/// sent; the server leaves omitted fields unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTodo {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 42,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn todo_ignores_unknown_response_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":1,"title":"A","completed":false,"created_at":"2026-08-30T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "A");
        assert!(!todo.completed);
    }

    #[test]
    fn toggle_todo_serializes_only_completed() {
        let json = serde_json::to_value(ToggleTodo { completed: true }).unwrap();
        assert_eq!(json, serde_json::json!({"completed": true}));
    }
}
