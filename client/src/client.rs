//! Stateful client mirroring the server's todo collection.
//!
//! # Design
//! `TodoClient` owns the local ordered sequence — the only mutable state in
//! the crate — and routes every mutation through its operations; there are
//! no ambient globals. Each operation builds a request via `TodoApi`, runs
//! it through the injected `Transport`, parses the response, and only then
//! touches `items`, so a failed call never leaves the sequence partially
//! mutated. Failures are logged with the action name and returned as
//! structured `ApiError` values; how to present them is the caller's call.

use tracing::error;

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateTodo, Todo, ToggleTodo};
use crate::view::{self, TodoListView};

/// Client-side mirror of the `/api/todos` collection.
///
/// Holds a cached copy of the server's items in display order (newest
/// first). The sequence is a snapshot as of the last successful sync of
/// each affected item; it may go stale after a failed call, which is
/// acceptable — the user retries manually.
#[derive(Debug)]
pub struct TodoClient<T: Transport> {
    api: TodoApi,
    transport: T,
    items: Vec<Todo>,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            api: TodoApi::new(base_url),
            transport,
            items: Vec::new(),
        }
    }

    /// The current local sequence, in display order.
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Project the current state into a renderable view model.
    pub fn render(&self) -> TodoListView {
        view::project(&self.items)
    }

    /// Fetch the full collection and replace the local sequence with it.
    /// On failure the prior sequence is left untouched.
    pub fn load_all(&mut self) -> Result<(), ApiError> {
        let request = self.api.list_request();
        let todos = self
            .transport
            .execute(request)
            .and_then(|r| self.api.todos_from_response(r))
            .map_err(|e| fail("load", e))?;
        self.items = todos;
        Ok(())
    }

    /// Create a todo from `title`, trimmed of surrounding whitespace.
    ///
    /// A whitespace-only title is a silent no-op: no network call is made
    /// and `Ok(None)` is returned so the UI can put focus back on the entry
    /// field. On success the server-assigned item is inserted at the front
    /// of the sequence and returned.
    pub fn create(&mut self, title: &str) -> Result<Option<&Todo>, ApiError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let input = CreateTodo {
            title: title.to_string(),
        };
        let todo = self
            .api
            .create_request(&input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|r| self.api.todo_from_response(r))
            .map_err(|e| fail("create", e))?;
        self.items.insert(0, todo);
        Ok(self.items.first())
    }

    /// Flip the completion flag of the item with `id`.
    ///
    /// An id not present in the local sequence is a silent no-op. On success
    /// the matching entry is replaced in place with the server's returned
    /// representation, preserving its position.
    pub fn toggle(&mut self, id: i64) -> Result<Option<&Todo>, ApiError> {
        let Some(index) = self.items.iter().position(|t| t.id == id) else {
            return Ok(None);
        };

        let input = ToggleTodo {
            completed: !self.items[index].completed,
        };
        let todo = self
            .api
            .toggle_request(id, &input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|r| self.api.todo_from_response(r))
            .map_err(|e| fail("toggle", e))?;
        self.items[index] = todo;
        Ok(self.items.get(index))
    }

    /// Delete the item with `id` on the server, then drop every local entry
    /// matching it (expected: exactly one).
    pub fn remove(&mut self, id: i64) -> Result<(), ApiError> {
        let request = self.api.delete_request(id);
        self.transport
            .execute(request)
            .and_then(|r| self.api.ack_delete(r))
            .map_err(|e| fail("remove", e))?;
        self.items.retain(|t| t.id != id);
        Ok(())
    }
}

/// Log a failed operation with its action context before returning the error
/// to the caller.
fn fail(action: &str, err: ApiError) -> ApiError {
    error!(action, error = %err, "todo operation failed");
    err
}
