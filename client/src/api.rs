//! Request builder and response parser for the todo API wire protocol.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `*_request` method that produces an
//! `HttpRequest` and a `*_from_response` method that consumes an
//! `HttpResponse`, so the wire protocol stays deterministic and testable
//! without a network. The stateful `TodoClient` composes these around a
//! `Transport`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, ToggleTodo};

/// Stateless builder/parser for the `/api/todos` REST resource.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_request(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/todos", self.base_url),
            body: None,
        }
    }

    pub fn create_request(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/api/todos", self.base_url),
            body: Some(body),
        })
    }

    pub fn toggle_request(&self, id: i64, input: &ToggleTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/api/todos/{id}", self.base_url),
            body: Some(body),
        })
    }

    pub fn delete_request(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/api/todos/{id}", self.base_url),
            body: None,
        }
    }

    pub fn todos_from_response(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn todo_from_response(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Deletion carries no useful body; any success status acknowledges it.
    pub fn ack_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Any 2xx status is success; 404 maps to `NotFound`, everything else to
/// `Server` with the raw status and body.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Server {
        status: response.status,
        body: response.body.clone(),
    })
}
