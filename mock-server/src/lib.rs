//! In-memory implementation of the todo backend API.
//!
//! Serves the same `/api/todos` contract the production backend exposes:
//! integer server-assigned ids, newest-first list order, trimmed non-empty
//! titles. Used both as a runnable dev backend and as the collaborator in
//! the client crate's integration tests.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Partial update: omitted fields are left unchanged.
#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Backing store. `todos` is kept newest-first, matching the production
/// backend's `ORDER BY created_at DESC`.
#[derive(Default)]
pub struct Store {
    next_id: i64,
    todos: Vec<Todo>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiFailure = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            axum::routing::put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn bad_request(message: &str) -> ApiFailure {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn not_found() -> ApiFailure {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Todo not found" })))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiFailure> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(bad_request("Title cannot be empty"));
    }

    let mut store = db.write().await;
    store.next_id += 1;
    let todo = Todo {
        id: store.next_id,
        title: title.to_string(),
        completed: false,
        created_at: Utc::now(),
    };
    store.todos.insert(0, todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiFailure> {
    let mut store = db.write().await;
    let todo = store
        .todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(not_found)?;

    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    if let Some(title) = input.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(bad_request("Title cannot be empty"));
        }
        todo.title = title.to_string();
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiFailure> {
    let mut store = db.write().await;
    let before = store.todos.len();
    store.todos.retain(|t| t.id != id);
    if store.todos.len() == before {
        return Err(not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}
