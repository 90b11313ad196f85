//! Client for the todo REST API.
//!
//! # Overview
//! Mirrors the server's `/api/todos` collection in a local ordered sequence,
//! synchronizes it through four CRUD operations, and projects it into a
//! renderable view model. Control flow is linear: operation, network
//! round-trip, local state update, render.
//!
//! # Design
//! - `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network; `Transport` is the only I/O boundary.
//! - `TodoClient` owns the local sequence and is the single place state is
//!   mutated; a failed call never leaves it partially updated.
//! - `view::project` is a pure state-to-view-model function, testable with
//!   no display environment.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{CreateTodo, Todo, ToggleTodo};
pub use view::{TodoListView, TodoRow};
