//! todoctl-server: HTTP CRUD service for to-do items
//!
//! Maps five routes under `/todos/` onto a single SQLite table through a
//! pooled sqlx connection. The `todoctl` binary wires this up with
//! configuration and logging.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, open_in_memory, DbError, TodoItem, TodoRepo};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Pagination, TodoFields};
