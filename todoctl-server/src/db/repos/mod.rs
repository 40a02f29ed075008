//! Repository implementations for database access
//!
//! Repositories borrow the pool and check out a connection per call:
//! - One statement per operation
//! - Absent rows surface as `DbError::NotFound`, never as an empty result

pub mod todos;

pub use todos::{TodoItem, TodoRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
