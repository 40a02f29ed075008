//! To-do repository
//!
//! Every operation is a single statement:
//! - create: INSERT ... RETURNING (id assigned by SQLite)
//! - update/delete: UPDATE/DELETE ... RETURNING, no select-then-write
//! - list: ORDER BY id so pages are stable

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{Pagination, TodoFields};

/// Resource name used in not-found errors
const RESOURCE: &str = "Todo";

/// To-do record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

/// To-do repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new item and return it with its assigned id.
    pub async fn create(&self, fields: &TodoFields) -> Result<TodoItem, DbError> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            INSERT INTO todo_items (title, description, done)
            VALUES (?, ?, ?)
            RETURNING id, title, description, done
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.done)
        .fetch_one(self.pool)
        .await?;

        tracing::info!(id = item.id, "todo created");
        Ok(item)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i64) -> Result<TodoItem, DbError> {
        tracing::debug!(id, "fetching todo");

        sqlx::query_as::<_, TodoItem>(
            "SELECT id, title, description, done FROM todo_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// List items in id order, skipping `page.offset()` rows and returning
    /// at most `page.limit()`.
    ///
    /// No total count is computed; a short page is the only end marker.
    pub async fn list(&self, page: Pagination) -> Result<Vec<TodoItem>, DbError> {
        tracing::debug!(skip = page.offset(), limit = page.limit(), "listing todos");

        let items = sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT id, title, description, done
            FROM todo_items
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Overwrite all mutable fields of an existing item.
    pub async fn update(&self, id: i64, fields: &TodoFields) -> Result<TodoItem, DbError> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            UPDATE todo_items
            SET title = ?, description = ?, done = ?
            WHERE id = ?
            RETURNING id, title, description, done
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.done)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(id, "todo updated");
        Ok(item)
    }

    /// Remove an item, returning it as it was before deletion.
    pub async fn delete(&self, id: i64) -> Result<TodoItem, DbError> {
        let item = sqlx::query_as::<_, TodoItem>(
            "DELETE FROM todo_items WHERE id = ? RETURNING id, title, description, done",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        tracing::info!(id, "todo deleted");
        Ok(item)
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}
