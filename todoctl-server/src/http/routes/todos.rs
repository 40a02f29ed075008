//! To-do endpoints
//!
//! Five routes, each mapped onto one repository call. Every response body
//! is a full item (or an array of them), including the id.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{TodoItem, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, TodoId};
use crate::http::server::AppState;
use crate::models::{Pagination, PaginationParams, TodoFields};

/// To-do response
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl From<TodoItem> for TodoResponse {
    fn from(t: TodoItem) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            done: t.done,
        }
    }
}

/// POST /todos/ - create a new item
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ApiJson(fields): ApiJson<TodoFields>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).create(&fields).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// GET /todos/{todo_id} - get a single item
async fn get_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// GET /todos/?skip=&limit= - list items
async fn list_todos(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let page = Pagination::from(params);
    let todos = TodoRepo::new(&state.pool).list(page).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// PUT /todos/{todo_id} - replace all fields of an item
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ApiJson(fields): ApiJson<TodoFields>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).update(id, &fields).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{todo_id} - delete an item, returning it
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// To-do routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
