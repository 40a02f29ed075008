//! Table definition for to-do items
//!
//! Applied at every startup; each statement is idempotent.

use sqlx::SqlitePool;

/// Create the `todo_items` table and its title index if they are missing.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring todo_items schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo_items (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            done BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS ix_todo_items_title ON todo_items (title)")
        .execute(pool)
        .await?;

    Ok(())
}
