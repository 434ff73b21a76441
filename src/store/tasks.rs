use crate::error::AppError;
use crate::models::Task;
use sqlx::PgPool;
use uuid::Uuid;

/// Persists a normalized task.
pub async fn insert(pool: &PgPool, task: &Task) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO tasks (id, title, description, completed, created_at, due_date, owner_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(&task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.completed)
    .bind(task.created_at)
    .bind(task.due_date)
    .bind(task.owner_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Returns all tasks owned by the given identity, newest first.
pub async fn list_for_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, created_at, due_date, owner_id
         FROM tasks WHERE owner_id = $1
         ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}
