//! Database query functions for the `tasks` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::Task;

/// Insert a new task row. Returns the inserted task with server-generated
/// defaults (id, status, created_at).
pub async fn insert_task(
    pool: &PgPool,
    goal: &str,
    task_description: &str,
    deadline: Option<&str>,
    dependencies: Option<&str>,
) -> Result<Task> {
    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (goal, task_description, deadline, dependencies) \
         VALUES ($1, $2, $3, $4) \
         RETURNING *",
    )
    .bind(goal)
    .bind(task_description)
    .bind(deadline)
    .bind(dependencies)
    .fetch_one(pool)
    .await
    .context("failed to insert task")?;

    Ok(task)
}

/// Fetch a single task by ID.
pub async fn get_task(pool: &PgPool, id: i64) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch task")?;

    Ok(task)
}

/// List all tasks in insertion order.
pub async fn list_tasks(pool: &PgPool) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY id ASC")
        .fetch_all(pool)
        .await
        .context("failed to list tasks")?;

    Ok(tasks)
}

/// List the tasks generated for a given goal, in insertion order.
pub async fn list_tasks_for_goal(pool: &PgPool, goal: &str) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE goal = $1 ORDER BY id ASC")
        .bind(goal)
        .fetch_all(pool)
        .await
        .context("failed to list tasks for goal")?;

    Ok(tasks)
}
