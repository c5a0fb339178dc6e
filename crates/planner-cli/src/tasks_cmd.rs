//! Listing of persisted tasks.

use anyhow::Result;
use sqlx::PgPool;

use planner_db::models::Task;
use planner_db::queries::tasks as task_queries;

/// Print persisted tasks, optionally filtered to one goal.
pub async fn run_tasks(pool: &PgPool, goal: Option<&str>) -> Result<()> {
    let tasks = match goal {
        Some(goal) => task_queries::list_tasks_for_goal(pool, goal).await?,
        None => task_queries::list_tasks(pool).await?,
    };

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    for task in &tasks {
        print_task(task);
        if goal.is_none() {
            println!("    goal: {}", task.goal);
        }
    }

    Ok(())
}

/// Print one task as `#id [status] description` plus its annotations.
pub fn print_task(task: &Task) {
    let mut line = format!(
        "#{} [{}] {}",
        task.id, task.status, task.task_description
    );
    if let Some(deadline) = &task.deadline {
        line.push_str(&format!(" (due {deadline})"));
    }
    if let Some(dependencies) = &task.dependencies {
        line.push_str(&format!(" {dependencies}"));
    }
    println!("{line}");
}
