//! One-shot goal decomposition from the terminal.

use anyhow::Result;
use sqlx::PgPool;

use planner_core::plan::PlanService;

use crate::tasks_cmd::print_task;

/// Decompose `goal`, persist the tasks, and print the saved records.
pub async fn run_generate(pool: &PgPool, service: &PlanService, goal: &str) -> Result<()> {
    let tasks = service.generate_and_save(pool, goal).await?;

    if tasks.is_empty() {
        println!("No tasks generated for {goal:?}.");
        return Ok(());
    }

    println!("Saved {} task(s) for {goal:?}:", tasks.len());
    for task in &tasks {
        print_task(task);
    }

    Ok(())
}
