//! Generate-and-save service: prompt -> Gemini -> extraction -> persistence.
//!
//! Extraction is a pure function over the generated text; persistence is a
//! separate step applied to its output, so the two are independently
//! testable.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use planner_db::models::Task;
use planner_db::queries::tasks as task_queries;

use super::extract::{ParsedTask, extract_tasks};
use super::prompt::PromptTemplate;
use crate::gemini::GeminiClient;

/// Orchestrates one goal submission end to end.
#[derive(Debug, Clone)]
pub struct PlanService {
    client: GeminiClient,
    template: PromptTemplate,
}

impl PlanService {
    pub fn new(client: GeminiClient, template: PromptTemplate) -> Self {
        Self { client, template }
    }

    /// Decompose `goal` into tasks and persist them.
    ///
    /// Returns the saved rows in persistence order, which equals the order of
    /// their originating lines. A generated text with no recognizable task
    /// lines yields an empty list, not an error.
    pub async fn generate_and_save(&self, pool: &PgPool, goal: &str) -> Result<Vec<Task>> {
        let prompt = self.template.render(goal);
        let generated = self
            .client
            .generate(&prompt)
            .await
            .context("task generation failed")?;

        let parsed = extract_tasks(&generated, goal);
        info!(goal, tasks = parsed.len(), "extracted tasks from generated text");

        persist_tasks(pool, &parsed).await
    }
}

/// Insert each parsed record in input order, one write per task.
///
/// Inserts are independent: there is no transaction spanning the batch, so a
/// failure partway through leaves the earlier rows in place.
pub async fn persist_tasks(pool: &PgPool, parsed: &[ParsedTask]) -> Result<Vec<Task>> {
    let mut saved = Vec::with_capacity(parsed.len());
    for task in parsed {
        let row = task_queries::insert_task(
            pool,
            &task.goal,
            &task.description,
            task.deadline.as_deref(),
            task.dependencies.as_deref(),
        )
        .await?;
        saved.push(row);
    }
    Ok(saved)
}
