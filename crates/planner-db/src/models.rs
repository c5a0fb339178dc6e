use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status assigned to every task at insert time.
///
/// This system writes it once and never transitions it; the column exists so
/// that downstream consumers have somewhere to record progress.
pub const INITIAL_STATUS: &str = "To Do";

/// A task extracted from generated plan text.
///
/// Rows are written once when a goal is decomposed and are never updated or
/// deleted afterwards. `id` is server-assigned and increases with insertion
/// order, so ordering by it reproduces the order of the originating lines.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    /// The goal this task was generated from, stored verbatim.
    pub goal: String,
    pub task_description: String,
    /// Relative deadline phrase without its parentheses, e.g. `in 2 days`.
    pub deadline: Option<String>,
    pub status: String,
    /// Dependency annotation stored as display text, brackets included,
    /// e.g. `[Depends on: Task #1]`. Not a foreign key.
    pub dependencies: Option<String>,
    pub created_at: DateTime<Utc>,
}
