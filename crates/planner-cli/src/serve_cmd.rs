use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use planner_core::plan::PlanService;
use planner_db::models::Task;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn internal(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Inbound goal submission.
#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub goal: String,
}

/// Outbound projection of a [`Task`]: the goal and creation timestamp are
/// internal, and `taskDescription` is the wire name the frontend expects.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    #[serde(rename = "taskDescription")]
    pub task_description: String,
    pub deadline: Option<String>,
    pub status: String,
    pub dependencies: Option<String>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            task_description: task.task_description,
            deadline: task.deadline,
            status: task.status,
            dependencies: task.dependencies,
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub service: PlanService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks/generate", post(generate_tasks))
        .route("/health/ping", get(health_ping))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(pool: PgPool, service: PlanService, bind: &str, port: u16) -> Result<()> {
    let app = build_router(AppState { pool, service });
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("planner serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("planner serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Decompose a goal into tasks, persist them, and return the saved records
/// in line order. A goal the model answers with no task lines yields `[]`
/// with a success status.
async fn generate_tasks(
    State(state): State<AppState>,
    Json(request): Json<GoalRequest>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = state
        .service
        .generate_and_save(&state.pool, &request.goal)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Liveness probe.
async fn health_ping() -> &'static str {
    "OK"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
