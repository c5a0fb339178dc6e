//! Integration tests for task persistence.
//!
//! Uses the shared PostgreSQL from `planner-test-utils`; each test creates a
//! unique temporary database with migrations applied and drops it on
//! completion so tests are fully isolated.

use planner_db::models::{INITIAL_STATUS, Task};
use planner_db::queries::tasks;
use planner_test_utils::{create_test_db, drop_test_db};

#[tokio::test]
async fn insert_sets_server_defaults() {
    let (pool, db_name) = create_test_db().await;

    let task = tasks::insert_task(
        &pool,
        "Learn Rust",
        "Set up project",
        Some("in 2 days"),
        None,
    )
    .await
    .expect("insert_task should succeed");

    assert!(task.id > 0);
    assert_eq!(task.goal, "Learn Rust");
    assert_eq!(task.task_description, "Set up project");
    assert_eq!(task.deadline.as_deref(), Some("in 2 days"));
    assert_eq!(task.status, INITIAL_STATUS);
    assert!(task.dependencies.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn insert_and_get_roundtrip() {
    let (pool, db_name) = create_test_db().await;

    let inserted = tasks::insert_task(
        &pool,
        "Plan a wedding",
        "Book a venue",
        None,
        Some("[Depends on: Task #1]"),
    )
    .await
    .unwrap();

    let fetched = tasks::get_task(&pool, inserted.id)
        .await
        .expect("get_task should succeed")
        .expect("task should exist");

    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.task_description, "Book a venue");
    assert!(fetched.deadline.is_none());
    assert_eq!(fetched.dependencies.as_deref(), Some("[Depends on: Task #1]"));
    assert_eq!(fetched.created_at, inserted.created_at);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_task_returns_none_for_missing_id() {
    let (pool, db_name) = create_test_db().await;

    let result = tasks::get_task(&pool, 424242)
        .await
        .expect("get_task should not error");
    assert!(result.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn list_tasks_preserves_insertion_order() {
    let (pool, db_name) = create_test_db().await;

    for desc in ["first", "second", "third"] {
        tasks::insert_task(&pool, "ordering", desc, None, None)
            .await
            .unwrap();
    }

    let all = tasks::list_tasks(&pool).await.unwrap();
    let descriptions: Vec<&str> = all.iter().map(|t| t.task_description.as_str()).collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);

    // IDs increase with insertion order.
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn list_tasks_for_goal_filters_other_goals() {
    let (pool, db_name) = create_test_db().await;

    tasks::insert_task(&pool, "goal-a", "a-1", None, None)
        .await
        .unwrap();
    tasks::insert_task(&pool, "goal-b", "b-1", None, None)
        .await
        .unwrap();
    tasks::insert_task(&pool, "goal-a", "a-2", None, None)
        .await
        .unwrap();

    let a_tasks: Vec<Task> = tasks::list_tasks_for_goal(&pool, "goal-a").await.unwrap();
    assert_eq!(a_tasks.len(), 2);
    assert!(a_tasks.iter().all(|t| t.goal == "goal-a"));

    let none = tasks::list_tasks_for_goal(&pool, "goal-c").await.unwrap();
    assert!(none.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}
