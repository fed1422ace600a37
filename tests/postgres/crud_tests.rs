//! Basic CRUD operation tests for the `PostgreSQL` task repository.

use crate::postgres::helpers::{new_task, postgres_repo, unique_title};
use rstest::rstest;
use tasklist::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[ignore = "requires TASKLIST_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn save_and_find_by_id_round_trips(
    #[from(postgres_repo)] repo: PostgresTaskRepository,
) {
    let task = new_task(unique_title("Round trip"), 1);

    let stored = repo.save(&task).await.expect("save should succeed");
    let fetched = repo.find_by_id(task.id()).await.expect("lookup should succeed");

    assert_eq!(stored, task);
    assert_eq!(fetched, Some(task));
}

#[rstest]
#[ignore = "requires TASKLIST_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_title_matches_exactly(
    #[from(postgres_repo)] repo: PostgresTaskRepository,
) {
    let task = new_task(unique_title("Exact"), 1);
    repo.save(&task).await.expect("save should succeed");

    let found = repo.find_by_title(task.title()).await.expect("lookup");
    let missing = repo
        .find_by_title(&unique_title("Exact"))
        .await
        .expect("lookup");

    assert_eq!(found, Some(task));
    assert_eq!(missing, None);
}

#[rstest]
#[ignore = "requires TASKLIST_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn save_existing_id_replaces_mutable_fields(
    #[from(postgres_repo)] repo: PostgresTaskRepository,
) {
    let original = new_task(unique_title("Before"), 1);
    repo.save(&original).await.expect("save should succeed");

    let mut revised = original.clone();
    revised
        .revise(
            TaskDetails::new(unique_title("After"), original.expiration_date())
                .with_description("renamed"),
        )
        .expect("revision should succeed");
    let stored = repo.save(&revised).await.expect("update should succeed");

    assert_eq!(stored, revised);
    assert_eq!(stored.creation_date(), original.creation_date());
    assert_eq!(repo.find_by_title(original.title()).await.expect("lookup"), None);
}

#[rstest]
#[ignore = "requires TASKLIST_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_lists_saved_tasks(
    #[from(postgres_repo)] repo: PostgresTaskRepository,
) {
    let first = new_task(unique_title("First"), 1);
    let second = new_task(unique_title("Second"), 2);
    repo.save(&first).await.expect("save should succeed");
    repo.save(&second).await.expect("save should succeed");

    let ids: Vec<TaskId> = repo
        .find_all()
        .await
        .expect("listing should succeed")
        .iter()
        .map(|task| task.id())
        .collect();

    assert!(ids.contains(&first.id()));
    assert!(ids.contains(&second.id()));
}

#[rstest]
#[ignore = "requires TASKLIST_TEST_DATABASE_URL"]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row_and_reports_missing_ids(
    #[from(postgres_repo)] repo: PostgresTaskRepository,
) {
    let task = new_task(unique_title("Disposable"), 1);
    repo.save(&task).await.expect("save should succeed");

    repo.delete_by_id(task.id()).await.expect("delete should succeed");
    let second_delete = repo.delete_by_id(task.id()).await;

    assert_eq!(repo.find_by_id(task.id()).await.expect("lookup"), None);
    assert!(matches!(
        second_delete,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
}
