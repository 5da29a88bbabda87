use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use inkwell_core::ports::PostRepository;
use inkwell_core::{NewPost, RepoError};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str, content: &str) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        content: content.to_owned(),
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_list_posts() {
    let first = model("First", "one");
    let second = model("Second", "two");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![first.clone(), second.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, first.id);
    assert_eq!(posts[1].title, "Second");
}

#[tokio::test]
async fn test_create_returns_generated_row() {
    let row = model("A", "B");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.create(NewPost::new("A", "B")).await.unwrap();

    assert_eq!(post.id, row.id);
    assert_eq!(post.title, "A");
    assert_eq!(post.content, "B");
}

#[tokio::test]
async fn test_create_rejects_empty_content_without_query() {
    // No results queued: reaching the database would fail the test differently.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.create(NewPost::new("A", "")).await.unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn test_query_failure_maps_to_repo_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("relation \"posts\" does not exist".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let err = repo.list().await.unwrap_err();

    assert!(matches!(err, RepoError::Query(ref msg) if msg.contains("does not exist")));
}
