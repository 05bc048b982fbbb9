//! Service orchestration tests for the todo use-cases.

use std::sync::Arc;

use crate::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{NewTodo, Todo, TodoDomainError, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
    services::{TodoService, TodoServiceError},
};
use async_trait::async_trait;
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TodoService<InMemoryTodoRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn id(value: u64) -> TodoId {
    TodoId::new(value).expect("valid id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_persists_and_is_retrievable(service: TestService) {
    let created = service
        .create_todo("Write the report")
        .await
        .expect("creation should succeed");
    let fetched = service
        .get_todo(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_sets_defaults(service: TestService) {
    let before = Utc::now();
    let created = service
        .create_todo("Write the report")
        .await
        .expect("creation should succeed");

    assert!(created.id().value() > 0);
    assert!(!created.is_completed());
    assert!(created.created_at() >= before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_rejects_empty_title(service: TestService) {
    let result = service.create_todo("   ").await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Domain(TodoDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_todo_sets_flag_and_preserves_fields(service: TestService) {
    let created = service
        .create_todo("Write the report")
        .await
        .expect("creation should succeed");

    let updated = service
        .update_todo(created.id(), true)
        .await
        .expect("update should succeed");
    let fetched = service
        .get_todo(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, updated);
    assert!(fetched.is_completed());
    assert_eq!(fetched.id(), created.id());
    assert_eq!(fetched.title(), created.title());
    assert_eq!(fetched.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_todo_then_get_yields_not_found(service: TestService) {
    let created = service
        .create_todo("Write the report")
        .await
        .expect("creation should succeed");

    service
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    let result = service.get_todo(created.id()).await;

    assert!(matches!(
        result,
        Err(TodoServiceError::NotFound(missing)) if missing == created.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_id_yield_not_found(service: TestService) {
    let unknown = id(99);

    assert!(matches!(
        service.get_todo(unknown).await,
        Err(TodoServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.update_todo(unknown, true).await,
        Err(TodoServiceError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_todo(unknown).await,
        Err(TodoServiceError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_todos_reflects_creations_and_deletions(service: TestService) {
    let first = service.create_todo("one").await.expect("create one");
    let second = service.create_todo("two").await.expect("create two");
    let third = service.create_todo("three").await.expect("create three");

    service
        .delete_todo(second.id())
        .await
        .expect("delete should succeed");

    let mut todos = service.list_todos().await.expect("list should succeed");
    todos.sort_by_key(Todo::id);

    assert_eq!(todos, vec![first, third]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buy_milk_lifecycle(service: TestService) {
    let created = service
        .create_todo("Buy milk")
        .await
        .expect("creation should succeed");
    assert_eq!(created.id().value(), 1);
    assert_eq!(created.title().as_str(), "Buy milk");
    assert!(!created.is_completed());

    let updated = service
        .update_todo(created.id(), true)
        .await
        .expect("update should succeed");
    assert!(updated.is_completed());

    let fetched = service
        .get_todo(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched.title().as_str(), "Buy milk");
    assert!(fetched.is_completed());

    service
        .delete_todo(created.id())
        .await
        .expect("delete should succeed");
    assert!(matches!(
        service.get_todo(created.id()).await,
        Err(TodoServiceError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_assign_unique_identifiers(service: TestService) {
    let service = Arc::new(service);
    let mut handles = Vec::new();

    for n in 0..8 {
        let svc = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            svc.create_todo(format!("task {n}"))
                .await
                .expect("creation should succeed")
                .id()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("task should not panic"));
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TodoRepository for Repo {
        async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo>;
        async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;
        async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;
        async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;
        async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_todo_surfaces_persistence_failures() {
    let mut repository = MockRepo::new();
    repository.expect_insert().returning(|_| {
        Err(TodoRepositoryError::persistence(std::io::Error::other(
            "backing store unavailable",
        )))
    });

    let failing = TodoService::new(Arc::new(repository), Arc::new(DefaultClock));
    let result = failing.create_todo("Write the report").await;

    assert!(matches!(
        result,
        Err(TodoServiceError::Repository(
            TodoRepositoryError::Persistence(_)
        ))
    ));
}
