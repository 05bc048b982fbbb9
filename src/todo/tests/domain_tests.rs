//! Domain-focused tests for todo construction and validation.

use crate::todo::domain::{NewTodo, TodoDomainError, TodoId, TodoTitle};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn todo_title_trims_surrounding_whitespace() {
    let title = TodoTitle::new("  Buy milk  ").expect("valid title");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn todo_title_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(TodoTitle::new(raw), Err(TodoDomainError::EmptyTitle));
}

#[rstest]
fn todo_id_rejects_zero() {
    assert_eq!(TodoId::new(0), Err(TodoDomainError::InvalidId(0)));
}

#[rstest]
fn todo_id_accepts_positive_values() {
    let id = TodoId::new(42).expect("valid id");
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
}

#[rstest]
fn todo_id_next_increments() {
    assert_eq!(TodoId::FIRST.next().value(), 2);
}

#[rstest]
fn new_todo_defaults_to_incomplete_with_clock_timestamp(clock: DefaultClock) {
    let before = Utc::now();
    let title = TodoTitle::new("Water the plants").expect("valid title");
    let draft = NewTodo::new(title, &clock);
    let after = Utc::now();

    assert_eq!(draft.title().as_str(), "Water the plants");
    assert!(draft.created_at() >= before);
    assert!(draft.created_at() <= after);
}

#[rstest]
fn into_todo_assigns_identifier_and_preserves_fields(clock: DefaultClock) {
    let title = TodoTitle::new("Water the plants").expect("valid title");
    let draft = NewTodo::new(title, &clock);
    let created_at = draft.created_at();

    let id = TodoId::new(7).expect("valid id");
    let todo = draft.into_todo(id);

    assert_eq!(todo.id(), id);
    assert_eq!(todo.title().as_str(), "Water the plants");
    assert!(!todo.is_completed());
    assert_eq!(todo.created_at(), created_at);
}

#[rstest]
fn set_completed_changes_only_the_flag(clock: DefaultClock) {
    let title = TodoTitle::new("Buy milk").expect("valid title");
    let id = TodoId::new(1).expect("valid id");
    let mut todo = NewTodo::new(title, &clock).into_todo(id);
    let created_at = todo.created_at();

    todo.set_completed(true);

    assert!(todo.is_completed());
    assert_eq!(todo.id(), id);
    assert_eq!(todo.title().as_str(), "Buy milk");
    assert_eq!(todo.created_at(), created_at);
}
