mod common;

use common::{create_test_agenda, fixed_now};
use horizon_core::{
    params::{AddCandidate, Countdown, CreateList, CreateTodo, Id, ListTodos, UpdateTodo},
    AgendaError, Phase, PhaseTracker, TodoStatus,
};
use jiff::SignedDuration;

#[tokio::test]
async fn test_todo_lifecycle_through_agenda() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    let start = fixed_now() + SignedDuration::from_hours(1);

    let todo = agenda
        .create_todo(
            "ada",
            &CreateTodo {
                title: "Release".to_string(),
                description: Some("Tag and publish".to_string()),
                start_at: Some(start.to_string()),
                end_at: None,
                status: None,
            },
        )
        .await
        .expect("Failed to create todo");
    assert_eq!(todo.status, TodoStatus::NotStarted);
    assert_eq!(todo.end_at, start + SignedDuration::from_mins(25));

    let fetched = agenda
        .get_todo("ada", &Id { id: todo.id })
        .await
        .unwrap()
        .expect("Todo should exist");
    assert_eq!(fetched, todo);

    let updated = agenda
        .update_todo(
            "ada",
            &UpdateTodo {
                id: todo.id,
                status: Some("COMPLETED".to_string()),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TodoStatus::Completed);

    let countdown = agenda
        .countdown("ada", &Countdown { id: todo.id, at: None })
        .await
        .unwrap();
    assert_eq!(countdown.metrics.phase, Phase::Done);

    agenda.delete_todo("ada", &Id { id: todo.id }).await.unwrap();
    assert!(matches!(
        agenda.countdown("ada", &Countdown { id: todo.id, at: None }).await,
        Err(AgendaError::TodoNotFound { .. })
    ));
}

#[tokio::test]
async fn test_invalid_inputs_are_client_errors() {
    let (_temp_dir, agenda) = create_test_agenda().await;

    let blank = agenda
        .create_todo(
            "ada",
            &CreateTodo {
                title: "   ".to_string(),
                ..CreateTodo::default()
            },
        )
        .await
        .unwrap_err();
    assert!(blank.is_client_error());

    let bad_status = agenda
        .list_todos(
            "ada",
            &ListTodos {
                status: Some("PAUSED".to_string()),
                search: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(bad_status, AgendaError::InvalidInput { .. }));

    let bad_at = agenda
        .countdown(
            "ada",
            &Countdown {
                id: 1,
                at: Some("noon".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(bad_at, AgendaError::InvalidInput { ref field, .. } if field == "at"));

    let zero_weight = agenda
        .add_candidate(
            "ada",
            &AddCandidate {
                list_id: 1,
                label: "Zero".to_string(),
                weight: Some(0),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(zero_weight, AgendaError::InvalidInput { .. }));

    let blank_name = agenda
        .create_list(
            "ada",
            &CreateList {
                name: String::new(),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert!(blank_name.is_client_error());
}

#[tokio::test]
async fn test_tracker_over_listed_todos() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    for offset in [0, 30] {
        agenda
            .create_todo(
                "ada",
                &CreateTodo {
                    title: format!("Block +{offset}"),
                    start_at: Some((fixed_now() + SignedDuration::from_mins(offset)).to_string()),
                    ..CreateTodo::default()
                },
            )
            .await
            .unwrap();
    }
    let todos = agenda.list_todos("ada", &ListTodos::default()).await.unwrap();

    let mut tracker = PhaseTracker::new();
    assert!(tracker.observe_all(todos.as_slice(), fixed_now()).is_empty());

    let later = fixed_now() + SignedDuration::from_mins(31);
    let edges = tracker.observe_all(todos.as_slice(), later);
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().any(|e| e.from == Phase::Active && e.to == Phase::Overdue));
    assert!(edges.iter().any(|e| e.from == Phase::Upcoming && e.to == Phase::Active));
}

#[tokio::test]
async fn test_spin_unknown_list() {
    let (_temp_dir, agenda) = create_test_agenda().await;
    assert!(matches!(
        agenda.spin_wheel("ada", &Id { id: 99 }).await,
        Err(AgendaError::ListNotFound { id: 99 })
    ));
}
