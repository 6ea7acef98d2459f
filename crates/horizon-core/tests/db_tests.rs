use horizon_core::{
    lifecycle::WindowPolicy,
    models::{NewCandidate, NewTodo, TodoChanges},
    AgendaError, Database, TodoFilter, TodoStatus,
};
use jiff::{SignedDuration, Timestamp};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn now() -> Timestamp {
    "2030-05-01T08:00:00Z".parse().expect("valid timestamp")
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        ..NewTodo::default()
    }
}

#[test]
fn test_database_initialization_is_idempotent() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());

    // Opening the same file again re-runs schema setup and migrations
    Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_and_get_todo() {
    let (_temp_file, mut db) = create_test_db();
    let policy = WindowPolicy::default();

    let created = db
        .create_todo("ada", &new_todo("Write tests"), &policy, now())
        .expect("Failed to create todo");
    assert!(created.id > 0);
    assert_eq!(created.start_at, now());
    assert_eq!(created.status, TodoStatus::InProgress);

    let retrieved = db
        .get_todo("ada", created.id)
        .expect("Failed to get todo")
        .expect("Todo should exist");
    assert_eq!(retrieved, created);

    assert!(db
        .get_todo("grace", created.id)
        .expect("Failed to query todo")
        .is_none());
}

#[test]
fn test_timestamps_with_fractional_seconds_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let at: Timestamp = "2030-05-01T08:00:00.123456789Z".parse().unwrap();

    let created = db
        .create_todo("ada", &new_todo("Precise"), &WindowPolicy::default(), at)
        .expect("Failed to create todo");
    let retrieved = db.get_todo("ada", created.id).unwrap().unwrap();

    assert_eq!(retrieved.start_at, at);
    assert_eq!(retrieved.created_at, at);
}

#[test]
fn test_list_todos_filters_by_status() {
    let (_temp_file, mut db) = create_test_db();
    let policy = WindowPolicy::default();

    db.create_todo("ada", &new_todo("Now"), &policy, now()).unwrap();
    db.create_todo(
        "ada",
        &NewTodo {
            status: Some(TodoStatus::Completed),
            ..new_todo("Done")
        },
        &policy,
        now(),
    )
    .unwrap();
    db.create_todo("grace", &new_todo("Not mine"), &policy, now())
        .unwrap();

    let all = db.list_todos("ada", &TodoFilter::default()).unwrap();
    assert_eq!(all.len(), 2);

    let completed = db
        .list_todos("ada", &TodoFilter::with_status(TodoStatus::Completed))
        .unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "Done");
}

#[test]
fn test_title_search_is_literal() {
    let (_temp_file, mut db) = create_test_db();
    let policy = WindowPolicy::default();

    db.create_todo("ada", &new_todo("Write 100% of tests"), &policy, now())
        .expect("Failed to create todo");
    db.create_todo("ada", &new_todo("Write docs"), &policy, now())
        .expect("Failed to create todo");
    db.create_todo("ada", &new_todo("snake_case rename"), &policy, now())
        .expect("Failed to create todo");

    let search = |text: &str| {
        let filter = TodoFilter {
            title_contains: Some(text.to_string()),
            ..TodoFilter::default()
        };
        db.list_todos("ada", &filter)
            .expect("Failed to list todos")
            .into_iter()
            .map(|t| t.title)
            .collect::<Vec<_>>()
    };

    assert_eq!(search("%"), ["Write 100% of tests"]);
    assert_eq!(search("_"), ["snake_case rename"]);
    assert!(search("W_ite").is_empty());
    assert_eq!(search("write").len(), 2);
}

#[test]
fn test_update_todo_merges_and_clears_description() {
    let (_temp_file, mut db) = create_test_db();
    let policy = WindowPolicy::default();
    let todo = db
        .create_todo(
            "ada",
            &NewTodo {
                description: Some("Draft".to_string()),
                ..new_todo("Essay")
            },
            &policy,
            now(),
        )
        .unwrap();

    let later = now() + SignedDuration::from_mins(1);
    let updated = db
        .update_todo(
            "ada",
            todo.id,
            &TodoChanges {
                description: Some(None),
                ..TodoChanges::default()
            },
            &policy,
            later,
        )
        .unwrap();

    assert_eq!(updated.title, "Essay");
    assert_eq!(updated.description, None);
    assert_eq!(updated.updated_at, later);
    assert_eq!(updated.created_at, todo.created_at);

    let stored = db.get_todo("ada", todo.id).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn test_update_without_effect_does_not_touch_row() {
    let (_temp_file, mut db) = create_test_db();
    let policy = WindowPolicy::default();
    let todo = db
        .create_todo("ada", &new_todo("Steady"), &policy, now())
        .unwrap();

    let later = now() + SignedDuration::from_mins(2);
    let same = db
        .update_todo("ada", todo.id, &TodoChanges::default(), &policy, later)
        .unwrap();

    assert_eq!(same.updated_at, todo.updated_at);
}

#[test]
fn test_update_missing_todo() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .update_todo(
            "ada",
            42,
            &TodoChanges::default(),
            &WindowPolicy::default(),
            now(),
        )
        .unwrap_err();
    assert!(matches!(err, AgendaError::TodoNotFound { id: 42 }));
}

#[test]
fn test_delete_todo() {
    let (_temp_file, mut db) = create_test_db();
    let todo = db
        .create_todo("ada", &new_todo("Temporary"), &WindowPolicy::default(), now())
        .unwrap();

    assert!(matches!(
        db.delete_todo("grace", todo.id),
        Err(AgendaError::TodoNotFound { .. })
    ));

    let deleted = db.delete_todo("ada", todo.id).unwrap();
    assert_eq!(deleted.title, "Temporary");
    assert!(db.get_todo("ada", todo.id).unwrap().is_none());
}

#[test]
fn test_list_delete_cascades_to_candidates() {
    let (temp_file, mut db) = create_test_db();

    let list = db.create_list("ada", "Games", None, now()).unwrap();
    for label in ["Chess", "Go"] {
        db.add_candidate(
            "ada",
            &NewCandidate {
                list_id: list.id,
                label: label.to_string(),
                weight: 2,
            },
            now(),
        )
        .unwrap();
    }

    let loaded = db.get_list("ada", list.id).unwrap().unwrap();
    assert_eq!(loaded.candidates.len(), 2);
    assert_eq!(loaded.total_weight(), 4);

    db.delete_list("ada", list.id).unwrap();
    assert!(db.get_list("ada", list.id).unwrap().is_none());

    let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM candidates", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn test_list_summaries_count_empty_lists() {
    let (_temp_file, mut db) = create_test_db();

    let empty = db.create_list("ada", "Empty", None, now()).unwrap();
    let full = db
        .create_list("ada", "Full", Some("Weekend plans"), now())
        .unwrap();
    db.add_candidate(
        "ada",
        &NewCandidate {
            list_id: full.id,
            label: "Hike".to_string(),
            weight: 5,
        },
        now(),
    )
    .unwrap();

    let summaries = db.list_lists("ada").unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, empty.id);
    assert_eq!(summaries[0].candidate_count, 0);
    assert_eq!(summaries[0].total_weight, 0);
    assert_eq!(summaries[1].candidate_count, 1);
    assert_eq!(summaries[1].total_weight, 5);

    assert!(db.list_lists("grace").unwrap().is_empty());
}

#[test]
fn test_add_candidate_bumps_list_updated_at() {
    let (_temp_file, mut db) = create_test_db();
    let list = db.create_list("ada", "Books", None, now()).unwrap();

    let later = now() + SignedDuration::from_hours(1);
    db.add_candidate(
        "ada",
        &NewCandidate {
            list_id: list.id,
            label: "Dune".to_string(),
            weight: 1,
        },
        later,
    )
    .unwrap();

    let loaded = db.get_list("ada", list.id).unwrap().unwrap();
    assert_eq!(loaded.updated_at, later);
    assert_eq!(loaded.created_at, now());
}

#[test]
fn test_migration_adds_weight_to_legacy_candidates() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let conn = rusqlite::Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE candidate_lists (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 user_id TEXT NOT NULL,
                 name TEXT NOT NULL,
                 description TEXT,
                 created_at TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );
             CREATE TABLE candidates (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 list_id INTEGER NOT NULL REFERENCES candidate_lists(id) ON DELETE CASCADE,
                 label TEXT NOT NULL,
                 created_at TEXT NOT NULL
             );
             INSERT INTO candidate_lists (user_id, name, created_at, updated_at)
                 VALUES ('ada', 'Old', '2024-01-01T00:00:00Z', '2024-01-01T00:00:00Z');
             INSERT INTO candidates (list_id, label, created_at)
                 VALUES (1, 'Legacy', '2024-01-01T00:00:00Z');",
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let list = db.get_list("ada", 1).unwrap().unwrap();
    assert_eq!(list.candidates.len(), 1);
    assert_eq!(list.candidates[0].weight, 1);
}
