use horizon_core::{Agenda, AgendaBuilder};
use jiff::Timestamp;
use tempfile::TempDir;

/// Fixed instant every test agenda reports as "now" (2030-03-17T17:46:40Z).
pub fn fixed_now() -> Timestamp {
    Timestamp::from_second(1_900_000_000).expect("valid timestamp")
}

/// Helper function to create a test agenda with a frozen clock
pub async fn create_test_agenda() -> (TempDir, Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let agenda = AgendaBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(fixed_now)
        .build()
        .await
        .expect("Failed to create agenda");
    (temp_dir, agenda)
}
