use rusty_disc::model::Db;
use tempfile::TempDir;

pub struct TestContext {
    pub db_path: String,
    _tmp: TempDir,
}

/// Builds a file-backed sqlite database seeded from the shared fixture.
pub fn setup_test_context() -> TestContext {
    setup_test_context_with(include_str!("fixtures/seed.json"))
}

pub fn setup_test_context_with(seed: &str) -> TestContext {
    let tmp = TempDir::new().expect("tempdir");
    let db_path = tmp
        .path()
        .join("rating.db")
        .to_string_lossy()
        .into_owned();

    let mut db = Db::open(&db_path).expect("open db");
    db.create_schema().expect("create schema");
    if !seed.is_empty() {
        let json: serde_json::Value = serde_json::from_str(seed).expect("seed json");
        db.seed_from_json(&json).expect("seed db");
    }

    TestContext { db_path, _tmp: tmp }
}
