//! Shared test infrastructure: a pooled temporary SQLite database with the
//! schema applied, mirroring what `main` does at startup.

use tempfile::TempDir;

use pulsecheck::db::{self, DbPool};

/// Create a temp database and run migrations. The TempDir must be kept
/// alive for the pool to remain valid.
pub fn setup_test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("temp path not utf-8"));
    db::run_migrations(&pool);
    (dir, pool)
}
