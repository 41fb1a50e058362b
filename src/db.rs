use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed a handful of demo snippets for the viewer. Idempotent: skipped when
/// the java table already has rows.
pub fn seed_demo_snippets(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM java", [], |row| row.get(0))
        .unwrap_or(0);
    if count > 0 {
        log::info!("Snippet table already seeded ({} rows), skipping", count);
        return;
    }

    let demos = [
        (
            "Hello World",
            "public class HelloWorld {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}",
        ),
        (
            "For Loop",
            "for (int i = 0; i < 10; i++) {\n    System.out.println(i);\n}",
        ),
    ];
    for (title, code) in demos {
        if let Err(e) = crate::models::snippet::insert(&conn, title, code) {
            log::error!("Demo snippet seed failed: {}", e);
            return;
        }
    }
    log::info!("Demo snippet seed complete");
}
