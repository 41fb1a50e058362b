use rusqlite::{Connection, params};

use crate::db::DbPool;
use crate::errors::StorageError;

/// One code snippet from the `java` table.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub created_at: String,
}

/// Fetch every snippet in storage order.
pub fn find_all(pool: &DbPool) -> Result<Vec<Snippet>, StorageError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare("SELECT id, title, code, created_at FROM java ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Snippet {
            id: row.get(0)?,
            title: row.get(1)?,
            code: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;
    let snippets = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(snippets)
}

/// Insert a snippet. Only used by seeding; the viewer itself never writes.
pub fn insert(conn: &Connection, title: &str, code: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO java (title, code) VALUES (?1, ?2)",
        params![title, code],
    )?;
    Ok(())
}
