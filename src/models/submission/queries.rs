use rusqlite::params;

use crate::db::DbPool;
use crate::errors::StorageError;

use super::types::{Answers, NewSubmission, Submission};

/// Persist exactly one new submission. The storage layer assigns the row id
/// and `created_at`.
pub fn insert(pool: &DbPool, submission: &NewSubmission) -> Result<i64, StorageError> {
    let conn = pool.get()?;
    let responses =
        serde_json::to_string(&submission.answers).unwrap_or_else(|_| "{}".to_string());
    conn.execute(
        "INSERT INTO feedback (name, year, branch, responses) VALUES (?1, ?2, ?3, ?4)",
        params![
            submission.name,
            submission.year.as_str(),
            submission.branch.as_str(),
            responses
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch every submission in storage order. No filtering, no pagination.
pub fn find_all(pool: &DbPool) -> Result<Vec<Submission>, StorageError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, year, branch, responses, created_at FROM feedback ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        let responses: String = row.get(4)?;
        Ok(Submission {
            id: row.get(0)?,
            name: row.get(1)?,
            year: row.get(2)?,
            branch: row.get(3)?,
            answers: parse_answers(&responses),
            created_at: row.get(5)?,
        })
    })?;
    let submissions = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(submissions)
}

/// Decode a stored `responses` JSON object. Tolerant of rows written by
/// other clients: null stays absent, non-string scalars keep their JSON
/// rendering, anything that is not an object yields no answers.
fn parse_answers(raw: &str) -> Answers {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Unreadable responses payload, skipping: {}", e);
            return Answers::new();
        }
    };
    let mut answers = Answers::new();
    if let serde_json::Value::Object(map) = value {
        for (key, val) in map {
            let entry = match val {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            answers.insert(key, entry);
        }
    }
    answers
}
