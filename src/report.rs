//! Reshaping stored submissions for the dashboard: the answer-mapping pivot,
//! per-question reports, and the CSV export of the flattened table.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::submission::Submission;
use crate::questions::{AnswerKind, QUESTIONS, QuestionDef};

/// Submission fields that become columns ahead of the answer columns.
pub const FIXED_COLUMNS: &[&str] = &["id", "name", "year", "branch", "created_at"];

/// The flattened table: one row per submission, one column per fixed field
/// plus one per distinct answer key observed across all submissions. Absent
/// keys are explicit `None` cells.
#[derive(Debug, Clone)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl FlatTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Pivot the nested answer mappings into flat columns.
///
/// Two passes: the first collects the union of answer keys over every
/// submission, the second projects each submission into a fixed-width row.
/// Keys matching current questions come first in questionnaire order;
/// stale keys from stored data follow in sorted order, so removed questions
/// still surface as columns.
pub fn flatten(submissions: &[Submission]) -> FlatTable {
    let mut observed: BTreeSet<&str> = BTreeSet::new();
    for s in submissions {
        for key in s.answers.keys() {
            observed.insert(key.as_str());
        }
    }

    let mut answer_columns: Vec<&str> = Vec::with_capacity(observed.len());
    for q in QUESTIONS {
        if observed.remove(q.prompt) {
            answer_columns.push(q.prompt);
        }
    }
    answer_columns.extend(observed);

    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(answer_columns.iter().map(|c| c.to_string()));

    let mut rows = Vec::with_capacity(submissions.len());
    for s in submissions {
        let mut row: Vec<Option<String>> = Vec::with_capacity(columns.len());
        row.push(Some(s.id.to_string()));
        row.push(s.name.clone());
        row.push(Some(s.year.clone()));
        row.push(Some(s.branch.clone()));
        row.push(Some(s.created_at.clone()));
        for col in &answer_columns {
            row.push(s.answers.get(*col).cloned().flatten());
        }
        rows.push(row);
    }

    FlatTable { columns, rows }
}

/// Count of one choice label across all submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCount {
    pub label: String,
    pub count: u64,
}

/// One question's view over the flattened table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// No non-null values for this question. Rendered as an explicit notice,
    /// never as a chart with no bars.
    Empty,
    /// Single-choice counts, ordered by label rather than by frequency.
    Counts(Vec<ChoiceCount>),
    /// Free-text values in storage order, no aggregation.
    Responses(Vec<String>),
}

/// Build the report for one question from the flattened table.
pub fn report(table: &FlatTable, question: &QuestionDef) -> Report {
    let Some(idx) = table.column_index(question.prompt) else {
        return Report::Empty;
    };
    let values: Vec<&str> = table
        .rows
        .iter()
        .filter_map(|row| row[idx].as_deref())
        .collect();
    if values.is_empty() {
        return Report::Empty;
    }

    match question.kind {
        AnswerKind::SingleChoice => {
            let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
            for v in &values {
                *counts.entry(v).or_insert(0) += 1;
            }
            Report::Counts(
                counts
                    .into_iter()
                    .map(|(label, count)| ChoiceCount { label: label.to_string(), count })
                    .collect(),
            )
        }
        AnswerKind::FreeText => {
            Report::Responses(values.into_iter().map(String::from).collect())
        }
    }
}

/// Serialize the flattened table as CSV: one header row, then one line per
/// submission. Null cells become empty fields.
pub fn export_csv(table: &FlatTable) -> String {
    let mut out = String::new();

    let header: Vec<String> = table.columns.iter().map(|c| csv_field(c)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in &table.rows {
        let line: Vec<String> = row
            .iter()
            .map(|cell| cell.as_deref().map(csv_field).unwrap_or_default())
            .collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it embeds a delimiter, quote, or line break; embedded
/// quotes are doubled.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_plain_passthrough() {
        assert_eq!(csv_field("FY"), "FY");
    }

    #[test]
    fn csv_field_quotes_delimiters_and_newlines() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn csv_field_doubles_embedded_quotes() {
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
