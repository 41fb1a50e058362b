//! Tests for the collector's validation, submission assembly, and the
//! insert/read-back path.

mod common;

use std::collections::HashMap;

use common::setup_test_pool;
use pulsecheck::models::submission::{self, Branch, ValidationError, Year};
use pulsecheck::questions::QUESTIONS;

const LIKED_MOST: &str = "What did you like the most about the session?";
const OVERALL: &str = "How would you rate the overall session?";

#[test]
fn validate_requires_year() {
    let result = submission::validate(None, Branch::from_param("CSE"));
    assert_eq!(result, Err(ValidationError::MissingYear));
}

#[test]
fn validate_requires_branch() {
    let result = submission::validate(Year::from_param("FY"), None);
    assert_eq!(result, Err(ValidationError::MissingBranch));
}

#[test]
fn validate_reports_both_missing() {
    let result = submission::validate(None, None);
    assert_eq!(result, Err(ValidationError::MissingBoth));
}

#[test]
fn validate_passes_with_both_set() {
    let result = submission::validate(Year::from_param("BTECH"), Branch::from_param("AIDS"));
    assert_eq!(result, Ok(()));
}

#[test]
fn placeholder_values_are_unset() {
    assert_eq!(Year::from_param("Select"), None);
    assert_eq!(Year::from_param(""), None);
    assert_eq!(Branch::from_param("Select"), None);
}

#[test]
fn build_submission_trims_name() {
    let raw = HashMap::new();
    let s = submission::build_submission("  Jane Doe ", Year::Fy, Branch::Cse, &raw);
    assert_eq!(s.name.as_deref(), Some("Jane Doe"));
}

#[test]
fn build_submission_maps_empty_name_to_absent() {
    let raw = HashMap::new();
    let s = submission::build_submission("   ", Year::Fy, Branch::Cse, &raw);
    assert_eq!(s.name, None);
}

#[test]
fn build_submission_answer_copy_policy() {
    // A textarea posts an empty string when untouched; an unchecked radio
    // posts nothing at all. Both must survive distinctly.
    let mut raw = HashMap::new();
    raw.insert(OVERALL.to_string(), "3 - Good".to_string());
    raw.insert(LIKED_MOST.to_string(), "".to_string());

    let s = submission::build_submission("", Year::Sy, Branch::Aids, &raw);

    assert_eq!(s.answers.len(), QUESTIONS.len());
    assert_eq!(s.answers[OVERALL], Some("3 - Good".to_string()));
    assert_eq!(s.answers[LIKED_MOST], Some("".to_string()));
    // Every question the form never posted is an explicit null.
    assert_eq!(s.answers["How was the pace of the session?"], None);
}

#[test]
fn build_submission_copies_values_verbatim() {
    // No coercion, no checking against the choice list.
    let mut raw = HashMap::new();
    raw.insert(OVERALL.to_string(), "not even a choice".to_string());
    let s = submission::build_submission("", Year::Ty, Branch::Cse, &raw);
    assert_eq!(s.answers[OVERALL], Some("not even a choice".to_string()));
}

#[test]
fn build_submission_ignores_unknown_keys() {
    let mut raw = HashMap::new();
    raw.insert("Is this a real question?".to_string(), "no".to_string());
    let s = submission::build_submission("", Year::Fy, Branch::Cse, &raw);
    assert!(!s.answers.contains_key("Is this a real question?"));
    assert_eq!(s.answers.len(), QUESTIONS.len());
}

#[test]
fn insert_then_find_all_round_trips() {
    let (_dir, pool) = setup_test_pool();

    let mut raw = HashMap::new();
    raw.insert(OVERALL.to_string(), "5 - Excellent".to_string());
    raw.insert(LIKED_MOST.to_string(), "The live demos".to_string());
    let new = submission::build_submission("Jane", Year::Fy, Branch::Cse, &raw);

    let id = submission::insert(&pool, &new).expect("insert failed");
    assert!(id > 0);

    let all = submission::find_all(&pool).expect("find_all failed");
    assert_eq!(all.len(), 1);

    let stored = &all[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.name.as_deref(), Some("Jane"));
    assert_eq!(stored.year, "FY");
    assert_eq!(stored.branch, "CSE");
    assert!(!stored.created_at.is_empty());
    // Every answer key round-trips with its original value.
    assert_eq!(stored.answers, new.answers);
}

#[test]
fn submissions_are_read_in_storage_order() {
    let (_dir, pool) = setup_test_pool();

    for name in ["first", "second", "third"] {
        let new = submission::build_submission(name, Year::Fy, Branch::Cse, &HashMap::new());
        submission::insert(&pool, &new).expect("insert failed");
    }

    let all = submission::find_all(&pool).expect("find_all failed");
    let names: Vec<_> = all.iter().filter_map(|s| s.name.as_deref()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn blocked_validation_means_no_insert() {
    let (_dir, pool) = setup_test_pool();

    // year="Select", branch="CSE" — the collector must not reach insert.
    let year = Year::from_param("Select");
    let branch = Branch::from_param("CSE");
    assert_eq!(submission::validate(year, branch), Err(ValidationError::MissingYear));

    let all = submission::find_all(&pool).expect("find_all failed");
    assert!(all.is_empty());
}

#[test]
fn all_empty_answers_still_insert() {
    let (_dir, pool) = setup_test_pool();

    let new = submission::build_submission("", Year::Fy, Branch::Cse, &HashMap::new());
    submission::insert(&pool, &new).expect("insert failed");

    let all = submission::find_all(&pool).expect("find_all failed");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].answers.len(), QUESTIONS.len());
    assert!(all[0].answers.values().all(|v| v.is_none()));
}
