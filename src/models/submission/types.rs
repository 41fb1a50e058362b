use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::questions::QUESTIONS;

/// Academic year of the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Year {
    Fy,
    Sy,
    Ty,
    Btech,
}

impl Year {
    pub fn as_str(&self) -> &'static str {
        match self {
            Year::Fy => "FY",
            Year::Sy => "SY",
            Year::Ty => "TY",
            Year::Btech => "BTECH",
        }
    }

    /// Parse a form value. The `Select` placeholder and empty values are
    /// treated as unset.
    pub fn from_param(value: &str) -> Option<Year> {
        match value {
            "FY" => Some(Year::Fy),
            "SY" => Some(Year::Sy),
            "TY" => Some(Year::Ty),
            "BTECH" => Some(Year::Btech),
            _ => None,
        }
    }

    pub fn all() -> &'static [Year] {
        &[Year::Fy, Year::Sy, Year::Ty, Year::Btech]
    }
}

/// Branch of study of the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Cse,
    Aids,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Cse => "CSE",
            Branch::Aids => "AIDS",
        }
    }

    pub fn from_param(value: &str) -> Option<Branch> {
        match value {
            "CSE" => Some(Branch::Cse),
            "AIDS" => Some(Branch::Aids),
            _ => None,
        }
    }

    pub fn all() -> &'static [Branch] {
        &[Branch::Cse, Branch::Aids]
    }
}

/// Why a submission was blocked before persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingYear,
    MissingBranch,
    MissingBoth,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingYear => {
                write!(f, "Please select your Year before submitting.")
            }
            ValidationError::MissingBranch => {
                write!(f, "Please select your Branch before submitting.")
            }
            ValidationError::MissingBoth => {
                write!(f, "Please select your Year and Branch before submitting.")
            }
        }
    }
}

/// Answer mapping: question prompt to the value the respondent submitted.
/// An unanswered single-choice question is an explicit `None`; an untouched
/// free-text question is `Some("")` — the two widget kinds produce different
/// absent-value representations.
pub type Answers = BTreeMap<String, Option<String>>;

/// A submission ready to persist. `year`/`branch` are typed, so only
/// validated values reach the insert path.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: Option<String>,
    pub year: Year,
    pub branch: Branch,
    pub answers: Answers,
}

/// A stored submission as read back in bulk by the dashboard. Field values
/// are kept verbatim from storage; rows are immutable once written.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: i64,
    pub name: Option<String>,
    pub year: String,
    pub branch: String,
    pub answers: Answers,
    pub created_at: String,
}

/// The only validation the collector performs: `year` and `branch` must be
/// set. Answers are never checked.
pub fn validate(year: Option<Year>, branch: Option<Branch>) -> Result<(), ValidationError> {
    match (year, branch) {
        (None, None) => Err(ValidationError::MissingBoth),
        (None, Some(_)) => Err(ValidationError::MissingYear),
        (Some(_), None) => Err(ValidationError::MissingBranch),
        (Some(_), Some(_)) => Ok(()),
    }
}

/// Assemble a submission from validated fields and the raw form values.
///
/// `name` is trimmed, with empty mapping to absent. Every known question
/// prompt gets an entry: the raw value verbatim when the widget posted one
/// (no coercion, no checking against the choice list), `None` otherwise.
/// Keys that match no known question are not copied.
pub fn build_submission(
    name: &str,
    year: Year,
    branch: Branch,
    raw_answers: &HashMap<String, String>,
) -> NewSubmission {
    let trimmed = name.trim();
    let name = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };

    let mut answers = Answers::new();
    for q in QUESTIONS {
        answers.insert(q.prompt.to_string(), raw_answers.get(q.prompt).cloned());
    }

    NewSubmission { name, year, branch, answers }
}
