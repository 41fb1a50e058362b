mod queries;
mod types;

pub use queries::{find_all, insert};
pub use types::{
    Answers, Branch, NewSubmission, Submission, ValidationError, Year, build_submission, validate,
};
