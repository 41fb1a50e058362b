// Template context structures for Askama templates.

use askama::Template;

use crate::models::snippet::Snippet;

/// One questionnaire row on the form. `field` is the HTML input name.
pub struct QuestionView {
    pub field: String,
    pub prompt: &'static str,
    pub is_text: bool,
    pub choices: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "feedback_form.html")]
pub struct FeedbackFormTemplate {
    pub flash: Option<String>,
    pub error: Option<String>,
    pub questions: Vec<QuestionView>,
    pub years: Vec<&'static str>,
    pub branches: Vec<&'static str>,
}

/// One bar of a single-choice chart; `pct` scales the bar against the most
/// frequent choice.
pub struct Bar {
    pub label: String,
    pub count: u64,
    pub pct: u64,
}

/// One question's panel on the dashboard.
pub struct QuestionSection {
    pub prompt: &'static str,
    pub is_choice: bool,
    pub empty: bool,
    pub bars: Vec<Bar>,
    pub responses: Vec<String>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_name: String,
    pub error: Option<String>,
    pub loaded: usize,
    pub generated_at: String,
    pub sections: Vec<QuestionSection>,
}

#[derive(Template)]
#[template(path = "snippets.html")]
pub struct SnippetsTemplate {
    pub snippets: Vec<Snippet>,
    pub error: Option<String>,
}
