/// How a question accepts its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    SingleChoice,
    FreeText,
}

/// One survey question. The set and order of questions is fixed at deploy
/// time and identical for every submission.
#[derive(Debug, Clone, Copy)]
pub struct QuestionDef {
    pub prompt: &'static str,
    pub kind: AnswerKind,
    pub choices: &'static [&'static str],
}

impl QuestionDef {
    pub fn is_text(&self) -> bool {
        self.kind == AnswerKind::FreeText
    }
}

const fn choice(prompt: &'static str, choices: &'static [&'static str]) -> QuestionDef {
    QuestionDef { prompt, kind: AnswerKind::SingleChoice, choices }
}

const fn text(prompt: &'static str) -> QuestionDef {
    QuestionDef { prompt, kind: AnswerKind::FreeText, choices: &[] }
}

pub const QUESTIONS: &[QuestionDef] = &[
    choice(
        "How would you rate the overall session?",
        &["1 - Poor", "2 - Fair", "3 - Good", "4 - Very Good", "5 - Excellent"],
    ),
    choice(
        "Was the content clear and easy to understand?",
        &["Yes", "Somewhat", "No"],
    ),
    choice(
        "How engaging was the session?",
        &["1 - Boring", "2", "3", "4", "5 - Very Engaging"],
    ),
    choice(
        "How was the pace of the session?",
        &["Too Fast", "Perfect", "Too Slow"],
    ),
    choice(
        "Did you find the topics covered relevant to your learning or career goals?",
        &["Yes", "Partially", "No"],
    ),
    choice(
        "Before attending this session, how familiar were you with Git and GitHub?",
        &["Not at all familiar", "Heard of it but never used", "Used a little", "Comfortable using them"],
    ),
    choice(
        "After this session, how confident are you in using Git and GitHub commands?",
        &["Not Confident", "Somewhat Confident", "Confident", "Very Confident"],
    ),
    choice(
        "Were the live demonstrations or practical examples helpful?",
        &["Yes, very helpful", "Somewhat helpful", "No, not much"],
    ),
    choice(
        "How useful did you find the hands-on or command-line demonstrations?",
        &["1 - Not Useful", "2", "3", "4", "5 - Very Useful"],
    ),
    choice(
        "Did this session motivate you to explore version control or open-source contribution further?",
        &["Yes", "Maybe", "No"],
    ),
    text("What did you like the most about the session?"),
    text("What could be improved in future sessions?"),
    choice(
        "How would you rate the instructor's clarity and explanation of Git/GitHub commands?",
        &["1 - Poor", "2 - Fair", "3 - Good", "4 - Very Good", "5 - Excellent"],
    ),
    choice(
        "Which Topics would you like to learn next?",
        &["AIML", "JAVA-DEVELOPMENT", "DOCKER"],
    ),
];

/// Look up a question by its prompt.
pub fn find_by_prompt(prompt: &str) -> Option<&'static QuestionDef> {
    QUESTIONS.iter().find(|q| q.prompt == prompt)
}
