use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::gate::{AppConfig, SessionKind, classify_session};
use crate::models::submission::{self, Branch, Year};
use crate::questions::QUESTIONS;
use crate::session::{set_flash, take_flash};
use crate::templates_structs::{FeedbackFormTemplate, QuestionView};

/// Decode a URL-encoded string (form data): `+` → space, `%HH` → byte.
fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let mut out = Vec::with_capacity(s.len());
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            if let Ok(byte) = u8::from_str_radix(&s[i + 1..i + 3], 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Percent-encode a string for use in a redirect Location query.
fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Parse URL-encoded form body into key-value pairs. The answer fields have
/// dynamic names (`q0..qN`).
fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

fn get_field<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// View rows for the questionnaire; answer fields are named `q0..qN`.
fn question_views() -> Vec<QuestionView> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(idx, q)| QuestionView {
            field: format!("q{idx}"),
            prompt: q.prompt,
            is_text: q.is_text(),
            choices: q.choices,
        })
        .collect()
}

fn form_template(flash: Option<String>, error: Option<String>) -> FeedbackFormTemplate {
    FeedbackFormTemplate {
        flash,
        error,
        questions: question_views(),
        years: Year::all().iter().map(|y| y.as_str()).collect(),
        branches: Branch::all().iter().map(|b| b.as_str()).collect(),
    }
}

/// GET / — the questionnaire.
pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let flash = take_flash(&session);
    render(form_template(flash, None))
}

/// POST /feedback — gate check, validate, persist one submission.
pub async fn submit(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);
    let name = get_field(&params, "name");

    // Typing the reserved admin name switches the view instead of submitting.
    if classify_session(name, &config.admin_username) == SessionKind::Admin {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", format!("/dashboard?name={}", url_encode(name))))
            .finish());
    }

    let year = Year::from_param(get_field(&params, "year"));
    let branch = Branch::from_param(get_field(&params, "branch"));
    if let Err(err) = submission::validate(year, branch) {
        return render(form_template(None, Some(err.to_string())));
    }
    // validate() guarantees both are set
    let (Some(year), Some(branch)) = (year, branch) else {
        return render(form_template(None, Some("Invalid form state".to_string())));
    };

    // An unchecked radio posts nothing for its field; a textarea always
    // posts, possibly empty. build_submission keeps that distinction.
    let mut raw_answers: HashMap<String, String> = HashMap::new();
    for (idx, q) in QUESTIONS.iter().enumerate() {
        let key = format!("q{idx}");
        if let Some((_, value)) = params.iter().find(|(k, _)| *k == key) {
            raw_answers.insert(q.prompt.to_string(), value.clone());
        }
    }

    let new_submission = submission::build_submission(name, year, branch, &raw_answers);
    match submission::insert(&pool, &new_submission) {
        Ok(_) => {
            set_flash(&session, "Thank you for your valuable feedback!");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/"))
                .finish())
        }
        Err(e) => {
            log::error!("Feedback insert failed: {}", e);
            render(form_template(None, Some(format!("Error saving feedback: {}", e))))
        }
    }
}
