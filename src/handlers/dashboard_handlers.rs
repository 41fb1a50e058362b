use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Deserialize;

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::gate::{AppConfig, SessionKind, classify_session};
use crate::models::submission;
use crate::questions::{QUESTIONS, QuestionDef};
use crate::report::{self, FlatTable, Report};
use crate::templates_structs::{Bar, DashboardTemplate, QuestionSection};

/// The dashboard carries no session: the gate re-evaluates the name from
/// the query string on every request.
#[derive(Deserialize)]
pub struct GateQuery {
    #[serde(default)]
    pub name: String,
}

fn section_view(table: &FlatTable, question: &'static QuestionDef) -> QuestionSection {
    match report::report(table, question) {
        Report::Empty => QuestionSection {
            prompt: question.prompt,
            is_choice: !question.is_text(),
            empty: true,
            bars: Vec::new(),
            responses: Vec::new(),
        },
        Report::Counts(counts) => {
            let max = counts.iter().map(|c| c.count).max().unwrap_or(1);
            let bars = counts
                .into_iter()
                .map(|c| Bar {
                    pct: c.count * 100 / max,
                    label: c.label,
                    count: c.count,
                })
                .collect();
            QuestionSection {
                prompt: question.prompt,
                is_choice: true,
                empty: false,
                bars,
                responses: Vec::new(),
            }
        }
        Report::Responses(values) => QuestionSection {
            prompt: question.prompt,
            is_choice: false,
            empty: false,
            bars: Vec::new(),
            responses: values,
        },
    }
}

/// GET /dashboard — one report per question over all submissions.
pub async fn index(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    query: web::Query<GateQuery>,
) -> Result<HttpResponse, AppError> {
    if classify_session(&query.name, &config.admin_username) != SessionKind::Admin {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish());
    }

    let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();

    let tmpl = match submission::find_all(&pool) {
        Err(e) => {
            log::error!("Dashboard load failed: {}", e);
            DashboardTemplate {
                admin_name: query.name.clone(),
                error: Some(format!("Error loading feedback: {}", e)),
                loaded: 0,
                generated_at,
                sections: Vec::new(),
            }
        }
        Ok(submissions) if submissions.is_empty() => DashboardTemplate {
            admin_name: query.name.clone(),
            error: None,
            loaded: 0,
            generated_at,
            sections: Vec::new(),
        },
        Ok(submissions) => {
            let table = report::flatten(&submissions);
            let sections = QUESTIONS.iter().map(|q| section_view(&table, q)).collect();
            DashboardTemplate {
                admin_name: query.name.clone(),
                error: None,
                loaded: submissions.len(),
                generated_at,
                sections,
            }
        }
    };
    render(tmpl)
}

/// GET /dashboard/export.csv — the flattened table as a download.
pub async fn export_csv(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
    query: web::Query<GateQuery>,
) -> Result<HttpResponse, AppError> {
    if classify_session(&query.name, &config.admin_username) != SessionKind::Admin {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish());
    }

    match submission::find_all(&pool) {
        Err(e) => {
            log::error!("CSV export load failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Error loading feedback: {}", e)))
        }
        Ok(submissions) => {
            let table = report::flatten(&submissions);
            let csv = report::export_csv(&table);
            Ok(HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"feedback_responses.csv\"",
                ))
                .body(csv))
        }
    }
}
