use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::snippet;
use crate::templates_structs::SnippetsTemplate;

/// GET /snippets — every stored snippet as a collapsible code block.
pub async fn list(pool: web::Data<DbPool>) -> Result<HttpResponse, AppError> {
    let tmpl = match snippet::find_all(&pool) {
        Ok(snippets) => SnippetsTemplate { snippets, error: None },
        Err(e) => {
            log::error!("Snippet load failed: {}", e);
            SnippetsTemplate {
                snippets: Vec::new(),
                error: Some(format!("Error loading snippets: {}", e)),
            }
        }
    };
    render(tmpl)
}
