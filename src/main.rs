use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use pulsecheck::{db, gate::AppConfig, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let pool = db::init_pool("data/app.db");
    db::run_migrations(&pool);

    // Optional demo snippets for the /snippets page
    if std::env::var("SEED_DEMO").map(|v| v == "1").unwrap_or(false) {
        db::seed_demo_snippets(&pool);
    }

    // Reserved admin identifier — typing this name in the form's name field
    // switches the session to the dashboard view
    let admin_username = match std::env::var("ADMIN_USERNAME") {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            log::warn!("No ADMIN_USERNAME set — falling back to 'admin'");
            "admin".to_string()
        }
    };
    let config = AppConfig { admin_username };

    // Session encryption key — load from SESSION_KEY env var so flash messages
    // survive server restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key");
            Key::generate()
        }
    };

    log::info!("Starting server at http://127.0.0.1:8080");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Feedback collector
            .route("/", web::get().to(handlers::feedback_handlers::form))
            .route("/feedback", web::post().to(handlers::feedback_handlers::submit))
            // Admin analytics dashboard
            .route("/dashboard", web::get().to(handlers::dashboard_handlers::index))
            .route("/dashboard/export.csv", web::get().to(handlers::dashboard_handlers::export_csv))
            // Snippet viewer
            .route("/snippets", web::get().to(handlers::snippet_handlers::list))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
