use actix_session::Session;

/// Store a one-shot flash message for the next page render.
pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

/// Take the flash message, clearing it so it renders exactly once.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
