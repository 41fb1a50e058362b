/// Runtime configuration shared with handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reserved name that switches the session to the dashboard view.
    pub admin_username: String,
}

/// Which view the current visitor gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Respondent,
    Admin,
}

/// Classify a visitor from the current value of the name field. Recomputed
/// on every evaluation; nothing is persisted server-side.
///
/// This is a bare single-factor check: anyone who types the reserved name
/// gets the admin view. Kept compatible with the deployed behavior rather
/// than hardened.
pub fn classify_session(name: &str, admin_identifier: &str) -> SessionKind {
    if name.trim().eq_ignore_ascii_case(admin_identifier.trim()) {
        SessionKind::Admin
    } else {
        SessionKind::Respondent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_match_is_case_insensitive() {
        assert_eq!(classify_session("Admin", "admin"), SessionKind::Admin);
        assert_eq!(classify_session("ADMIN", "admin"), SessionKind::Admin);
    }

    #[test]
    fn admin_match_trims_whitespace() {
        assert_eq!(classify_session("  admin \n", "admin"), SessionKind::Admin);
    }

    #[test]
    fn other_names_are_respondents() {
        assert_eq!(classify_session("alice", "admin"), SessionKind::Respondent);
        assert_eq!(classify_session("", "admin"), SessionKind::Respondent);
        assert_eq!(classify_session("administrator", "admin"), SessionKind::Respondent);
    }
}
