//! API Error Taxonomy
//!
//! Every failure coming out of the HTTP layer is folded into [`ApiError`]
//! so components branch on a structured kind instead of scattering
//! message-text matching through the UI code.

use thiserror::Error;

/// Application-level category of a rejected request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The action needs a logged-in session.
    AuthRequired,
    /// Anything else the backend refused.
    Other,
}

impl ErrorKind {
    /// Classify a rejection from the structured `code` field when the
    /// backend ships one. The legacy backend only sends free-text French
    /// messages ("Vous devez etre connecte pour ..."), so with no code the
    /// documented auth phrasing is recognized here, and only here.
    pub fn classify(code: Option<&str>, message: &str) -> Self {
        match code {
            Some("auth_required") | Some("not_authenticated") => Self::AuthRequired,
            Some(_) => Self::Other,
            None if message.to_lowercase().contains("connect") => Self::AuthRequired,
            None => Self::Other,
        }
    }
}

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx HTTP status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never completed.
    #[error("erreur réseau: {0}")]
    Network(String),
    /// The body was not the JSON we expected.
    #[error("réponse invalide: {0}")]
    Decode(String),
    /// The backend answered `success: false`.
    #[error("{message}")]
    Rejected { kind: ErrorKind, message: String },
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a `success: false` payload.
    pub fn rejected(code: Option<&str>, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        let kind = ErrorKind::classify(code, &message);
        Self::Rejected { kind, message }
    }

    /// True when the failure should send the visitor to the login page.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Rejected {
                kind: ErrorKind::AuthRequired,
                ..
            }
        )
    }

    /// Message to surface to the visitor, with a fallback when the
    /// backend sent nothing usable.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_code_wins_over_message() {
        assert_eq!(
            ErrorKind::classify(Some("auth_required"), ""),
            ErrorKind::AuthRequired
        );
        assert_eq!(
            ErrorKind::classify(Some("bad_request"), "not connected"),
            ErrorKind::Other
        );
    }

    #[test]
    fn legacy_auth_message_is_recognized() {
        assert_eq!(
            ErrorKind::classify(None, "not connected"),
            ErrorKind::AuthRequired
        );
        assert_eq!(
            ErrorKind::classify(None, "Vous devez etre Connecte pour noter une serie."),
            ErrorKind::AuthRequired
        );
        assert_eq!(ErrorKind::classify(None, "Note invalide."), ErrorKind::Other);
    }

    #[test]
    fn rejected_auth_triggers_redirect_branch() {
        let err = ApiError::rejected(None, Some("not connected".to_string()));
        assert!(err.requires_auth());
        let err = ApiError::rejected(None, Some("Donnees manquantes.".to_string()));
        assert!(!err.requires_auth());
        assert!(!ApiError::Status(500).requires_auth());
    }

    #[test]
    fn user_message_falls_back_when_empty() {
        let err = ApiError::rejected(None, None);
        assert_eq!(err.user_message("Erreur inconnue."), "Erreur inconnue.");
        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message("Erreur serveur."), "Erreur serveur.");
        let err = ApiError::rejected(None, Some("Note invalide.".to_string()));
        assert_eq!(err.user_message("Erreur inconnue."), "Note invalide.");
    }
}
