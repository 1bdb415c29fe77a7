//! Identity provider boundary
//!
//! Types shared by the browser and the server for sign-up, sign-in and
//! session restoration, plus the typed error returned by every provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

impl Identity {
    /// Case-insensitive email match
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Result of a successful sign-up or sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    /// Missing while the account waits for e-mail confirmation
    pub access_token: Option<String>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Extra attributes stored with a new account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpProfile {
    pub full_name: String,
}

/// Identity provider errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum AuthError {
    #[error("Email not confirmed")]
    EmailNotConfirmed,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Classify a raw message from the auth backend
    pub fn from_backend_message(message: &str) -> Self {
        if message.contains("Email not confirmed") {
            AuthError::EmailNotConfirmed
        } else if message.contains("Invalid login credentials") {
            AuthError::InvalidCredentials
        } else if message.contains("User already registered") {
            AuthError::AlreadyRegistered
        } else {
            AuthError::Other(message.to_string())
        }
    }

    /// Copy shown to the user
    pub fn user_message(&self) -> String {
        match self {
            AuthError::EmailNotConfirmed => {
                "Please check your email and click the confirmation link before signing in."
                    .to_string()
            }
            AuthError::InvalidCredentials => {
                "Invalid email or password. Please try again.".to_string()
            }
            AuthError::AlreadyRegistered => {
                "An account with this email already exists. Try signing in instead.".to_string()
            }
            AuthError::NotSignedIn => "Please sign in to continue.".to_string(),
            AuthError::Network(_) => "Something went wrong. Please try again.".to_string(),
            AuthError::Other(message) => message.clone(),
        }
    }

    /// Stable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmailNotConfirmed => "EMAIL_NOT_CONFIRMED",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AlreadyRegistered => "ALREADY_REGISTERED",
            AuthError::NotSignedIn => "NOT_SIGNED_IN",
            AuthError::Network(_) => "NETWORK_ERROR",
            AuthError::Other(_) => "AUTH_ERROR",
        }
    }

    /// Rebuild an error from an API error body
    pub fn from_code(code: &str, message: &str) -> Self {
        match code {
            "EMAIL_NOT_CONFIRMED" => AuthError::EmailNotConfirmed,
            "INVALID_CREDENTIALS" => AuthError::InvalidCredentials,
            "ALREADY_REGISTERED" => AuthError::AlreadyRegistered,
            "NOT_SIGNED_IN" => AuthError::NotSignedIn,
            "NETWORK_ERROR" => AuthError::Network(message.to_string()),
            _ => AuthError::Other(message.to_string()),
        }
    }
}

/// Sign-up, sign-in and session verification
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<Session, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Resolve the user behind a stored access token
    async fn current_identity(&self, access_token: &str) -> Result<Identity, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_backend_messages() {
        assert_eq!(
            AuthError::from_backend_message("Email not confirmed"),
            AuthError::EmailNotConfirmed
        );
        assert_eq!(
            AuthError::from_backend_message("AuthApiError: Invalid login credentials"),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            AuthError::from_backend_message("User already registered"),
            AuthError::AlreadyRegistered
        );
    }

    #[test]
    fn test_unknown_message_passes_through_verbatim() {
        let err = AuthError::from_backend_message("Password should be at least 6 characters");
        assert_eq!(err.user_message(), "Password should be at least 6 characters");
    }

    #[test]
    fn test_user_messages() {
        assert!(
            AuthError::InvalidCredentials
                .user_message()
                .starts_with("Invalid email or password")
        );
        assert!(
            AuthError::AlreadyRegistered
                .user_message()
                .contains("Try signing in instead")
        );
    }

    #[test]
    fn test_code_round_trip() {
        for err in [
            AuthError::EmailNotConfirmed,
            AuthError::InvalidCredentials,
            AuthError::AlreadyRegistered,
            AuthError::NotSignedIn,
        ] {
            assert_eq!(AuthError::from_code(err.code(), ""), err);
        }
        assert_eq!(
            AuthError::from_code("AUTH_ERROR", "weak password"),
            AuthError::Other("weak password".to_string())
        );
    }

    #[test]
    fn test_identity_email_is_case_insensitive() {
        let identity = Identity {
            id: Uuid::new_v4(),
            email: "Ada@Example.com".to_string(),
        };
        assert!(identity.has_email("ada@example.com"));
        assert!(!identity.has_email("bob@example.com"));
    }

    #[test]
    fn test_pending_session_is_not_active() {
        let session = Session {
            identity: Identity {
                id: Uuid::new_v4(),
                email: "a@b.co".to_string(),
            },
            access_token: None,
        };
        assert!(!session.is_active());
    }
}
