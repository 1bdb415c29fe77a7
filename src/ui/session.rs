//! Session context
//!
//! Reactive wrapper around the identity provider and the status reconciler:
//! - Stores the current session and persists it to localStorage
//! - Restores and verifies a saved session after hydration
//! - Re-checks the waitlist status whenever the identifying email changes

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use super::client::ApiClient;
use super::local_storage::LocalStore;
use crate::core::{
    AuthError, ClientStore, Identity, IdentityProvider, Session, SignUpProfile, StatusReconciler,
};

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Saved session not resolved yet
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

/// Session context providing auth state, the waitlist flag and auth actions
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<AuthState>,
    /// Email used for the waitlist lookup: the signed-in user's, or the one
    /// remembered from a previous submission
    pub email: RwSignal<Option<String>>,
    pub status: RwSignal<StatusReconciler>,
}

impl SessionContext {
    pub fn identity(&self) -> Option<Identity> {
        match self.state.get() {
            AuthState::Authenticated(session) => Some(session.identity),
            _ => None,
        }
    }

    /// Uses `with_untracked`, for event handlers and async tasks
    pub fn identity_untracked(&self) -> Option<Identity> {
        self.state.with_untracked(|state| match state {
            AuthState::Authenticated(session) => Some(session.identity.clone()),
            _ => None,
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state.get(), AuthState::Loading)
    }

    pub fn is_on_waitlist(&self) -> bool {
        self.status.with(|status| status.is_on_waitlist())
    }

    pub fn is_checking(&self) -> bool {
        self.status.with(|status| status.is_checking())
    }

    /// API client acting as the current user
    pub fn client(&self) -> ApiClient {
        let token = self.state.with_untracked(|state| match state {
            AuthState::Authenticated(session) => session.access_token.clone(),
            _ => None,
        });
        ApiClient::with_token(token)
    }

    /// Remember an email that just joined the waitlist
    pub fn mark_registered(&self, email: &str) {
        if !email.is_empty() {
            LocalStore.save_email(email);
            self.email.set(Some(email.to_string()));
        }
        self.status.update(|status| status.mark_registered());
    }

    /// Create an account. Returns the session even when it still waits for
    /// e-mail confirmation; only active sessions sign the user in.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Session, AuthError> {
        let profile = SignUpProfile {
            full_name: full_name.to_string(),
        };
        let session = ApiClient::new().sign_up(email, password, &profile).await?;
        self.establish(&session);
        Ok(session)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = ApiClient::new().sign_in(email, password).await?;
        self.establish(&session);
        Ok(session)
    }

    /// Drop the session locally, then revoke it remotely
    pub async fn sign_out(&self) {
        let token = self.state.with_untracked(|state| match state {
            AuthState::Authenticated(session) => session.access_token.clone(),
            _ => None,
        });

        LocalStore.clear_session();
        self.state.set(AuthState::Unauthenticated);
        self.email.set(LocalStore.load_email());
        self.status.update(|status| status.clear());

        if let Some(token) = token {
            if let Err(err) = ApiClient::new().sign_out(&token).await {
                leptos::logging::error!("Sign-out failed: {}", err);
            }
        }
    }

    fn establish(&self, session: &Session) {
        if !session.is_active() {
            return;
        }
        LocalStore.save_session(session);
        let same_email = self.email.with_untracked(|email| {
            email
                .as_deref()
                .is_some_and(|email| session.identity.has_email(email))
        });
        // Same account as the remembered email, already reconciled
        if !same_email {
            self.email.set(Some(session.identity.email.clone()));
        }
        self.state.set(AuthState::Authenticated(session.clone()));
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Unauthenticated on both server and client to avoid a hydration mismatch
    let ctx = SessionContext {
        state: RwSignal::new(AuthState::Unauthenticated),
        email: RwSignal::new(None),
        status: RwSignal::new(StatusReconciler::new()),
    };

    #[cfg(not(feature = "ssr"))]
    {
        // Restore after hydration
        Effect::new(move |_| {
            ctx.email.set(LocalStore.load_email());

            let Some(saved) = LocalStore.load_session() else {
                ctx.state.set(AuthState::Unauthenticated);
                return;
            };
            let Some(token) = saved.access_token.clone() else {
                LocalStore.clear_session();
                ctx.state.set(AuthState::Unauthenticated);
                return;
            };

            ctx.state.set(AuthState::Loading);
            spawn_local(async move {
                // Always verify with the server, the saved copy may be stale
                match ApiClient::new().current_identity(&token).await {
                    Ok(identity) => {
                        let session = Session {
                            identity,
                            access_token: Some(token),
                        };
                        ctx.establish(&session);
                    }
                    Err(err) => {
                        leptos::logging::log!("Saved session rejected: {}", err);
                        LocalStore.clear_session();
                        ctx.state.set(AuthState::Unauthenticated);
                    }
                }
            });
        });

        // Reconcile the waitlist flag on every email change
        Effect::new(move |_| {
            let Some(email) = ctx.email.get() else {
                return;
            };
            let Some(key) = ctx.status.try_update(|status| status.begin(&email)).flatten() else {
                return;
            };
            let client = ctx.client();
            spawn_local(async move {
                use crate::core::WaitlistGateway;

                let outcome = client.find_waitlist_entry(&key).await;
                ctx.status.update(|status| status.apply(outcome));
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
