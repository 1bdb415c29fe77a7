//! Sign-up / sign-in modal
//!
//! Shown when a visitor wants to join but the active form needs an account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{AuthError, Notification};
use crate::ui::common::{BaseModal, FormField, LoadingButton};
use crate::ui::notifications::use_notifications;
use crate::ui::session::use_session_context;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Check the credentials before any request is made
pub fn validate_credentials(
    sign_up: bool,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), Notification> {
    if email.is_empty() || password.is_empty() {
        return Err(Notification::error(
            "Missing Fields",
            "Please fill in all required fields.",
        ));
    }
    if sign_up && full_name.is_empty() {
        return Err(Notification::error(
            "Missing Name",
            "Please enter your full name.",
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Notification::error(
            "Password Too Short",
            format!("Password must be at least {} characters.", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

/// Toast for a finished auth request
pub fn auth_outcome(sign_up: bool, result: &Result<(), AuthError>) -> Notification {
    match result {
        Ok(()) if sign_up => Notification::success(
            "Account Created!",
            "Please check your email to verify your account.",
        ),
        Ok(()) => Notification::success("Welcome Back!", "You're now signed in."),
        Err(AuthError::Network(_)) => {
            Notification::error("Error", "Something went wrong. Please try again.")
        }
        Err(err) => Notification::error("Authentication Error", err.user_message()),
    }
}

#[component]
pub fn AuthModal(
    is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Runs once a session is active
    #[prop(optional)]
    on_authenticated: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session_context();
    let notifications = use_notifications();

    let is_sign_up = RwSignal::new(true);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let reset = move || {
        full_name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        loading.set(false);
    };

    let close = Callback::new(move |_| {
        reset();
        on_close.run(());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let sign_up = is_sign_up.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let name_val = full_name.get_untracked();

        if let Err(notification) = validate_credentials(sign_up, &email_val, &password_val, &name_val) {
            notifications.notify(notification);
            return;
        }

        loading.set(true);
        spawn_local(async move {
            let result = if sign_up {
                session.sign_up(&email_val, &password_val, &name_val).await
            } else {
                session.sign_in(&email_val, &password_val).await
            };
            loading.set(false);

            let active = matches!(&result, Ok(s) if s.is_active());
            let outcome = result.map(|_| ());
            if let Err(err) = &outcome {
                leptos::logging::error!("Auth error: {}", err);
            }
            notifications.notify(auth_outcome(sign_up, &outcome));

            if outcome.is_ok() {
                close.run(());
                if active {
                    if let Some(callback) = on_authenticated {
                        callback.run(());
                    }
                }
            }
        });
    };

    let title = Signal::derive(move || {
        if is_sign_up.get() {
            "Join the Axiom Waitlist".to_string()
        } else {
            "Welcome Back".to_string()
        }
    });

    view! {
        <BaseModal title=title is_open=is_open on_close=close>
            <form on:submit=on_submit class="space-y-4">
                <Show when=move || is_sign_up.get()>
                    <FormField
                        label="Full Name"
                        required=true
                        placeholder="Enter your full name"
                        autocomplete="name"
                        value=full_name.into()
                        on_input=Callback::new(move |v| full_name.set(v))
                        disabled=loading
                    />
                </Show>

                <FormField
                    label="Email"
                    required=true
                    input_type="email"
                    placeholder="Enter your email"
                    autocomplete="email"
                    value=email.into()
                    on_input=Callback::new(move |v| email.set(v))
                    disabled=loading
                />

                <FormField
                    label="Password"
                    required=true
                    input_type="password"
                    placeholder="Enter your password"
                    autocomplete="current-password"
                    value=password.into()
                    on_input=Callback::new(move |v| password.set(v))
                    disabled=loading
                />

                <LoadingButton
                    loading=loading.into()
                    text=Signal::derive(move || {
                        if is_sign_up.get() { "Create Account & Join Waitlist" } else { "Sign In" }.to_string()
                    })
                    loading_text=Signal::derive(move || {
                        if is_sign_up.get() { "Creating Account..." } else { "Signing In..." }.to_string()
                    })
                />

                <div class="text-center pt-4 border-t border-gray-200">
                    <button
                        type="button"
                        class="text-sm text-emerald-600 hover:text-emerald-700 font-medium"
                        disabled=move || loading.get()
                        on:click=move |_| {
                            is_sign_up.update(|v| *v = !*v);
                            reset();
                        }
                    >
                        {move || if is_sign_up.get() {
                            "Already have an account? Sign in"
                        } else {
                            "Need an account? Sign up"
                        }}
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email_or_password() {
        let err = validate_credentials(false, "", "secret1", "").unwrap_err();
        assert_eq!(err.title, "Missing Fields");

        let err = validate_credentials(true, "ada@example.com", "", "Ada").unwrap_err();
        assert_eq!(err.title, "Missing Fields");
    }

    #[test]
    fn test_sign_up_needs_name() {
        let err = validate_credentials(true, "ada@example.com", "secret1", "").unwrap_err();
        assert_eq!(err.title, "Missing Name");
        assert!(validate_credentials(false, "ada@example.com", "secret1", "").is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let err = validate_credentials(false, "ada@example.com", "12345", "").unwrap_err();
        assert!(err.is_error());
        assert!(validate_credentials(false, "ada@example.com", "123456", "").is_ok());
    }

    #[test]
    fn test_outcome_copy() {
        assert_eq!(auth_outcome(true, &Ok(())).title, "Account Created!");
        assert_eq!(auth_outcome(false, &Ok(())).title, "Welcome Back!");

        let failed = auth_outcome(false, &Err(AuthError::InvalidCredentials));
        assert_eq!(failed.title, "Authentication Error");
        assert_eq!(failed.message, "Invalid email or password. Please try again.");

        let offline = auth_outcome(true, &Err(AuthError::Network("offline".into())));
        assert_eq!(offline.message, "Something went wrong. Please try again.");
    }
}
