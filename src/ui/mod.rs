pub mod auth_modal;
pub mod browser;
pub mod client;
pub mod common;
pub mod icon;
pub mod local_storage;
pub mod notifications;
pub mod pages;
pub mod sections;
pub mod session;
pub mod waitlist_form;

pub use auth_modal::AuthModal;
pub use client::ApiClient;
pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, provide_notifications, use_notifications};
pub use session::{AuthState, SessionContext, provide_session_context, use_session_context};
pub use waitlist_form::WaitlistFormModal;
