//! Core domain models and business logic for the waitlist flow

pub mod config;
pub mod content;
pub mod controller;
pub mod form;
pub mod gateway;
pub mod identity;
pub mod notification;
pub mod reconciler;
pub mod record;
pub mod storage;
#[cfg(test)]
mod tests;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod supabase;

pub use config::{Config, JoinRoute, LandingConfig, LandingVariant};
pub use controller::{FormController, SubmitError, Submission};
pub use form::{EntryType, FormState, FormVariant, StepPointer, WaitlistField};
pub use gateway::{GatewayError, WaitlistGateway};
pub use identity::{AuthError, Identity, IdentityProvider, Session, SignUpProfile};
pub use notification::{Notification, NotificationType};
pub use reconciler::StatusReconciler;
pub use record::{WaitlistEntry, WaitlistRecord};
pub use storage::{ClientStore, MemoryStore};
