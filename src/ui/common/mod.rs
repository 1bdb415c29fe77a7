//! Shared UI primitives used by the modals and sections

pub mod form;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use modal::BaseModal;
pub use spinner::{InlineSpinner, LoadingButton};
