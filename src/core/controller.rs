//! Waitlist form controller
//!
//! Owns the form values, the page pointer and the in-flight flag of one form
//! instance. Submission is split in two halves so a reactive owner can release
//! its borrow while the remote calls are pending:
//!
//! 1. [`FormController::begin_submit`] checks the guard, validates and builds the row
//! 2. [`Submission::send`] performs the insert and the optional profile update
//! 3. [`FormController::finish_submit`] clears the flag and resets on success

use leptos::logging::error;
use uuid::Uuid;

use super::form::{FormState, FormVariant, StepPointer, WaitlistField};
use super::gateway::{GatewayError, WaitlistGateway};
use super::identity::Identity;
use super::notification::Notification;
use super::record::WaitlistRecord;

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("You must be logged in to join the waitlist.")]
    NotSignedIn,

    #[error("Missing required fields: {0:?}")]
    MissingFields(Vec<WaitlistField>),

    #[error(transparent)]
    Remote(#[from] GatewayError),
}

impl SubmitError {
    /// Notification for the user, `None` when nothing should be shown
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitError::InFlight => None,
            SubmitError::NotSignedIn => Some(Notification::error("Error", self.to_string())),
            SubmitError::MissingFields(fields) => {
                let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
                Some(Notification::error(
                    "Missing Fields",
                    format!("Please fill in all required fields: {}.", labels.join(", ")),
                ))
            }
            SubmitError::Remote(_) => Some(Notification::error(
                "Error",
                "Something went wrong. Please try again.",
            )),
        }
    }
}

/// Validated row ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: WaitlistRecord,
    /// Profile to flag after the insert
    pub profile_user: Option<Uuid>,
}

impl Submission {
    /// Insert the row, then flag the profile. The two writes are not atomic.
    pub async fn send<G: WaitlistGateway>(&self, gateway: &G) -> Result<(), GatewayError> {
        gateway.insert_waitlist(&self.record).await?;
        if let Some(user_id) = self.profile_user {
            gateway.mark_profile_on_waitlist(user_id).await?;
        }
        Ok(())
    }
}

/// State of one waitlist form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    variant: FormVariant,
    state: FormState,
    step: Option<StepPointer>,
    loading: bool,
}

impl FormController {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            state: FormState::new(),
            step: variant.step_count().map(StepPointer::new),
            loading: false,
        }
    }

    /// New controller with the email prefilled from the signed-in user
    pub fn for_identity(variant: FormVariant, identity: Option<&Identity>) -> Self {
        let mut controller = Self::new(variant);
        controller.prefill_identity(identity);
        controller
    }

    /// Copy the account email into the form
    pub fn prefill_identity(&mut self, identity: Option<&Identity>) {
        if let Some(identity) = identity {
            self.update_field(WaitlistField::Email, identity.email.clone());
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, field: WaitlistField) -> &str {
        self.state.get(field)
    }

    pub fn update_field(&mut self, field: WaitlistField, value: impl Into<String>) {
        self.state.set(field, value);
    }

    pub fn step(&self) -> Option<StepPointer> {
        self.step
    }

    /// Current page, 1 for single-page variants
    pub fn current_step(&self) -> u8 {
        self.step.map_or(1, |s| s.current())
    }

    pub fn is_final_step(&self) -> bool {
        self.step.is_none_or(|s| s.is_last())
    }

    pub fn advance_step(&mut self) {
        if let Some(step) = self.step.as_mut() {
            step.advance();
        }
    }

    pub fn retreat_step(&mut self) {
        if let Some(step) = self.step.as_mut() {
            step.retreat();
        }
    }

    /// Whether every field required on `step` is filled
    pub fn can_advance(&self, step: u8) -> bool {
        self.variant
            .required_for_step(step, &self.state)
            .into_iter()
            .all(|field| self.state.is_filled(field))
    }

    /// Required fields that are still empty, across all pages
    pub fn missing_fields(&self) -> Vec<WaitlistField> {
        self.variant
            .required_fields(&self.state)
            .into_iter()
            .filter(|field| !self.state.is_filled(*field))
            .collect()
    }

    pub fn is_required(&self, field: WaitlistField) -> bool {
        self.variant.is_required(field, &self.state)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Clear every field and go back to the first page. A pending
    /// submission stays in flight until [`FormController::finish_submit`].
    pub fn reset(&mut self) {
        self.state.clear();
        self.step = self.variant.step_count().map(StepPointer::new);
    }

    /// Validate and mark the form as in flight
    pub fn begin_submit(&mut self, identity: Option<&Identity>) -> Result<Submission, SubmitError> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }
        if self.variant.requires_identity() && identity.is_none() {
            return Err(SubmitError::NotSignedIn);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        let record = WaitlistRecord::from_form(self.variant, &self.state, identity.map(|i| i.id))
            .ok_or(SubmitError::NotSignedIn)?;

        self.loading = true;
        Ok(Submission {
            profile_user: record.user_id(),
            record,
        })
    }

    /// Record the outcome of [`Submission::send`]. Values survive a failure.
    pub fn finish_submit(&mut self, result: Result<(), GatewayError>) -> Result<(), SubmitError> {
        self.loading = false;
        match result {
            Ok(()) => {
                self.reset();
                Ok(())
            }
            Err(err) => {
                error!("Error submitting waitlist form: {}", err);
                Err(SubmitError::Remote(err))
            }
        }
    }

    /// Full submission; `on_complete` runs once after both writes succeed
    pub async fn submit<G: WaitlistGateway>(
        &mut self,
        gateway: &G,
        identity: Option<&Identity>,
        on_complete: impl FnOnce(),
    ) -> Result<(), SubmitError> {
        let submission = self.begin_submit(identity)?;
        let result = submission.send(gateway).await;
        self.finish_submit(result)?;
        on_complete();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WaitlistField::*;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_update_field_touches_only_that_field() {
        let mut controller = FormController::new(FormVariant::Staged);
        let before = controller.state().clone();

        controller.update_field(PainPoints, "manual exports");

        assert_eq!(controller.field(PainPoints), "manual exports");
        for (field, value) in controller.state().iter() {
            if field != PainPoints {
                assert_eq!(value, before.get(field));
            }
        }
    }

    #[test]
    fn test_can_advance_step_two_needs_all_three() {
        let mut controller = FormController::new(FormVariant::Staged);
        controller.update_field(PrimaryUseCase, "data_processing");
        controller.update_field(CompanySize, "2-10");
        assert!(!controller.can_advance(2));

        controller.update_field(FirstTask, "Invoice triage");
        assert!(controller.can_advance(2));

        controller.update_field(CompanySize, "");
        assert!(!controller.can_advance(2));
    }

    #[test]
    fn test_step_boundaries_are_idempotent() {
        let mut controller = FormController::new(FormVariant::Staged);
        controller.retreat_step();
        assert_eq!(controller.current_step(), 1);

        controller.advance_step();
        controller.advance_step();
        controller.advance_step();
        assert_eq!(controller.current_step(), 3);
        assert!(controller.is_final_step());
    }

    #[test]
    fn test_single_page_variant_has_no_step_pointer() {
        let mut controller = FormController::new(FormVariant::Compact);
        assert!(controller.step().is_none());
        controller.advance_step();
        assert_eq!(controller.current_step(), 1);
        assert!(controller.is_final_step());
    }

    #[test]
    fn test_for_identity_prefills_email() {
        let user = identity();
        let controller = FormController::for_identity(FormVariant::Staged, Some(&user));
        assert_eq!(controller.field(Email), "ada@example.com");
    }

    #[test]
    fn test_begin_submit_requires_identity_for_survey() {
        let mut controller = FormController::new(FormVariant::Compact);
        assert_eq!(
            controller.begin_submit(None),
            Err(SubmitError::NotSignedIn)
        );
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_begin_submit_reports_missing_fields() {
        let user = identity();
        let mut controller = FormController::for_identity(FormVariant::Compact, Some(&user));
        controller.update_field(FullName, "Ada");

        match controller.begin_submit(Some(&user)) {
            Err(SubmitError::MissingFields(fields)) => {
                assert_eq!(fields, vec![PrimaryUseCase, CompanySize, FirstTask]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(controller.field(FullName), "Ada");
    }

    #[test]
    fn test_begin_submit_guards_in_flight() {
        let mut controller = FormController::new(FormVariant::Typed);
        controller.update_field(FullName, "Ada");
        controller.update_field(Email, "ada@example.com");
        controller.update_field(EntryType, "individual");
        controller.update_field(JobTitle, "Engineer");
        controller.update_field(PrimaryUseCase, "other");

        assert!(controller.begin_submit(None).is_ok());
        assert!(controller.is_loading());
        assert_eq!(controller.begin_submit(None), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_finish_submit_failure_keeps_values() {
        let mut controller = FormController::new(FormVariant::Typed);
        controller.update_field(FullName, "Ada");
        controller.loading = true;

        let result = controller.finish_submit(Err(GatewayError::Transport("offline".into())));

        assert!(matches!(result, Err(SubmitError::Remote(_))));
        assert!(!controller.is_loading());
        assert_eq!(controller.field(FullName), "Ada");
    }

    #[test]
    fn test_missing_fields_notification_lists_labels() {
        let notification = SubmitError::MissingFields(vec![JobTitle])
            .notification()
            .unwrap();
        assert_eq!(notification.title, "Missing Fields");
        assert!(notification.message.contains("Job Title"));
        assert!(SubmitError::InFlight.notification().is_none());
    }
}
