#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use uuid::Uuid;

    use crate::core::{
        FormController, FormVariant, GatewayError, Identity, StatusReconciler, SubmitError,
        WaitlistEntry, WaitlistField, WaitlistGateway, WaitlistRecord,
    };

    /// Gateway double that records every call
    #[derive(Default)]
    struct RecordingGateway {
        inserts: RefCell<Vec<WaitlistRecord>>,
        profile_updates: RefCell<Vec<Uuid>>,
        lookups: RefCell<Vec<String>>,
        fail_insert: bool,
        fail_profile: bool,
        lookup_result: RefCell<Option<Result<Option<WaitlistEntry>, GatewayError>>>,
    }

    impl RecordingGateway {
        fn with_lookup(result: Result<Option<WaitlistEntry>, GatewayError>) -> Self {
            Self {
                lookup_result: RefCell::new(Some(result)),
                ..Default::default()
            }
        }

        fn remote_calls(&self) -> usize {
            self.inserts.borrow().len() + self.profile_updates.borrow().len()
        }
    }

    impl WaitlistGateway for RecordingGateway {
        async fn insert_waitlist(&self, record: &WaitlistRecord) -> Result<(), GatewayError> {
            self.inserts.borrow_mut().push(record.clone());
            if self.fail_insert {
                return Err(GatewayError::Transport("connection reset".to_string()));
            }
            Ok(())
        }

        async fn mark_profile_on_waitlist(&self, user_id: Uuid) -> Result<(), GatewayError> {
            self.profile_updates.borrow_mut().push(user_id);
            if self.fail_profile {
                return Err(GatewayError::Rejected {
                    status: 400,
                    message: "profile missing".to_string(),
                });
            }
            Ok(())
        }

        async fn find_waitlist_entry(
            &self,
            email: &str,
        ) -> Result<Option<WaitlistEntry>, GatewayError> {
            self.lookups.borrow_mut().push(email.to_string());
            self.lookup_result.borrow_mut().take().unwrap_or(Ok(None))
        }
    }

    fn user() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
        }
    }

    fn typed_controller(job_role: &str) -> FormController {
        let mut controller = FormController::new(FormVariant::Typed);
        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        controller.update_field(WaitlistField::Email, "Ada@Example.com");
        controller.update_field(WaitlistField::EntryType, "individual");
        controller.update_field(WaitlistField::JobTitle, job_role);
        controller.update_field(WaitlistField::PrimaryUseCase, "workflow_automation");
        controller
    }

    #[tokio::test]
    async fn test_individual_without_job_role_makes_no_remote_calls() {
        let gateway = RecordingGateway::default();
        let mut controller = typed_controller("");
        let completed = Cell::new(0);

        let result = controller
            .submit(&gateway, None, || completed.set(completed.get() + 1))
            .await;

        assert_eq!(
            result,
            Err(SubmitError::MissingFields(vec![WaitlistField::JobTitle]))
        );
        assert_eq!(gateway.remote_calls(), 0);
        assert_eq!(completed.get(), 0);
        assert_eq!(controller.field(WaitlistField::FullName), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_individual_with_job_role_inserts_once_with_null_company() {
        let gateway = RecordingGateway::default();
        let mut controller = typed_controller("Engineer");
        controller.update_field(WaitlistField::Company, "Ignored Ltd");

        controller.submit(&gateway, None, || {}).await.unwrap();

        let inserts = gateway.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        let json = serde_json::to_value(&inserts[0]).unwrap();
        assert_eq!(json["company"], serde_json::Value::Null);
        assert_eq!(json["job_role"], "Engineer");
        assert!(gateway.profile_updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_staged_end_to_end() {
        let gateway = RecordingGateway::default();
        let identity = user();
        let mut controller = FormController::for_identity(FormVariant::Staged, Some(&identity));
        let completed = Cell::new(0);

        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        assert!(controller.can_advance(1));
        controller.advance_step();

        controller.update_field(WaitlistField::PrimaryUseCase, "data_processing");
        controller.update_field(WaitlistField::CompanySize, "solo");
        controller.update_field(WaitlistField::FirstTask, "Reconcile invoices");
        assert!(controller.can_advance(2));
        controller.advance_step();
        assert_eq!(controller.current_step(), 3);

        controller
            .submit(&gateway, Some(&identity), || completed.set(completed.get() + 1))
            .await
            .unwrap();

        assert_eq!(gateway.inserts.borrow().len(), 1);
        assert_eq!(*gateway.profile_updates.borrow(), vec![identity.id]);
        assert!(controller.state().is_empty());
        assert_eq!(controller.current_step(), 1);
        assert!(!controller.is_loading());
        assert_eq!(completed.get(), 1);

        match &gateway.inserts.borrow()[0] {
            WaitlistRecord::Survey(record) => {
                assert_eq!(record.user_id, identity.id);
                assert_eq!(record.urgency, "medium");
                assert_eq!(record.pain_points, "");
            }
            WaitlistRecord::Typed(_) => panic!("expected survey record"),
        }
    }

    #[tokio::test]
    async fn test_insert_failure_preserves_state_and_allows_retry() {
        let identity = user();
        let failing = RecordingGateway {
            fail_insert: true,
            ..Default::default()
        };
        let mut controller = FormController::for_identity(FormVariant::Compact, Some(&identity));
        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        controller.update_field(WaitlistField::PrimaryUseCase, "other");
        controller.update_field(WaitlistField::CompanySize, "individual");
        controller.update_field(WaitlistField::FirstTask, "Email triage");

        let result = controller.submit(&failing, Some(&identity), || {}).await;

        assert!(matches!(result, Err(SubmitError::Remote(_))));
        assert_eq!(failing.inserts.borrow().len(), 1);
        assert!(failing.profile_updates.borrow().is_empty());
        assert_eq!(controller.field(WaitlistField::FirstTask), "Email triage");
        assert!(!controller.is_loading());

        let healthy = RecordingGateway::default();
        controller.submit(&healthy, Some(&identity), || {}).await.unwrap();
        assert_eq!(healthy.inserts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_failure_after_insert_is_reported() {
        let identity = user();
        let gateway = RecordingGateway {
            fail_profile: true,
            ..Default::default()
        };
        let mut controller = FormController::for_identity(FormVariant::Compact, Some(&identity));
        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        controller.update_field(WaitlistField::PrimaryUseCase, "other");
        controller.update_field(WaitlistField::CompanySize, "individual");
        controller.update_field(WaitlistField::FirstTask, "Email triage");

        let result = controller.submit(&gateway, Some(&identity), || {}).await;

        assert!(matches!(result, Err(SubmitError::Remote(_))));
        assert_eq!(gateway.inserts.borrow().len(), 1);
        assert_eq!(gateway.profile_updates.borrow().len(), 1);
        assert!(!controller.state().is_empty());
    }

    #[tokio::test]
    async fn test_closing_form_keeps_pending_submission_in_flight() {
        let gateway = RecordingGateway::default();
        let mut controller = typed_controller("Engineer");

        let first = controller.begin_submit(None).unwrap();
        // Modal closed while the insert is pending
        controller.reset();
        assert!(controller.is_loading());
        assert!(controller.state().is_empty());

        // Reopened and filled in again
        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        controller.update_field(WaitlistField::Email, "ada@example.com");
        controller.update_field(WaitlistField::EntryType, "individual");
        controller.update_field(WaitlistField::JobTitle, "Engineer");
        controller.update_field(WaitlistField::PrimaryUseCase, "other");
        assert_eq!(controller.begin_submit(None), Err(SubmitError::InFlight));

        let result = first.send(&gateway).await;
        assert_eq!(controller.finish_submit(result), Ok(()));
        assert_eq!(gateway.inserts.borrow().len(), 1);
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_reset_after_failure_allows_retry() {
        let mut controller = typed_controller("Engineer");
        controller.begin_submit(None).unwrap();

        let result = controller.finish_submit(Err(GatewayError::Transport("timeout".into())));
        assert!(result.is_err());

        controller.reset();
        assert!(!controller.is_loading());
        controller.update_field(WaitlistField::FullName, "Ada Lovelace");
        assert!(matches!(
            controller.begin_submit(None),
            Err(SubmitError::MissingFields(_))
        ));
    }

    #[tokio::test]
    async fn test_survey_without_identity_is_rejected_before_remote_calls() {
        let gateway = RecordingGateway::default();
        let mut controller = FormController::new(FormVariant::Staged);

        let result = controller.submit(&gateway, None, || {}).await;

        assert_eq!(result, Err(SubmitError::NotSignedIn));
        assert_eq!(gateway.remote_calls(), 0);
    }

    #[tokio::test]
    async fn test_check_status_queries_lowercased_email() {
        let gateway = RecordingGateway::with_lookup(Ok(Some(WaitlistEntry {
            id: serde_json::json!(17),
        })));
        let mut reconciler = StatusReconciler::new();

        reconciler.check_status(&gateway, "User@Example.com").await;

        assert_eq!(*gateway.lookups.borrow(), vec!["user@example.com".to_string()]);
        assert!(reconciler.is_on_waitlist());
    }

    #[tokio::test]
    async fn test_check_status_not_found_clears_flag() {
        let gateway = RecordingGateway::with_lookup(Ok(None));
        let mut reconciler = StatusReconciler::new();
        reconciler.mark_registered();

        reconciler.check_status(&gateway, "user@example.com").await;

        assert!(!reconciler.is_on_waitlist());
    }

    #[tokio::test]
    async fn test_check_status_transport_error_keeps_flag() {
        let gateway =
            RecordingGateway::with_lookup(Err(GatewayError::Transport("timeout".to_string())));
        let mut reconciler = StatusReconciler::new();
        reconciler.mark_registered();

        reconciler.check_status(&gateway, "user@example.com").await;

        assert!(reconciler.is_on_waitlist());
        assert!(!reconciler.is_checking());
    }

    #[tokio::test]
    async fn test_check_status_empty_email_is_noop() {
        let gateway = RecordingGateway::default();
        let mut reconciler = StatusReconciler::new();

        reconciler.check_status(&gateway, "").await;

        assert!(gateway.lookups.borrow().is_empty());
        assert!(!reconciler.is_on_waitlist());
    }
}
