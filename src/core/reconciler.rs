//! Waitlist status reconciliation
//!
//! Derives the "already on the waitlist" flag from the remote store whenever
//! the identifying email changes. Lookup failures never flip the flag, so the
//! page falls back to the join flow instead of blocking.

use leptos::logging::{error, log};

use super::gateway::{GatewayError, WaitlistGateway};
use super::record::WaitlistEntry;

/// Key used to look up an email on the waitlist
pub fn lookup_key(email: &str) -> Option<String> {
    (!email.is_empty()).then(|| email.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReconciler {
    on_waitlist: bool,
    checking: bool,
}

impl StatusReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on_waitlist(&self) -> bool {
        self.on_waitlist
    }

    pub fn is_checking(&self) -> bool {
        self.checking
    }

    /// Start a lookup, returning the normalized key or `None` for an empty email
    pub fn begin(&mut self, email: &str) -> Option<String> {
        let key = lookup_key(email)?;
        log!("Checking waitlist status for: {}", key);
        self.checking = true;
        Some(key)
    }

    /// Apply a lookup result
    pub fn apply(&mut self, outcome: Result<Option<WaitlistEntry>, GatewayError>) {
        self.checking = false;
        match outcome {
            Ok(entry) => {
                self.on_waitlist = entry.is_some();
                log!("Waitlist status result: {}", self.on_waitlist);
            }
            Err(err) => error!("Error checking waitlist status: {}", err),
        }
    }

    /// Mark as registered after a successful submission
    pub fn mark_registered(&mut self) {
        self.on_waitlist = true;
    }

    /// Forget the flag, e.g. after sign-out
    pub fn clear(&mut self) {
        self.on_waitlist = false;
        self.checking = false;
    }

    pub async fn check_status<G: WaitlistGateway>(&mut self, gateway: &G, email: &str) {
        let Some(key) = self.begin(email) else {
            return;
        };
        let outcome = gateway.find_waitlist_entry(&key).await;
        self.apply(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_key_lowercases() {
        assert_eq!(
            lookup_key("User@Example.com"),
            Some("user@example.com".to_string())
        );
        assert_eq!(lookup_key(""), None);
    }

    #[test]
    fn test_begin_ignores_empty_email() {
        let mut reconciler = StatusReconciler::new();
        assert!(reconciler.begin("").is_none());
        assert!(!reconciler.is_checking());
    }

    #[test]
    fn test_apply_found_and_not_found() {
        let mut reconciler = StatusReconciler::new();
        reconciler.begin("a@b.co");
        reconciler.apply(Ok(Some(WaitlistEntry { id: serde_json::json!(1) })));
        assert!(reconciler.is_on_waitlist());
        assert!(!reconciler.is_checking());

        reconciler.begin("a@b.co");
        reconciler.apply(Ok(None));
        assert!(!reconciler.is_on_waitlist());
    }

    #[test]
    fn test_apply_error_keeps_previous_flag() {
        let mut reconciler = StatusReconciler::new();
        reconciler.mark_registered();

        reconciler.begin("a@b.co");
        reconciler.apply(Err(GatewayError::Transport("timeout".into())));

        assert!(reconciler.is_on_waitlist());
        assert!(!reconciler.is_checking());
    }

    #[test]
    fn test_clear_resets_flag() {
        let mut reconciler = StatusReconciler::new();
        reconciler.mark_registered();
        reconciler.clear();
        assert!(!reconciler.is_on_waitlist());
    }
}
