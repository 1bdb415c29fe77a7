//! Remote store boundary used by the form controller and the status reconciler

use uuid::Uuid;

use super::record::{WaitlistEntry, WaitlistRecord};

/// Errors from the remote waitlist store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Not signed in")]
    Unauthorized,
}

/// Reads and writes against the `waitlist` and `profiles` tables
#[allow(async_fn_in_trait)]
pub trait WaitlistGateway {
    /// `insert(waitlist, record)`
    async fn insert_waitlist(&self, record: &WaitlistRecord) -> Result<(), GatewayError>;

    /// `update(profiles, {is_on_waitlist: true}, user_id = eq.<id>)`
    async fn mark_profile_on_waitlist(&self, user_id: Uuid) -> Result<(), GatewayError>;

    /// `select(waitlist, id, email = eq.<email>)`, email already normalized
    async fn find_waitlist_entry(&self, email: &str) -> Result<Option<WaitlistEntry>, GatewayError>;
}
