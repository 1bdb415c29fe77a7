//! Persisted client values
//!
//! The page remembers two things between visits: the last email that joined
//! the waitlist and the current auth session. Both go through [`ClientStore`]
//! so the session context never touches browser storage directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::identity::Session;

/// Key of the last email that joined the waitlist
pub const STORAGE_KEY_EMAIL: &str = "userEmail";
/// Key of the serialized auth session
pub const STORAGE_KEY_SESSION: &str = "axiom_session";

/// String key/value storage
pub trait ClientStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn load_email(&self) -> Option<String> {
        self.get(STORAGE_KEY_EMAIL).filter(|e| !e.is_empty())
    }

    fn save_email(&self, email: &str) {
        self.set(STORAGE_KEY_EMAIL, email);
    }

    fn load_session(&self) -> Option<Session> {
        let json = self.get(STORAGE_KEY_SESSION)?;
        serde_json::from_str(&json).ok()
    }

    fn save_session(&self, session: &Session) {
        if let Ok(json) = serde_json::to_string(session) {
            self.set(STORAGE_KEY_SESSION, &json);
        }
    }

    fn clear_session(&self) {
        self.remove(STORAGE_KEY_SESSION);
    }
}

/// In-memory store used during server rendering and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::Identity;
    use uuid::Uuid;

    #[test]
    fn test_email_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load_email(), None);

        store.save_email("ada@example.com");
        assert_eq!(store.load_email(), Some("ada@example.com".to_string()));
    }

    #[test]
    fn test_empty_email_reads_as_none() {
        let store = MemoryStore::new();
        store.save_email("");
        assert_eq!(store.load_email(), None);
    }

    #[test]
    fn test_session_round_trip_and_clear() {
        let store = MemoryStore::new();
        let session = Session {
            identity: Identity {
                id: Uuid::new_v4(),
                email: "ada@example.com".to_string(),
            },
            access_token: Some("token".to_string()),
        };

        store.save_session(&session);
        assert_eq!(store.load_session(), Some(session));

        store.clear_session();
        assert_eq!(store.load_session(), None);
    }

    #[test]
    fn test_corrupt_session_is_ignored() {
        let store = MemoryStore::new();
        store.set(STORAGE_KEY_SESSION, "{not json");
        assert_eq!(store.load_session(), None);
    }
}
