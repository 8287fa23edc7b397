// ============================================================================
// SESSION STORE - the one owner of the persisted admin token
// ============================================================================

use std::rc::Rc;
use crate::errors::ClientResult;
use crate::platform::KeyValueStore;

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Stored token, read fresh on every call
    pub fn token(&self) -> Option<String> {
        self.storage.get(&self.key)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn save_token(&self, token: &str) -> ClientResult<()> {
        self.storage.set(&self.key, token)
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn presence_means_authenticated() {
        let store = SessionStore::new(Rc::new(MemoryStore::default()), "lorian_admin_token");
        assert!(!store.is_authenticated());

        store.save_token("abc").unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn uses_its_own_key() {
        let storage = Rc::new(MemoryStore::with("other", "x"));
        let store = SessionStore::new(storage.clone(), "lorian_admin_token");
        assert!(!store.is_authenticated());

        store.save_token("t").unwrap();
        assert_eq!(storage.get("lorian_admin_token").as_deref(), Some("t"));
        assert_eq!(storage.get("other").as_deref(), Some("x"));
    }
}
