// ============================================================================
// SESSION PERSISTENCE - Credencial e identidad en storage duradero
// ============================================================================
// Los stores no tocan el storage: esta capa la invocan los viewmodels y el
// interceptor de 401 junto a las acciones del SessionState.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::UserProfile;
use crate::utils::storage::{save_to_storage, KeyValueStorage};

#[derive(Clone)]
pub struct SessionPersistence {
    storage: Rc<dyn KeyValueStorage>,
    token_key: String,
    user_key: String,
}

impl SessionPersistence {
    pub fn new(storage: Rc<dyn KeyValueStorage>, config: &AppConfig) -> Self {
        Self {
            storage,
            token_key: config.token_storage_key.clone(),
            user_key: config.user_storage_key.clone(),
        }
    }

    /// Credencial guardada por una sesión anterior (string opaco, sin JSON)
    pub fn load_credential(&self) -> Option<String> {
        match self.storage.get_item(&self.token_key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ No se pudo leer la credencial: {}", e);
                None
            }
        }
    }

    pub fn save_credential(&self, token: &str) -> Result<(), String> {
        self.storage.set_item(&self.token_key, token)
    }

    pub fn clear_credential(&self) -> Result<(), String> {
        self.storage.remove_item(&self.token_key)
    }

    pub fn save_user(&self, user: &UserProfile) -> Result<(), String> {
        save_to_storage(self.storage.as_ref(), &self.user_key, user)
    }

    /// Guarda credencial + identidad; si la identidad falla se revierte la credencial
    pub fn save_session(&self, user: &UserProfile, token: &str) -> Result<(), String> {
        self.save_credential(token)?;
        if let Err(e) = self.save_user(user) {
            let _ = self.clear_credential();
            return Err(e);
        }
        Ok(())
    }

    /// Borra credencial e identidad. Idempotente.
    pub fn clear(&self) -> Result<(), String> {
        let token_result = self.clear_credential();
        let user_result = self.storage.remove_item(&self.user_key);
        token_result.and(user_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::user_fixture;
    use crate::utils::storage::{load_from_storage, MemoryStorage};

    /// Storage que falla al escribir una clave concreta
    struct FailingStorage {
        inner: MemoryStorage,
        failing_key: &'static str,
    }

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, String> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
            if key == self.failing_key {
                return Err("QuotaExceededError".to_string());
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), String> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn save_and_clear_session() {
        let storage = Rc::new(MemoryStorage::new());
        let persistence = SessionPersistence::new(storage.clone(), &AppConfig::default());
        let user = user_fixture(1, "astro");

        persistence.save_session(&user, "tok-123").unwrap();
        assert_eq!(persistence.load_credential().as_deref(), Some("tok-123"));
        assert_eq!(storage.get_item("authToken").unwrap().as_deref(), Some("tok-123"));
        assert_eq!(load_from_storage::<UserProfile>(storage.as_ref(), "user"), Some(user));

        persistence.clear().unwrap();
        persistence.clear().unwrap();
        assert_eq!(persistence.load_credential(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn failed_identity_write_rolls_back_credential() {
        let storage = Rc::new(FailingStorage {
            inner: MemoryStorage::new(),
            failing_key: "user",
        });
        let persistence = SessionPersistence::new(storage, &AppConfig::default());

        let result = persistence.save_session(&user_fixture(1, "astro"), "tok-123");
        assert!(result.is_err());
        assert_eq!(persistence.load_credential(), None);
    }

    #[test]
    fn empty_credential_is_treated_as_missing() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("authToken", "").unwrap();
        let persistence = SessionPersistence::new(storage, &AppConfig::default());
        assert_eq!(persistence.load_credential(), None);
    }
}
