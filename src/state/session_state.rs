// ============================================================================
// SESSION STATE - Identidad + credencial en memoria
// ============================================================================
// Store puro: no lee ni escribe storage (eso es SessionPersistence).
// Una sola celda para toda la sesión: ninguna lectura ve un estado a medias.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Session, UserProfile};

#[derive(Clone, Default)]
pub struct SessionState {
    session: Rc<RefCell<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estado inicial a partir de la credencial persistida (identidad sin restaurar)
    pub fn restored(token: Option<String>) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::restored(token))),
        }
    }

    /// Única transición atómica de login
    pub fn set_auth(&self, user: UserProfile, token: String) {
        *self.session.borrow_mut() = Session {
            user: Some(user),
            token: Some(token),
        };
    }

    pub fn set_user(&self, user: Option<UserProfile>) {
        self.session.borrow_mut().user = user;
    }

    pub fn set_token(&self, token: Option<String>) {
        self.session.borrow_mut().token = token;
    }

    /// Limpia identidad y credencial. Idempotente.
    pub fn logout(&self) {
        *self.session.borrow_mut() = Session::default();
    }

    pub fn get_session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn get_user(&self) -> Option<UserProfile> {
        self.session.borrow().user.clone()
    }

    pub fn get_token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::user_fixture;

    #[test]
    fn set_auth_is_observed_atomically() {
        let state = SessionState::new();
        let user = user_fixture(7, "astro");
        state.set_auth(user.clone(), "tok".to_string());

        let session = state.get_session();
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert_eq!(session.user, Some(user));
    }

    #[test]
    fn logout_is_total_and_idempotent() {
        let fresh = SessionState::new();
        fresh.logout();
        assert!(!fresh.is_authenticated());
        assert_eq!(fresh.get_token(), None);

        let state = SessionState::restored(Some("stale".to_string()));
        state.set_user(Some(user_fixture(1, "astro")));
        state.logout();
        state.logout();
        assert!(!state.is_authenticated());
        assert_eq!(state.get_token(), None);
        assert_eq!(state.get_user(), None);
    }

    #[test]
    fn restored_session_is_authenticated_without_identity() {
        let state = SessionState::restored(Some("persisted".to_string()));
        assert!(state.is_authenticated());
        assert_eq!(state.get_user(), None);

        assert!(!SessionState::restored(None).is_authenticated());
    }

    #[test]
    fn set_token_keeps_flag_in_sync() {
        let state = SessionState::new();
        state.set_token(Some("abc".to_string()));
        assert!(state.is_authenticated());
        state.set_token(None);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_store() {
        let state = SessionState::new();
        let view = state.clone();
        state.set_token(Some("abc".to_string()));
        assert_eq!(view.get_token().as_deref(), Some("abc"));
    }
}
