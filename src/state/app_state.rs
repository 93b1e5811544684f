// ============================================================================
// APP STATE - Contenedor explícito de los stores de la aplicación
// ============================================================================
// Se inyecta en viewmodels y vistas; no hay stores globales.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::SessionPersistence;
use crate::state::{CartState, CatalogState, SessionState};

#[derive(Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub cart: CartState,
    pub catalog: CatalogState,

    // Reactividad: callbacks que se ejecutan tras cada mutación relevante
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estado inicial del proceso: la credencial persistida marca la sesión como
    /// autenticada; la identidad queda en None hasta que se vuelva a pedir.
    pub fn restore(persistence: &SessionPersistence) -> Self {
        let token = persistence.load_credential();
        if token.is_some() {
            log::info!("💾 [APP] Credencial encontrada en storage, sesión restaurada");
        }
        Self {
            session: SessionState::restored(token),
            ..Self::default()
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        // Copia de la lista: un subscriber puede suscribir a otro sin pánico de RefCell
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::utils::storage::{KeyValueStorage, MemoryStorage};
    use std::cell::Cell;

    #[test]
    fn restore_reads_only_the_credential() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item("authToken", "persisted").unwrap();
        storage
            .set_item("user", r#"{"id": 1, "username": "astro"}"#)
            .unwrap();
        let persistence = SessionPersistence::new(storage, &AppConfig::default());

        let state = AppState::restore(&persistence);
        assert!(state.session.is_authenticated());
        assert_eq!(state.session.get_token().as_deref(), Some("persisted"));
        assert_eq!(state.session.get_user(), None);
        assert!(state.cart.get_cart().is_empty());
    }

    #[test]
    fn restore_without_credential_starts_logged_out() {
        let persistence =
            SessionPersistence::new(Rc::new(MemoryStorage::new()), &AppConfig::default());
        assert!(!AppState::restore(&persistence).session.is_authenticated());
    }

    #[test]
    fn subscribers_are_notified_through_clones() {
        let state = AppState::new();
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            state.subscribe_to_changes(move || count.set(count.get() + 1));
        }
        let other = state.clone();
        other.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(count.get(), 2);
    }
}
