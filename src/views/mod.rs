// ============================================================================
// VIEWS - Funciones que construyen DOM a partir de los viewmodels
// ============================================================================
// Sin lógica de negocio: leen el estado del viewmodel y conectan eventos.
// ============================================================================

pub mod auth;
pub mod dashboard;
pub mod flights;
pub mod home;
pub mod planet_detail;
pub mod planets;
pub mod shared;

use std::future::Future;
use std::rc::Rc;

use crate::services::Navigator;
use crate::state::AppState;
use crate::viewmodels::{LoadOutcome, SessionViewModel};

/// Lo que toda vista necesita además de su viewmodel
#[derive(Clone)]
pub struct ViewContext {
    pub state: AppState,
    pub navigator: Rc<dyn Navigator>,
    pub session: SessionViewModel,
}

impl ViewContext {
    pub fn go(&self, path: &str) {
        self.navigator.navigate(path);
    }
}

/// Lanza una carga y repinta al terminar (salvo que se haya cancelado)
pub fn spawn_load<F>(load: F)
where
    F: Future<Output = LoadOutcome> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        if load.await != LoadOutcome::Cancelled {
            crate::rerender_app();
        }
    });
}
