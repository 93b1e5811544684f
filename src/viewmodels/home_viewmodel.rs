// ============================================================================
// HOME VIEWMODEL - Destinos destacados de la portada
// ============================================================================
// Los fallos solo se registran en el log: la portada se pinta igual.
// ============================================================================

use crate::models::Planet;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::{LoadOutcome, PageLoader};

const FEATURED_COUNT: usize = 4;

#[derive(Clone)]
pub struct HomeViewModel {
    api: ApiClient,
    state: AppState,
    loader: PageLoader<Vec<Planet>>,
}

impl HomeViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self {
            api,
            state,
            loader: PageLoader::new("Failed to fetch planets"),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        self.state.catalog.set_loading(true);
        self.state.notify_subscribers();

        let outcome = self.loader.run(self.api.list_planets()).await;
        match outcome {
            LoadOutcome::Loaded => {
                if let Some(planets) = self.loader.data() {
                    self.state.catalog.set_planets(planets);
                }
            }
            LoadOutcome::Failed => log::warn!("⚠️ La portada se muestra sin destinos"),
            LoadOutcome::Unauthorized | LoadOutcome::Cancelled => {}
        }
        if outcome != LoadOutcome::Cancelled {
            self.state.catalog.set_loading(false);
            self.state.notify_subscribers();
        }
        outcome
    }

    pub fn cancel(&self) {
        self.loader.cancel();
        self.state.catalog.set_loading(false);
    }

    /// Primeros destinos del catálogo (el último listado descargado)
    pub fn featured_planets(&self) -> Vec<Planet> {
        self.state
            .catalog
            .get_planets()
            .into_iter()
            .take(FEATURED_COUNT)
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.state.catalog.get_loading()
    }
}
