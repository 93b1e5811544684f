// ============================================================================
// PLANETS VIEWMODEL - Listado de destinos con búsqueda y filtros
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::filters::{filter_planets, PlanetBound, PlanetCriteria};
use crate::models::Planet;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::{LoadOutcome, PageLoader, PageView};

const LOAD_FAILED: &str = "Failed to load planets. Please try again.";

#[derive(Clone)]
pub struct PlanetsViewModel {
    api: ApiClient,
    state: AppState,
    loader: PageLoader<Vec<Planet>>,
    criteria: Rc<RefCell<PlanetCriteria>>,
}

impl PlanetsViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self {
            api,
            state,
            loader: PageLoader::new(LOAD_FAILED),
            criteria: Rc::new(RefCell::new(PlanetCriteria::default())),
        }
    }

    /// Montaje y botón "Try Again"
    pub async fn load(&self) -> LoadOutcome {
        log::info!("🌍 Cargando planetas...");
        self.state.catalog.set_loading(true);

        let outcome = self.loader.run(self.api.list_planets()).await;
        if outcome != LoadOutcome::Cancelled {
            self.state.catalog.set_loading(false);
        }
        if let (LoadOutcome::Loaded, Some(planets)) = (outcome, self.loader.data()) {
            log::info!("✅ {} planetas cargados", planets.len());
            self.state.catalog.set_planets(planets);
        }

        self.state.notify_subscribers();
        outcome
    }

    pub fn cancel(&self) {
        self.loader.cancel();
        self.state.catalog.set_loading(false);
    }

    pub fn view(&self) -> PageView<Vec<Planet>> {
        self.loader.view(Vec::is_empty)
    }

    /// Planetas cargados que pasan los filtros actuales
    pub fn visible_planets(&self) -> Vec<Planet> {
        let planets = self.loader.data().unwrap_or_default();
        filter_planets(&planets, &self.criteria.borrow())
    }

    pub fn criteria(&self) -> PlanetCriteria {
        self.criteria.borrow().clone()
    }

    pub fn set_search(&self, text: &str) {
        self.criteria.borrow_mut().set_search(text);
    }

    pub fn set_bound(&self, bound: PlanetBound, raw: &str) {
        self.criteria.borrow_mut().set_bound(bound, raw);
    }

    pub fn clear_filters(&self) {
        self.criteria.borrow_mut().reset();
    }

    pub fn select_planet(&self, planet: &Planet) {
        self.state.catalog.set_selected_planet(Some(planet.clone()));
        self.state.notify_subscribers();
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::services::api_client::testing::TestEnv;
    use crate::services::HttpMethod;
    use crate::viewmodels::PageStatus;

    const PLANETS: &str = r#"{"count": 2, "next": null, "previous": null, "results": [
        {"id": 1, "slug": "mars", "name": "Mars", "description": "The red planet",
         "distance_from_earth_km": "225.00", "travel_time_days": 210},
        {"id": 2, "slug": "europa", "name": "Europa", "description": "Icy moon of Jupiter",
         "distance_from_earth_km": "628.00", "travel_time_days": 600}
    ]}"#;

    #[test]
    fn load_fills_catalog_and_filters_locally() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/planets/", 200, PLANETS);
        let vm = PlanetsViewModel::new(env.api.clone(), env.state.clone());

        assert_eq!(block_on(vm.load()), LoadOutcome::Loaded);
        assert_eq!(env.state.catalog.planet_count(), 2);
        assert!(!env.state.catalog.get_loading());
        assert!(matches!(vm.view(), PageView::Populated(ref planets) if planets.len() == 2));

        vm.set_bound(PlanetBound::DistanceMax, "300");
        let names: Vec<String> = vm.visible_planets().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Mars"]);

        // Filtrar no vuelve a pedir nada al servidor
        assert_eq!(env.transport.sent_count(), 1);

        vm.clear_filters();
        assert_eq!(vm.visible_planets().len(), 2);
        assert!(vm.criteria().is_default());
    }

    #[test]
    fn empty_catalog_is_a_distinct_state() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/planets/", 200, "[]");
        let vm = PlanetsViewModel::new(env.api.clone(), env.state.clone());

        block_on(vm.load());
        assert_eq!(vm.view(), PageView::Empty);
    }

    #[test]
    fn server_error_shows_message_and_retry_recovers() {
        let env = TestEnv::new();
        env.transport
            .respond(HttpMethod::Get, "/planets/", 500, r#"{"detail": "Server error"}"#)
            .respond(HttpMethod::Get, "/planets/", 200, PLANETS);
        let vm = PlanetsViewModel::new(env.api.clone(), env.state.clone());

        assert_eq!(block_on(vm.load()), LoadOutcome::Failed);
        assert_eq!(vm.view(), PageView::Error(LOAD_FAILED.to_string()));
        assert!(!env.state.catalog.get_loading());

        assert_eq!(block_on(vm.load()), LoadOutcome::Loaded);
        assert_eq!(vm.visible_planets().len(), 2);
    }

    #[test]
    fn selecting_a_planet_updates_catalog() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/planets/", 200, PLANETS);
        let vm = PlanetsViewModel::new(env.api.clone(), env.state.clone());
        block_on(vm.load());

        let europa = vm.visible_planets().remove(1);
        vm.select_planet(&europa);
        assert_eq!(env.state.catalog.get_selected_planet(), Some(europa));
        assert_eq!(vm.loader.status(), PageStatus::Loaded);
    }
}
