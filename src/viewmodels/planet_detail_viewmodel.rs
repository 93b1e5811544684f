// ============================================================================
// PLANET DETAIL VIEWMODEL - Ficha de un destino y sus vuelos
// ============================================================================

use futures::future::try_join;

use crate::models::{Flight, FlightQuery, Planet};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;
use crate::viewmodels::{LoadOutcome, PageLoader, PageView};

const LOAD_FAILED: &str = "Failed to load this destination. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDetailData {
    pub planet: Planet,
    /// Vuelos con este planeta como destino
    pub flights: Vec<Flight>,
}

#[derive(Clone)]
pub struct PlanetDetailViewModel {
    api: ApiClient,
    state: AppState,
    slug: String,
    loader: PageLoader<PlanetDetailData>,
}

impl PlanetDetailViewModel {
    pub fn new(api: ApiClient, state: AppState, slug: &str) -> Self {
        Self {
            api,
            state,
            slug: slug.to_string(),
            loader: PageLoader::new(LOAD_FAILED),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub async fn load(&self) -> LoadOutcome {
        log::info!("🪐 Cargando destino {}...", self.slug);
        let query = FlightQuery {
            origin: None,
            destination: Some(self.slug.clone()),
        };
        let fetch = async {
            let (planet, flights) =
                try_join(self.api.get_planet(&self.slug), self.api.list_flights(&query)).await?;
            Ok::<_, ApiError>(PlanetDetailData { planet, flights })
        };

        let outcome = self.loader.run(fetch).await;
        if let (LoadOutcome::Loaded, Some(data)) = (outcome, self.loader.data()) {
            self.state.catalog.set_selected_planet(Some(data.planet));
            self.state.notify_subscribers();
        }
        outcome
    }

    pub fn cancel(&self) {
        self.loader.cancel();
    }

    /// Nunca está "vacío": el planeta existe o la carga falló
    pub fn view(&self) -> PageView<PlanetDetailData> {
        self.loader.view(|_| false)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::services::api_client::testing::TestEnv;
    use crate::services::HttpMethod;

    const MARS: &str = r#"{"id": 1, "slug": "mars", "name": "Mars", "distance_from_earth_km": 225, "travel_time_days": 210}"#;

    #[test]
    fn loads_planet_and_flights_together() {
        let env = TestEnv::new();
        env.transport
            .respond(HttpMethod::Get, "/planets/mars/", 200, MARS)
            .respond(HttpMethod::Get, "/flights/", 200, "[]");
        let vm = PlanetDetailViewModel::new(env.api.clone(), env.state.clone(), "mars");

        assert_eq!(block_on(vm.load()), LoadOutcome::Loaded);
        match vm.view() {
            PageView::Populated(data) => {
                assert_eq!(data.planet.slug, "mars");
                assert!(data.flights.is_empty());
            }
            other => panic!("vista inesperada: {:?}", other),
        }
        assert_eq!(
            env.state.catalog.get_selected_planet().map(|p| p.name),
            Some("Mars".to_string())
        );

        let flights_request = &env.transport.sent()[1];
        assert_eq!(
            flights_request.params,
            vec![("destination".to_string(), "mars".to_string())]
        );
    }

    #[test]
    fn unknown_slug_is_a_page_error() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/flights/", 200, "[]");
        let vm = PlanetDetailViewModel::new(env.api.clone(), env.state.clone(), "pluto");

        assert_eq!(block_on(vm.load()), LoadOutcome::Failed);
        assert_eq!(vm.view(), PageView::Error(LOAD_FAILED.to_string()));
        assert_eq!(env.state.catalog.get_selected_planet(), None);
    }
}
