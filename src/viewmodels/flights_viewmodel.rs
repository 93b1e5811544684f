// ============================================================================
// FLIGHTS VIEWMODEL - Vuelos + planetas (fan-out), filtros y carrito
// ============================================================================

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;

use futures::future::try_join;

use crate::filters::{filter_flights, FlightCriteria, PriceBound};
use crate::models::{Flight, FlightQuery, FlightRef, Planet, Pod, PodQuery, PodRef};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;
use crate::viewmodels::{LoadOutcome, PageLoader, PageView};

const LOAD_FAILED: &str = "Failed to load flights. Please try again.";
const PODS_FAILED: &str = "Failed to load pods for this flight.";

#[derive(Debug, Clone, PartialEq)]
pub struct FlightsData {
    pub flights: Vec<Flight>,
    /// Opciones de los selects de origen/destino
    pub planets: Vec<Planet>,
}

#[derive(Clone)]
pub struct FlightsViewModel {
    api: ApiClient,
    state: AppState,
    loader: PageLoader<FlightsData>,
    pods: PageLoader<Vec<Pod>>,
    criteria: Rc<RefCell<FlightCriteria>>,
}

impl FlightsViewModel {
    pub fn new(api: ApiClient, state: AppState) -> Self {
        Self {
            api,
            state,
            loader: PageLoader::new(LOAD_FAILED),
            pods: PageLoader::new(PODS_FAILED),
            criteria: Rc::new(RefCell::new(FlightCriteria::default())),
        }
    }

    /// Vuelos y planetas a la vez; si uno falla, la página queda en error
    pub async fn load(&self) -> LoadOutcome {
        log::info!("🚀 Cargando vuelos y planetas...");
        let query = FlightQuery::default();
        let fetch = async {
            let (flights, planets) =
                try_join(self.api.list_flights(&query), self.api.list_planets()).await?;
            Ok::<_, ApiError>(FlightsData { flights, planets })
        };

        let outcome = self.loader.run(fetch).await;
        if let (LoadOutcome::Loaded, Some(data)) = (outcome, self.loader.data()) {
            log::info!("✅ {} vuelos cargados", data.flights.len());
            self.state.catalog.set_planets(data.planets);
            self.state.notify_subscribers();
        }
        outcome
    }

    pub fn cancel(&self) {
        self.loader.cancel();
        self.pods.cancel();
    }

    pub fn view(&self) -> PageView<FlightsData> {
        self.loader.view(|data| data.flights.is_empty())
    }

    pub fn visible_flights(&self) -> Vec<Flight> {
        self.loader
            .data()
            .map(|data| filter_flights(&data.flights, &self.criteria.borrow()))
            .unwrap_or_default()
    }

    pub fn planet_options(&self) -> Vec<Planet> {
        self.loader.data().map(|data| data.planets).unwrap_or_default()
    }

    pub fn criteria(&self) -> FlightCriteria {
        self.criteria.borrow().clone()
    }

    pub fn set_origin(&self, raw: &str) {
        self.criteria.borrow_mut().set_origin(raw);
    }

    pub fn set_destination(&self, raw: &str) {
        self.criteria.borrow_mut().set_destination(raw);
    }

    pub fn set_price(&self, bound: PriceBound, raw: &str) {
        self.criteria.borrow_mut().set_price(bound, raw);
    }

    pub fn clear_filters(&self) {
        self.criteria.borrow_mut().reset();
    }

    // ------------------------------------------------------------------------
    // Carrito
    // ------------------------------------------------------------------------

    /// Pone el vuelo en el carrito y pide sus cápsulas.
    /// Cambiar de vuelo descarta la cápsula elegida para el anterior.
    pub async fn select_flight(&self, flight: &Flight) -> LoadOutcome {
        let previous = self.state.cart.get_cart().flight.map(|f| f.id);
        self.state.cart.set_flight(Some(FlightRef::from(flight)));
        if previous != Some(flight.id) {
            self.state.cart.set_pod(None);
        }
        self.state.notify_subscribers();

        log::info!("🛸 Cargando cápsulas del vuelo {}", flight.flight_number);
        self.pods
            .run(self.api.list_pods(&PodQuery::for_flight(flight.id)))
            .await
    }

    pub fn pods_view(&self) -> PageView<Vec<Pod>> {
        self.pods.view(Vec::is_empty)
    }

    pub fn available_pods(&self) -> Vec<Pod> {
        self.pods
            .data()
            .unwrap_or_default()
            .into_iter()
            .filter(|pod| pod.is_available)
            .collect()
    }

    pub fn select_pod(&self, pod: &Pod) {
        if !pod.is_available {
            log::warn!("⚠️ Cápsula {} no disponible", pod.pod_number);
            return;
        }
        self.state.cart.set_pod(Some(PodRef::from(pod)));
        self.state.notify_subscribers();
    }

    /// Valor crudo del input; lo que no sea un entero >= 1 cuenta como 1
    pub fn set_passengers(&self, raw: &str) {
        let passengers = raw.trim().parse::<NonZeroU32>().unwrap_or(NonZeroU32::MIN);
        self.state.cart.set_passengers(passengers);
        self.state.notify_subscribers();
    }
}
