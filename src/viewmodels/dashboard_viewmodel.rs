// ============================================================================
// DASHBOARD VIEWMODEL - Reservas + perfil del usuario autenticado
// ============================================================================
// Guard: sin sesión se navega al login y no se pide nada.
// Reservas y perfil se piden a la vez y ambos deben llegar (todo o nada).
// ============================================================================

use std::rc::Rc;

use futures::future::try_join;

use crate::models::{Booking, Profile, ProfileUpdate, UserProfile};
use crate::services::{ApiClient, ApiError, Navigator};
use crate::state::AppState;
use crate::utils::constants::{FLIGHTS_ROUTE, HOME_ROUTE, LOGIN_ROUTE};
use crate::viewmodels::{FormError, LoadOutcome, PageLoader, PageView, SessionViewModel};

const LOAD_FAILED: &str = "Failed to load dashboard data.";
const ACTION_FAILED: &str = "Could not update this booking. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub bookings: Vec<Booking>,
    pub profile: Profile,
}

#[derive(Clone)]
pub struct DashboardViewModel {
    api: ApiClient,
    state: AppState,
    session: SessionViewModel,
    navigator: Rc<dyn Navigator>,
    loader: PageLoader<DashboardData>,
}

impl DashboardViewModel {
    pub fn new(
        api: ApiClient,
        state: AppState,
        session: SessionViewModel,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            state,
            session,
            navigator,
            loader: PageLoader::new(LOAD_FAILED),
        }
    }

    pub async fn load(&self) -> LoadOutcome {
        if !self.state.session.is_authenticated() {
            log::info!("🔒 Dashboard sin sesión, redirigiendo al login");
            self.navigator.navigate(LOGIN_ROUTE);
            return LoadOutcome::Unauthorized;
        }

        log::info!("📋 Cargando dashboard...");
        let fetch = async {
            let (bookings, profile) =
                try_join(self.api.list_bookings(), self.api.get_my_profile()).await?;
            Ok::<_, ApiError>(DashboardData { bookings, profile })
        };
        self.loader.run(fetch).await
    }

    pub fn cancel(&self) {
        self.loader.cancel();
    }

    /// El perfil siempre se muestra; "sin reservas" lo decide la vista con `has_bookings`
    pub fn view(&self) -> PageView<DashboardData> {
        self.loader.view(|_| false)
    }

    pub fn has_bookings(&self) -> bool {
        self.loader
            .data()
            .map_or(false, |data| !data.bookings.is_empty())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.session.get_user()
    }

    pub async fn confirm_booking(&self, id: i64) -> Result<Booking, FormError> {
        let booking = self
            .api
            .confirm_booking(id)
            .await
            .map_err(|e| FormError::from_api(&e, ACTION_FAILED))?;
        log::info!("✅ Reserva {} confirmada", id);
        self.replace_booking(&booking);
        Ok(booking)
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<Booking, FormError> {
        let booking = self
            .api
            .cancel_booking(id)
            .await
            .map_err(|e| FormError::from_api(&e, ACTION_FAILED))?;
        log::info!("🗑️ Reserva {} cancelada", id);
        self.replace_booking(&booking);
        Ok(booking)
    }

    fn replace_booking(&self, updated: &Booking) {
        self.loader.update_data(|data| {
            if let Some(slot) = data.bookings.iter_mut().find(|b| b.id == updated.id) {
                *slot = updated.clone();
            }
        });
    }

    pub async fn save_profile(&self, update: &ProfileUpdate) -> Result<Profile, FormError> {
        let Some(profile_id) = self.loader.data().map(|data| data.profile.id) else {
            return Err(FormError::Rejected(LOAD_FAILED.to_string()));
        };
        let profile = self.session.update_profile(profile_id, update).await?;
        self.loader.update_data(|data| data.profile = profile.clone());
        Ok(profile)
    }

    pub fn browse_flights(&self) {
        self.navigator.navigate(FLIGHTS_ROUTE);
    }

    pub fn logout(&self) {
        self.loader.cancel();
        self.session.logout();
        self.navigator.navigate(HOME_ROUTE);
    }
}
