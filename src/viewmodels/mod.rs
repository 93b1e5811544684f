// ============================================================================
// VIEWMODELS - Lógica de cada página, sin DOM
// ============================================================================
// Reciben el ApiClient y el AppState por inyección; las vistas solo pintan
// lo que devuelven.
// ============================================================================

pub mod booking_viewmodel;
pub mod dashboard_viewmodel;
pub mod flights_viewmodel;
pub mod home_viewmodel;
pub mod page_loader;
pub mod planet_detail_viewmodel;
pub mod planets_viewmodel;
pub mod session_viewmodel;

pub use booking_viewmodel::BookingViewModel;
pub use dashboard_viewmodel::{DashboardData, DashboardViewModel};
pub use flights_viewmodel::{FlightsData, FlightsViewModel};
pub use home_viewmodel::HomeViewModel;
pub use page_loader::{LoadOutcome, PageLoader, PageStatus, PageView};
pub use planet_detail_viewmodel::{PlanetDetailData, PlanetDetailViewModel};
pub use planets_viewmodel::PlanetsViewModel;
pub use session_viewmodel::SessionViewModel;

use thiserror::Error;

/// Errores que se muestran en formularios (login, registro, reserva, perfil)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please select a flight and a pod first.")]
    IncompleteCart,

    #[error("Please log in to continue.")]
    LoginRequired,

    /// Rechazo del servidor (o fallo de red) con el texto a mostrar
    #[error("{0}")]
    Rejected(String),
}

impl FormError {
    /// Mensaje del servidor si lo hay; si no, el genérico del formulario
    pub(crate) fn from_api(error: &crate::services::ApiError, fallback: &str) -> Self {
        let message = error
            .server_message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(fallback);
        FormError::Rejected(message.to_string())
    }
}
