// ============================================================================
// ROUTES - Rutas de la SPA
// ============================================================================

use crate::utils::constants::{
    DASHBOARD_ROUTE, FLIGHTS_ROUTE, HOME_ROUTE, LOGIN_ROUTE, PLANETS_ROUTE, REGISTER_ROUTE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Planets,
    PlanetDetail(String),
    Flights,
    Login,
    Register,
    Dashboard,
}

impl Route {
    /// Path del navegador → ruta. Lo desconocido cae en Home.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["planets"] => Route::Planets,
            ["planets", slug] => Route::PlanetDetail(slug.to_string()),
            ["flights"] => Route::Flights,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["dashboard"] => Route::Dashboard,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_ROUTE.to_string(),
            Route::Planets => PLANETS_ROUTE.to_string(),
            Route::PlanetDetail(slug) => format!("{}/{}", PLANETS_ROUTE, slug),
            Route::Flights => FLIGHTS_ROUTE.to_string(),
            Route::Login => LOGIN_ROUTE.to_string(),
            Route::Register => REGISTER_ROUTE.to_string(),
            Route::Dashboard => DASHBOARD_ROUTE.to_string(),
        }
    }

    /// Título de la pestaña
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Celestial Escapes",
            Route::Planets => "Destinations · Celestial Escapes",
            Route::PlanetDetail(_) => "Destination · Celestial Escapes",
            Route::Flights => "Flights · Celestial Escapes",
            Route::Login => "Login · Celestial Escapes",
            Route::Register => "Register · Celestial Escapes",
            Route::Dashboard => "Dashboard · Celestial Escapes",
        }
    }
}
