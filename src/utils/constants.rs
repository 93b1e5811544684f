/// Prefijo de la API REST versionada
pub const API_BASE_PATH: &str = "/api/v1";

/// Claves fijas en localStorage
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";
pub const STORAGE_KEY_USER: &str = "user";

/// Rutas de la SPA
pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const PLANETS_ROUTE: &str = "/planets";
pub const FLIGHTS_ROUTE: &str = "/flights";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Esquema del header de autorización (`Authorization: Token <t>`)
pub const AUTH_SCHEME: &str = "Token";

// Límites por defecto de los filtros
pub const DEFAULT_DISTANCE_MIN: i64 = 0;
pub const DEFAULT_DISTANCE_MAX: i64 = 10_000;
pub const DEFAULT_TRAVEL_TIME_MIN: i64 = 0;
pub const DEFAULT_TRAVEL_TIME_MAX: i64 = 365;
pub const DEFAULT_PRICE_MIN: i64 = 0;
pub const DEFAULT_PRICE_MAX: i64 = 50_000;

/// Nombre del evento que emite el navegador interno al cambiar de ruta
pub const ROUTE_CHANGE_EVENT: &str = "routechange";
