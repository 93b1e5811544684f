// ============================================================================
// API CLIENT - Adaptador HTTP de la API REST versionada
// ============================================================================
// - Adjunta `Authorization: Token <t>` si hay credencial en la sesión
// - 401: limpia sesión + storage y fuerza la navegación al login ANTES de
//   devolver el error (no reintenta el request)
// - Resto de no-2xx: ApiError::Status con el mensaje del servidor
// - Sin reintentos, sin timeouts propios, sin deduplicación
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::AppConfig;
use crate::models::{
    Booking, CreateBookingRequest, CreateFlightRequest, Flight, FlightQuery, ListResponse,
    LoginRequest, Planet, Pod, PodQuery, Profile, ProfileUpdate, RegisterRequest, TokenResponse,
    UserProfile,
};
use crate::services::error::{extract_error_message, ApiError};
use crate::services::http::{HttpMethod, HttpRequest, HttpTransport};
use crate::services::navigator::Navigator;
use crate::services::persistence::SessionPersistence;
use crate::state::SessionState;
use crate::utils::constants::AUTH_SCHEME;

/// Cómo se decide el header de autorización de un request
#[derive(Debug, Clone, Copy)]
enum Credential<'a> {
    /// El de la sesión actual, si existe
    Session,
    /// Uno explícito (credencial recién emitida, aún sin confirmar en la sesión)
    Explicit(&'a str),
    /// Ninguno (endpoints anónimos: login y registro)
    Anonymous,
}

#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    transport: Rc<dyn HttpTransport>,
    session: SessionState,
    persistence: SessionPersistence,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        session: SessionState,
        persistence: SessionPersistence,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            config: config.clone(),
            transport,
            session,
            persistence,
            navigator,
        }
    }

    /// Request genérico: devuelve el body crudo de una respuesta 2xx
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        params: &[(String, String)],
    ) -> Result<String, ApiError> {
        self.send(method, path, body, params, Credential::Session).await
    }

    /// Igual que `request` pero con una credencial explícita
    pub async fn request_with_token(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        token: &str,
    ) -> Result<String, ApiError> {
        self.send(method, path, body, &[], Credential::Explicit(token)).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        params: &[(String, String)],
        credential: Credential<'_>,
    ) -> Result<String, ApiError> {
        let url = self.config.endpoint(path);

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        let token = match credential {
            Credential::Session => self.session.get_token(),
            Credential::Explicit(token) => Some(token.to_string()),
            Credential::Anonymous => None,
        };
        if let Some(token) = &token {
            headers.push(("Authorization".to_string(), format!("{} {}", AUTH_SCHEME, token)));
        }

        let body = body
            .map(|value| serde_json::to_string(&value))
            .transpose()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        log::debug!("🌐 {} {}", method.as_str(), url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                params: params.to_vec(),
                body,
            })
            .await
            .map_err(|e| {
                log::error!("❌ {} {} falló: {}", method.as_str(), url, e);
                e
            })?;

        if response.status == 401 {
            let message = extract_error_message(&response.body);
            // Un 401 de una credencial de sesión que ya fue reemplazada (logout o
            // nuevo login mientras el request estaba en vuelo) no toca la sesión nueva
            let superseded = matches!(credential, Credential::Session)
                && self.session.get_token() != token;
            if superseded {
                log::warn!("⚠️ 401 de una credencial ya reemplazada en {}: se ignora", url);
            } else {
                self.handle_unauthorized();
            }
            return Err(ApiError::Unauthorized(message));
        }

        if !response.ok() {
            let message = extract_error_message(&response.body);
            log::warn!("⚠️ HTTP {} en {} {}: {}", response.status, method.as_str(), url, message);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Ok(response.body)
    }

    /// Interceptor de 401: efecto lateral global, nunca llega al estado de la página
    fn handle_unauthorized(&self) {
        log::warn!(
            "🔒 401 recibido: cerrando sesión y redirigiendo a {}",
            self.config.login_route
        );
        if let Err(e) = self.persistence.clear() {
            log::error!("❌ Error limpiando credencial persistida: {}", e);
        }
        self.session.logout();
        self.navigator.redirect(&self.config.login_route);
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        // 204 / body vacío se trata como `null`
        let body = if body.trim().is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let body = self.request(HttpMethod::Get, path, None, params).await?;
        Self::parse(&body)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, ApiError> {
        let list: ListResponse<T> = self.get_json(path, params).await?;
        Ok(list.into_items())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = body.map(Self::to_value).transpose()?;
        let response = self.request(HttpMethod::Post, path, body, &[]).await?;
        Self::parse(&response)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = Self::to_value(body)?;
        let response = self.request(HttpMethod::Put, path, Some(body), &[]).await?;
        Self::parse(&response)
    }

    // ------------------------------------------------------------------------
    // Planetas
    // ------------------------------------------------------------------------

    pub async fn list_planets(&self) -> Result<Vec<Planet>, ApiError> {
        self.get_list("/planets/", &[]).await
    }

    pub async fn get_planet(&self, slug: &str) -> Result<Planet, ApiError> {
        self.get_json(&format!("/planets/{}/", slug), &[]).await
    }

    // ------------------------------------------------------------------------
    // Vuelos y cápsulas
    // ------------------------------------------------------------------------

    pub async fn list_flights(&self, query: &FlightQuery) -> Result<Vec<Flight>, ApiError> {
        self.get_list("/flights/", &query.to_params()).await
    }

    pub async fn get_flight(&self, id: i64) -> Result<Flight, ApiError> {
        self.get_json(&format!("/flights/{}/", id), &[]).await
    }

    pub async fn create_flight(&self, flight: &CreateFlightRequest) -> Result<Flight, ApiError> {
        log::info!("🚀 Creando vuelo {}", flight.flight_number);
        self.post_json("/flights/", Some(flight)).await
    }

    pub async fn list_pods(&self, query: &PodQuery) -> Result<Vec<Pod>, ApiError> {
        self.get_list("/pods/", &query.to_params()).await
    }

    pub async fn get_pod(&self, id: i64) -> Result<Pod, ApiError> {
        self.get_json(&format!("/pods/{}/", id), &[]).await
    }

    // ------------------------------------------------------------------------
    // Reservas
    // ------------------------------------------------------------------------

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_list("/bookings/", &[]).await
    }

    pub async fn get_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.get_json(&format!("/bookings/{}/", id), &[]).await
    }

    pub async fn create_booking(&self, booking: &CreateBookingRequest) -> Result<Booking, ApiError> {
        log::info!(
            "🎫 Creando reserva: vuelo {} / cápsula {}",
            booking.flight_id,
            booking.pod_id
        );
        self.post_json("/bookings/", Some(booking)).await
    }

    pub async fn confirm_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.post_json::<(), _>(&format!("/bookings/{}/confirm/", id), None)
            .await
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.post_json::<(), _>(&format!("/bookings/{}/cancel/", id), None)
            .await
    }

    // ------------------------------------------------------------------------
    // Usuarios y autenticación
    // ------------------------------------------------------------------------

    pub async fn register(&self, form: &RegisterRequest) -> Result<UserProfile, ApiError> {
        log::info!("📝 Registrando usuario: {}", form.username);
        let body = Self::to_value(form)?;
        let response = self
            .send(HttpMethod::Post, "/users/", Some(body), &[], Credential::Anonymous)
            .await?;
        Self::parse(&response)
    }

    /// `POST /auth-token/`; sin header de autorización
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        log::info!("🔐 Solicitando credencial para usuario: {}", username);
        let body = Self::to_value(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .send(HttpMethod::Post, "/auth-token/", Some(body), &[], Credential::Anonymous)
            .await?;
        Self::parse(&response)
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/users/me/", &[]).await
    }

    pub async fn get_me_with_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        let body = self
            .request_with_token(HttpMethod::Get, "/users/me/", None, token)
            .await?;
        Self::parse(&body)
    }

    // ------------------------------------------------------------------------
    // Perfiles
    // ------------------------------------------------------------------------

    pub async fn get_my_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/profiles/me/", &[]).await
    }

    pub async fn get_profile(&self, id: i64) -> Result<Profile, ApiError> {
        self.get_json(&format!("/profiles/{}/", id), &[]).await
    }

    pub async fn update_profile(&self, id: i64, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        log::info!("📝 Actualizando perfil {}", id);
        self.put_json(&format!("/profiles/{}/", id), update).await
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::testing::TestEnv;
    use super::*;
    use crate::utils::storage::KeyValueStorage;

    const PLANETS: &str = r#"[
        {"id": 1, "slug": "mars", "name": "Mars", "distance_from_earth_km": 225, "travel_time_days": 210},
        {"id": 2, "slug": "europa", "name": "Europa", "distance_from_earth_km": 628, "travel_time_days": 600}
    ]"#;

    #[test]
    fn attaches_token_when_session_has_one() {
        let env = TestEnv::logged_in("tok-42");
        env.transport.respond(HttpMethod::Get, "/planets/", 200, PLANETS);

        let planets = block_on(env.api.list_planets()).unwrap();
        assert_eq!(planets.len(), 2);

        let sent = env.transport.sent();
        assert_eq!(sent[0].url, "/api/v1/planets/");
        assert_eq!(sent[0].header("Authorization"), Some("Token tok-42"));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn omits_token_when_logged_out() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/planets/", 200, PLANETS);

        block_on(env.api.list_planets()).unwrap();
        assert_eq!(env.transport.sent()[0].header("Authorization"), None);
    }

    #[test]
    fn unauthorized_clears_session_and_redirects_before_failing() {
        let env = TestEnv::logged_in("expired");
        env.storage
            .set_item("user", r#"{"id": 1, "username": "astro"}"#)
            .unwrap();
        env.transport.respond(
            HttpMethod::Get,
            "/bookings/",
            401,
            r#"{"detail": "Invalid token."}"#,
        );

        let result = block_on(env.api.list_bookings());

        assert_eq!(result, Err(ApiError::Unauthorized("Invalid token.".to_string())));
        assert!(!env.state.session.is_authenticated());
        assert_eq!(env.state.session.get_token(), None);
        assert_eq!(env.storage.get_item("authToken").unwrap(), None);
        assert_eq!(env.storage.get_item("user").unwrap(), None);
        assert_eq!(env.current_route(), "/login");
        assert_eq!(env.navigator.redirect_count(), 1);
        // Sin reintento
        assert_eq!(env.transport.sent_count(), 1);
    }

    #[test]
    fn unauthorized_for_replaced_credential_keeps_new_session() {
        use std::cell::RefCell;

        use futures::executor::LocalPool;
        use futures::task::LocalSpawnExt;

        use crate::services::http::gated::GatedTransport;
        use crate::services::HttpResponse;

        let env = TestEnv::logged_in("old");
        let (transport, gate) = GatedTransport::new();
        let api = env.api_with(Rc::new(transport));
        let result = Rc::new(RefCell::new(None));

        let mut pool = LocalPool::new();
        {
            let slot = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    *slot.borrow_mut() = Some(api.list_bookings().await);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        env.state.session.set_token(Some("new".to_string()));
        gate.send(Ok(HttpResponse {
            status: 401,
            body: r#"{"detail": "Invalid token."}"#.to_string(),
        }))
        .unwrap();
        pool.run_until_stalled();

        assert_eq!(
            *result.borrow(),
            Some(Err(ApiError::Unauthorized("Invalid token.".to_string())))
        );
        assert_eq!(env.state.session.get_token().as_deref(), Some("new"));
        assert_eq!(env.storage.get_item("authToken").unwrap().as_deref(), Some("old"));
        assert_eq!(env.navigator.redirect_count(), 0);
        assert_eq!(env.current_route(), "/");
    }

    #[test]
    fn other_failures_carry_status_and_message() {
        let env = TestEnv::logged_in("tok");
        env.transport
            .respond(HttpMethod::Get, "/planets/pluto/", 404, r#"{"detail": "Not found."}"#);

        let error = block_on(env.api.get_planet("pluto")).unwrap_err();
        assert_eq!(
            error,
            ApiError::Status {
                status: 404,
                message: "Not found.".to_string()
            }
        );
        // La sesión no se toca
        assert!(env.state.session.is_authenticated());
        assert_eq!(env.current_route(), "/");
    }

    #[test]
    fn network_failures_propagate_unchanged() {
        let env = TestEnv::new();
        env.transport.fail(
            HttpMethod::Get,
            "/flights/",
            ApiError::Network("connection refused".to_string()),
        );

        let error = block_on(env.api.list_flights(&FlightQuery::default())).unwrap_err();
        assert_eq!(error, ApiError::Network("connection refused".to_string()));
        assert_eq!(env.transport.sent_count(), 1);
    }

    #[test]
    fn flight_query_becomes_params() {
        let env = TestEnv::new();
        env.transport.respond(
            HttpMethod::Get,
            "/flights/",
            200,
            r#"{"count": 0, "next": null, "previous": null, "results": []}"#,
        );

        let query = FlightQuery {
            origin: Some("earth".to_string()),
            destination: Some("mars".to_string()),
        };
        let flights = block_on(env.api.list_flights(&query)).unwrap();
        assert!(flights.is_empty());
        assert_eq!(
            env.transport.sent()[0].params,
            vec![
                ("origin".to_string(), "earth".to_string()),
                ("destination".to_string(), "mars".to_string()),
            ]
        );
    }

    #[test]
    fn login_is_sent_anonymously_with_json_body() {
        let env = TestEnv::logged_in("stale");
        env.transport
            .respond(HttpMethod::Post, "/auth-token/", 200, r#"{"token": "fresh"}"#);

        let token = block_on(env.api.login("astro", "secret-pass")).unwrap();
        assert_eq!(token.token, "fresh");

        let sent = env.transport.sent();
        assert_eq!(sent[0].header("Authorization"), None);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "astro");
        assert_eq!(body["password"], "secret-pass");
    }

    #[test]
    fn explicit_token_overrides_session() {
        let env = TestEnv::new();
        env.transport.respond(
            HttpMethod::Get,
            "/users/me/",
            200,
            r#"{"id": 1, "username": "astro"}"#,
        );

        let me = block_on(env.api.get_me_with_token("fresh")).unwrap();
        assert_eq!(me.username, "astro");
        assert_eq!(env.transport.sent()[0].header("Authorization"), Some("Token fresh"));
    }

    #[test]
    fn booking_actions_post_without_body() {
        let env = TestEnv::logged_in("tok");
        env.transport.respond(
            HttpMethod::Post,
            "/bookings/5/confirm/",
            200,
            r#"{"id": 5, "total_price": "15000.00", "status": "confirmed"}"#,
        );

        let booking = block_on(env.api.confirm_booking(5)).unwrap();
        assert_eq!(booking.status, crate::models::BookingStatus::Confirmed);

        let sent = env.transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "/api/v1/bookings/5/confirm/");
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        let env = TestEnv::new();
        env.transport.respond(HttpMethod::Get, "/planets/", 200, "<html>");
        assert!(matches!(
            block_on(env.api.list_planets()),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn update_profile_puts_json() {
        let env = TestEnv::logged_in("tok");
        env.transport.respond(
            HttpMethod::Put,
            "/profiles/3/",
            200,
            r#"{"id": 3, "bio": "Explorer", "passport_id": "SP-9", "credits_balance": "9000.00"}"#,
        );

        let update = ProfileUpdate {
            bio: "Explorer".to_string(),
            passport_id: "SP-9".to_string(),
            ..ProfileUpdate::default()
        };
        let profile = block_on(env.api.update_profile(3, &update)).unwrap();
        assert_eq!(profile.bio, "Explorer");

        let sent = env.transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Put);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["passport_id"], "SP-9");
        assert!(body.get("preferred_pod_type").is_none());
    }
}
