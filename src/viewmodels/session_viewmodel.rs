// ============================================================================
// SESSION VIEWMODEL - Login, registro, restauración y logout
// ============================================================================
// Orquesta ApiClient + SessionPersistence + SessionState. Los stores no
// escriben en storage: esa parte la hace este viewmodel.
// ============================================================================

use std::rc::Rc;

use crate::models::{Profile, ProfileUpdate, RegisterRequest, UserProfile};
use crate::services::{ApiClient, ApiError, Navigator, SessionPersistence};
use crate::state::AppState;
use crate::utils::constants::HOME_ROUTE;
use crate::viewmodels::FormError;

const LOGIN_FAILED: &str = "Invalid username or password.";
const REGISTER_FAILED: &str = "Registration failed. Please try again.";
const PROFILE_UPDATE_FAILED: &str = "Could not update your profile. Please try again.";

#[derive(Clone)]
pub struct SessionViewModel {
    api: ApiClient,
    state: AppState,
    persistence: SessionPersistence,
    navigator: Rc<dyn Navigator>,
}

impl SessionViewModel {
    pub fn new(
        api: ApiClient,
        state: AppState,
        persistence: SessionPersistence,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            state,
            persistence,
            navigator,
        }
    }

    /// Credencial → identidad → commit atómico (storage + store) → home
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, FormError> {
        log::info!("🔐 Iniciando login...");

        let token = self
            .api
            .login(username, password)
            .await
            .map_err(|e| {
                log::warn!("⚠️ Login rechazado: {}", e);
                FormError::from_api(&e, LOGIN_FAILED)
            })?
            .token;

        let user = self
            .api
            .get_me_with_token(&token)
            .await
            .map_err(|e| {
                log::error!("❌ Error obteniendo usuario tras login: {}", e);
                FormError::from_api(&e, LOGIN_FAILED)
            })?;

        // Si no se puede persistir no se marca la sesión como autenticada
        if let Err(e) = self.persistence.save_session(&user, &token) {
            log::error!("❌ Error guardando sesión: {}", e);
            return Err(FormError::Rejected(LOGIN_FAILED.to_string()));
        }
        self.state.session.set_auth(user.clone(), token);
        self.state.notify_subscribers();

        log::info!("✅ Sesión iniciada: {}", user.username);
        self.navigator.navigate(HOME_ROUTE);
        Ok(user)
    }

    /// Registro + login con las mismas credenciales
    pub async fn register(&self, form: &RegisterRequest) -> Result<UserProfile, FormError> {
        if !form.passwords_match() {
            return Err(FormError::PasswordMismatch);
        }

        self.api.register(form).await.map_err(|e| {
            log::warn!("⚠️ Registro rechazado: {}", e);
            FormError::from_api(&e, REGISTER_FAILED)
        })?;
        log::info!("✅ Usuario registrado: {}", form.username);

        self.login(&form.username, &form.password).await
    }

    /// Recarga de página: la credencial ya está en el store, falta la identidad.
    /// Si mientras tanto hubo logout o un login nuevo, la respuesta se descarta.
    pub async fn restore(&self) -> Result<Option<UserProfile>, ApiError> {
        let token = match self.state.session.get_token() {
            Some(token) => token,
            None => return Ok(None),
        };
        if let Some(user) = self.state.session.get_user() {
            return Ok(Some(user));
        }

        log::info!("🔄 Recuperando usuario de la sesión restaurada...");
        let user = self.api.get_me().await?;
        if self.state.session.get_token().as_deref() != Some(token.as_str()) {
            log::info!("↩️ La sesión cambió durante la recuperación: se descarta el usuario");
            return Ok(None);
        }
        if let Err(e) = self.persistence.save_user(&user) {
            log::warn!("⚠️ No se pudo guardar el usuario: {}", e);
        }
        self.state.session.set_user(Some(user.clone()));
        self.state.notify_subscribers();
        Ok(Some(user))
    }

    /// Idempotente
    pub fn logout(&self) {
        if let Err(e) = self.persistence.clear() {
            log::error!("❌ Error limpiando storage en logout: {}", e);
        }
        self.state.session.logout();
        self.state.notify_subscribers();
        log::info!("👋 Sesión cerrada");
    }

    pub async fn update_profile(
        &self,
        profile_id: i64,
        update: &ProfileUpdate,
    ) -> Result<Profile, FormError> {
        self.api
            .update_profile(profile_id, update)
            .await
            .map_err(|e| FormError::from_api(&e, PROFILE_UPDATE_FAILED))
    }
}
