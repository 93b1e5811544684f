use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// Sesión del cliente: identidad + credencial.
/// `is_authenticated()` se deriva del token, así que nunca diverge de él.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

impl Session {
    /// Sesión restaurada desde storage: credencial sin identidad
    pub fn restored(token: Option<String>) -> Self {
        Self { user: None, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
