use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identidad del usuario (`GET /users/me/`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Nombre para el saludo del dashboard
    pub fn display_name(&self) -> &str {
        if !self.first_name.trim().is_empty() {
            &self.first_name
        } else if !self.username.trim().is_empty() {
            &self.username
        } else {
            "Traveler"
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Perfil de viajero (`/profiles/me/`, `/profiles/{id}/`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub passport_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub preferred_pod_type: Option<String>,
    #[serde(default, deserialize_with = "crate::models::decimal::deserialize_or_zero")]
    pub credits_balance: f64,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body de `PUT /profiles/{id}/`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub bio: String,
    pub passport_id: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_pod_type: Option<String>,
}

impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            bio: profile.bio.clone(),
            passport_id: profile.passport_id.clone(),
            phone: profile.phone.clone(),
            preferred_pod_type: profile.preferred_pod_type.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn user_fixture(id: i64, username: &str) -> UserProfile {
    UserProfile {
        id,
        username: username.to_string(),
        email: format!("{}@celestial.test", username),
        first_name: String::new(),
        last_name: String::new(),
        date_joined: None,
    }
}
