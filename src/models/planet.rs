use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Planeta/luna del catálogo de destinos
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, deserialize_with = "crate::models::decimal::deserialize_or_zero")]
    pub distance_from_earth_km: f64,
    #[serde(default, deserialize_with = "crate::models::decimal::deserialize_or_zero")]
    pub travel_time_days: f64,
    #[serde(default)]
    pub gltf_model_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Planet {
    /// Ruta de detalle en la SPA
    pub fn detail_route(&self) -> String {
        format!("/planets/{}", self.slug)
    }
}

#[cfg(test)]
pub(crate) fn planet_fixture(id: i64, name: &str, distance: f64, travel_days: f64) -> Planet {
    Planet {
        id,
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        description: format!("{} destination", name),
        emoji: "🪐".to_string(),
        distance_from_earth_km: distance,
        travel_time_days: travel_days,
        gltf_model_url: None,
        created_at: None,
        updated_at: None,
    }
}
