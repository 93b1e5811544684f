use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cápsula (asiento) de un vuelo
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub id: i64,
    /// Id del vuelo al que pertenece
    #[serde(default)]
    pub flight: Option<i64>,
    #[serde(default)]
    pub pod_number: String,
    /// standard | luxury | cryo
    #[serde(default)]
    pub pod_type: String,
    #[serde(deserialize_with = "crate::models::decimal::deserialize")]
    pub price_credits: f64,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_available() -> bool {
    true
}

/// Query params de `GET /pods/`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PodQuery {
    pub flight: Option<i64>,
}

impl PodQuery {
    pub fn for_flight(flight_id: i64) -> Self {
        Self { flight: Some(flight_id) }
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(flight) = self.flight {
            params.push(("flight".to_string(), flight.to_string()));
        }
        params
    }
}
