use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Planet, Pod};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Scheduled,
    InProgress,
    #[serde(other)]
    Other,
}

impl Default for FlightStatus {
    fn default() -> Self {
        FlightStatus::Scheduled
    }
}

/// Vuelo: solo lectura, se pide en cada página y no se cachea
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: i64,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub origin_planet: Option<Planet>,
    #[serde(default)]
    pub destination_planet: Option<Planet>,
    #[serde(default)]
    pub departure_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub arrival_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub seats_available: u32,
    #[serde(default)]
    pub seats_total: u32,
    #[serde(deserialize_with = "crate::models::decimal::deserialize")]
    pub price_credits: f64,
    #[serde(default)]
    pub status: FlightStatus,
    #[serde(default)]
    pub pods: Vec<Pod>,
}

impl Flight {
    pub fn origin_id(&self) -> Option<i64> {
        self.origin_planet.as_ref().map(|p| p.id)
    }

    pub fn destination_id(&self) -> Option<i64> {
        self.destination_planet.as_ref().map(|p| p.id)
    }

    pub fn is_sold_out(&self) -> bool {
        self.seats_available == 0
    }

    /// "Mars → Europa"
    pub fn route_label(&self) -> String {
        let name = |planet: &Option<Planet>| {
            planet
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown".to_string())
        };
        format!("{} → {}", name(&self.origin_planet), name(&self.destination_planet))
    }
}

/// Query params de `GET /flights/` (slugs de planeta)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl FlightQuery {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(origin) = self.origin.as_deref().filter(|s| !s.is_empty()) {
            params.push(("origin".to_string(), origin.to_string()));
        }
        if let Some(destination) = self.destination.as_deref().filter(|s| !s.is_empty()) {
            params.push(("destination".to_string(), destination.to_string()));
        }
        params
    }
}

/// Body de `POST /flights/`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub origin_planet_id: i64,
    pub destination_planet_id: i64,
    pub departure_datetime: DateTime<Utc>,
    pub arrival_datetime: DateTime<Utc>,
    pub seats_total: u32,
    pub seats_available: u32,
    pub price_credits: f64,
}

#[cfg(test)]
pub(crate) fn flight_fixture(id: i64, origin: &Planet, destination: &Planet, price: f64) -> Flight {
    Flight {
        id,
        flight_number: format!("CE-{:03}", id),
        origin_planet: Some(origin.clone()),
        destination_planet: Some(destination.clone()),
        departure_datetime: None,
        arrival_datetime: None,
        seats_available: 42,
        seats_total: 200,
        price_credits: price,
        status: FlightStatus::Scheduled,
        pods: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_flight() {
        let json = r#"{
            "id": 12,
            "flight_number": "CE-012",
            "origin_planet": {"id": 1, "slug": "earth", "name": "Earth"},
            "destination_planet": {"id": 4, "slug": "mars", "name": "Mars"},
            "departure_datetime": "2026-03-01T08:15:00Z",
            "arrival_datetime": "2026-09-27T08:15:00+00:00",
            "seats_total": 200,
            "seats_available": 0,
            "price_credits": "24500.00",
            "status": "in_progress",
            "pods": []
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();
        assert_eq!(flight.origin_id(), Some(1));
        assert_eq!(flight.destination_id(), Some(4));
        assert_eq!(flight.status, FlightStatus::InProgress);
        assert_eq!(flight.price_credits, 24500.0);
        assert!(flight.is_sold_out());
        assert_eq!(flight.route_label(), "Earth → Mars");
    }

    #[test]
    fn unknown_status_maps_to_other() {
        let flight: Flight =
            serde_json::from_str(r#"{"id": 1, "price_credits": 10, "status": "delayed"}"#).unwrap();
        assert_eq!(flight.status, FlightStatus::Other);
        assert_eq!(flight.route_label(), "Unknown → Unknown");
    }

    #[test]
    fn query_skips_empty_slugs() {
        let query = FlightQuery {
            origin: Some("earth".to_string()),
            destination: Some(String::new()),
        };
        assert_eq!(query.to_params(), vec![("origin".to_string(), "earth".to_string())]);
        assert!(FlightQuery::default().to_params().is_empty());
    }
}
