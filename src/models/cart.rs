use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::models::{Flight, Pod};

/// Referencia ligera a un vuelo (no un alias del objeto del catálogo)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightRef {
    pub id: i64,
    pub flight_number: String,
    pub price_credits: f64,
}

impl From<&Flight> for FlightRef {
    fn from(flight: &Flight) -> Self {
        Self {
            id: flight.id,
            flight_number: flight.flight_number.clone(),
            price_credits: flight.price_credits,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PodRef {
    pub id: i64,
    pub pod_number: String,
    pub pod_type: String,
    pub price_credits: f64,
}

impl From<&Pod> for PodRef {
    fn from(pod: &Pod) -> Self {
        Self {
            id: pod.id,
            pod_number: pod.pod_number.clone(),
            pod_type: pod.pod_type.clone(),
            price_credits: pod.price_credits,
        }
    }
}

/// Selección de reserva en curso (sin enviar)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub flight: Option<FlightRef>,
    pub pod: Option<PodRef>,
    pub passengers: NonZeroU32,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            flight: None,
            pod: None,
            passengers: NonZeroU32::MIN,
        }
    }
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.flight.is_none() && self.pod.is_none()
    }

    /// Estimación mostrada antes de enviar; el precio real lo fija el servidor
    pub fn estimated_total(&self) -> f64 {
        let per_passenger = self.flight.as_ref().map_or(0.0, |f| f.price_credits)
            + self.pod.as_ref().map_or(0.0, |p| p.price_credits);
        per_passenger * f64::from(self.passengers.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cart_has_one_passenger() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.passengers.get(), 1);
        assert_eq!(cart.estimated_total(), 0.0);
    }

    #[test]
    fn estimated_total_scales_with_passengers() {
        let cart = Cart {
            flight: Some(FlightRef {
                id: 1,
                flight_number: "CE-001".to_string(),
                price_credits: 20_000.0,
            }),
            pod: Some(PodRef {
                id: 2,
                pod_number: "S-01".to_string(),
                pod_type: "standard".to_string(),
                price_credits: 5_000.0,
            }),
            passengers: NonZeroU32::new(3).unwrap(),
        };
        assert_eq!(cart.estimated_total(), 75_000.0);
    }
}
