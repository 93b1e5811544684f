use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Flight, Pod};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Other => "Unknown",
        }
    }
}

/// Reserva del usuario (listado del dashboard)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub flight: Option<Flight>,
    #[serde(default)]
    pub pod: Option<Pod>,
    #[serde(deserialize_with = "crate::models::decimal::deserialize")]
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn can_confirm(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// Body de `POST /bookings/`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateBookingRequest {
    pub flight_id: i64,
    pub pod_id: i64,
    pub passengers: u32,
}

#[cfg(test)]
pub(crate) fn booking_fixture(id: i64, status: BookingStatus) -> Booking {
    Booking {
        id,
        flight: None,
        pod: None,
        total_price: 15000.0,
        status,
        booked_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_booking_statuses() {
        let booking: Booking = serde_json::from_str(
            r#"{"id": 5, "flight": null, "pod": null, "total_price": "15000.00", "status": "confirmed"}"#,
        )
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(!booking.can_confirm());
        assert!(booking.can_cancel());

        let odd: Booking = serde_json::from_str(
            r#"{"id": 6, "total_price": 1, "status": "refunded"}"#,
        )
        .unwrap();
        assert_eq!(odd.status, BookingStatus::Other);
        assert_eq!(odd.status.label(), "Unknown");
        assert!(!odd.can_cancel());
    }
}
