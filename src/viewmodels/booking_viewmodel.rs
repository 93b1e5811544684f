// ============================================================================
// BOOKING VIEWMODEL - Envío del carrito como reserva
// ============================================================================

use std::rc::Rc;

use crate::models::{Booking, CreateBookingRequest};
use crate::services::{ApiClient, Navigator};
use crate::state::AppState;
use crate::utils::constants::LOGIN_ROUTE;
use crate::viewmodels::FormError;

const BOOKING_FAILED: &str = "Booking failed. Please try again.";

#[derive(Clone)]
pub struct BookingViewModel {
    api: ApiClient,
    state: AppState,
    navigator: Rc<dyn Navigator>,
}

impl BookingViewModel {
    pub fn new(api: ApiClient, state: AppState, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            api,
            state,
            navigator,
        }
    }

    /// POST /bookings/ con el contenido del carrito; si sale bien, se vacía
    pub async fn submit_cart(&self) -> Result<Booking, FormError> {
        let cart = self.state.cart.get_cart();
        let (Some(flight), Some(pod)) = (cart.flight, cart.pod) else {
            return Err(FormError::IncompleteCart);
        };

        if !self.state.session.is_authenticated() {
            self.navigator.navigate(LOGIN_ROUTE);
            return Err(FormError::LoginRequired);
        }

        let request = CreateBookingRequest {
            flight_id: flight.id,
            pod_id: pod.id,
            passengers: cart.passengers.get(),
        };
        let booking = self.api.create_booking(&request).await.map_err(|e| {
            log::error!("❌ Error creando reserva: {}", e);
            FormError::from_api(&e, BOOKING_FAILED)
        })?;

        log::info!("✅ Reserva {} creada", booking.id);
        self.state.cart.clear_cart();
        self.state.notify_subscribers();
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use futures::executor::block_on;

    use super::*;
    use crate::models::{BookingStatus, FlightRef, PodRef};
    use crate::services::api_client::testing::TestEnv;
    use crate::services::HttpMethod;

    fn fill_cart(env: &TestEnv) {
        env.state.cart.set_flight(Some(FlightRef {
            id: 10,
            flight_number: "CE-010".to_string(),
            price_credits: 24_000.0,
        }));
        env.state.cart.set_pod(Some(PodRef {
            id: 100,
            pod_number: "A1".to_string(),
            pod_type: "standard".to_string(),
            price_credits: 0.0,
        }));
        env.state
            .cart
            .set_passengers(NonZeroU32::new(2).unwrap());
    }

    fn booking_vm(env: &TestEnv) -> BookingViewModel {
        BookingViewModel::new(env.api.clone(), env.state.clone(), env.navigator.clone())
    }

    #[test]
    fn incomplete_cart_is_rejected_locally() {
        let env = TestEnv::logged_in("tok");
        env.state.cart.set_flight(Some(FlightRef {
            id: 10,
            flight_number: "CE-010".to_string(),
            price_credits: 24_000.0,
        }));

        let error = block_on(booking_vm(&env).submit_cart()).unwrap_err();
        assert_eq!(error, FormError::IncompleteCart);
        assert_eq!(env.transport.sent_count(), 0);
    }

    #[test]
    fn anonymous_user_is_sent_to_login() {
        let env = TestEnv::at_route("/flights");
        fill_cart(&env);

        let error = block_on(booking_vm(&env).submit_cart()).unwrap_err();
        assert_eq!(error, FormError::LoginRequired);
        assert_eq!(env.current_route(), "/login");
        assert!(!env.state.cart.get_cart().is_empty());
    }

    #[test]
    fn successful_submission_clears_cart() {
        let env = TestEnv::logged_in("tok");
        fill_cart(&env);
        env.transport.respond(
            HttpMethod::Post,
            "/bookings/",
            201,
            r#"{"id": 55, "total_price": "48000.00", "status": "pending"}"#,
        );

        let booking = block_on(booking_vm(&env).submit_cart()).unwrap();
        assert_eq!(booking.id, 55);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(env.state.cart.get_cart().is_empty());

        let sent = env.transport.sent();
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["flight_id"], 10);
        assert_eq!(body["pod_id"], 100);
        assert_eq!(body["passengers"], 2);
    }

    #[test]
    fn server_rejection_keeps_cart() {
        let env = TestEnv::logged_in("tok");
        fill_cart(&env);
        env.transport.respond(
            HttpMethod::Post,
            "/bookings/",
            400,
            r#"{"pod_id": ["This pod is already booked."]}"#,
        );

        let error = block_on(booking_vm(&env).submit_cart()).unwrap_err();
        assert_eq!(error.to_string(), "pod_id: This pod is already booked.");
        assert!(!env.state.cart.get_cart().is_empty());
    }
}
