// ============================================================================
// CART STATE - Selección de reserva en curso
// ============================================================================
// Cada setter reemplaza un solo campo; sin validación en el store.
// ============================================================================

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;

use crate::models::{Cart, FlightRef, PodRef};

#[derive(Clone, Default)]
pub struct CartState {
    cart: Rc<RefCell<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_flight(&self, flight: Option<FlightRef>) {
        self.cart.borrow_mut().flight = flight;
    }

    pub fn set_pod(&self, pod: Option<PodRef>) {
        self.cart.borrow_mut().pod = pod;
    }

    pub fn set_passengers(&self, passengers: NonZeroU32) {
        self.cart.borrow_mut().passengers = passengers;
    }

    pub fn clear_cart(&self) {
        *self.cart.borrow_mut() = Cart::default();
    }

    pub fn get_cart(&self) -> Cart {
        self.cart.borrow().clone()
    }
}
