pub mod auth;
pub mod booking;
pub mod cart;
pub mod decimal;
pub mod flight;
pub mod list;
pub mod planet;
pub mod pod;
pub mod session;
pub mod user;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use booking::{Booking, BookingStatus, CreateBookingRequest};
pub use cart::{Cart, FlightRef, PodRef};
pub use flight::{CreateFlightRequest, Flight, FlightQuery, FlightStatus};
pub use list::ListResponse;
pub use planet::Planet;
pub use pod::{Pod, PodQuery};
pub use session::Session;
pub use user::{Profile, ProfileUpdate, UserProfile};
