pub mod errors;
pub mod car;
pub mod booking;
pub mod datetime;

pub use booking::{Booking, BookingId, BookingSpan};
pub use car::{Car, CarId};
