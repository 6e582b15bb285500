//! Booking module: three-layer split (domain, repository, service), plus pricing.
//!
//! The repository owns the per-car critical section that keeps bookings of
//! one car pairwise non-overlapping.

pub mod domain;
pub mod errors;
pub mod pricing;
pub mod repository;
pub mod service;

pub use errors::BookingError;
pub use repository::{BookingRepository, InMemoryBookingRepository};
pub use service::BookingService;
