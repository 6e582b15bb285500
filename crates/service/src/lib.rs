//! Service layer for the car rental API.
//! - `catalog`: the read-only car list and its filters.
//! - `booking`: booking rules (validation, conflict detection, pricing) over a repository seam.

pub mod errors;
pub mod catalog;
pub mod booking;
#[cfg(test)]
pub mod test_support;
