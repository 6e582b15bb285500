use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use models::booking::Booking;
use models::car::CarId;

use super::domain::{find_conflict, NewBooking};
use super::errors::BookingError;

/// Storage abstraction for bookings.
///
/// `reserve` must run the overlap check and the append as one critical
/// section for the draft's car.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Append `draft` with the next id, or return `Conflict` with the first overlapping booking.
    async fn reserve(&self, draft: NewBooking) -> Result<Booking, BookingError>;
    /// Every booking, in creation order.
    async fn list(&self) -> Result<Vec<Booking>, BookingError>;
    /// Bookings of one car, in creation order.
    async fn list_for_car(&self, car_id: CarId) -> Result<Vec<Booking>, BookingError>;
}

/// Process-memory store, one booking list per car.
///
/// The `DashMap` entry guard taken in `reserve` locks that car's shard for
/// the check, id allocation and push; nothing awaits while it is held.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    by_car: DashMap<CarId, Vec<Booking>>,
    last_id: AtomicU64,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn reserve(&self, draft: NewBooking) -> Result<Booking, BookingError> {
        let mut bookings = self.by_car.entry(draft.car_id).or_default();
        if let Some(existing) = find_conflict(bookings.value(), &draft.span) {
            return Err(BookingError::Conflict { conflicting: existing.span() });
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let booking = draft.into_booking(id, Utc::now());
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list(&self) -> Result<Vec<Booking>, BookingError> {
        let mut all: Vec<Booking> = self
            .by_car
            .iter()
            .flat_map(|entry| entry.value().clone())
            .collect();
        // ids are handed out in creation order
        all.sort_by_key(|b| b.id);
        Ok(all)
    }

    async fn list_for_car(&self, car_id: CarId) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .by_car
            .get(&car_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
