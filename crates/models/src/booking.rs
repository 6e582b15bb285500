use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::car::CarId;
use crate::errors::ModelError;

pub type BookingId = u64;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Rental interval `[from, to)` with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSpan {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl BookingSpan {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self, ModelError> {
        if from >= to {
            return Err(ModelError::InvalidRange);
        }
        Ok(Self { from, to })
    }

    /// Boundary-inclusive on both ends: a span ending exactly when another
    /// starts still overlaps it.
    pub fn overlaps(&self, other: &BookingSpan) -> bool {
        self.from <= other.to && self.to >= other.from
    }

    /// Whole days billed, partial days rounded up.
    pub fn billable_days(&self) -> i64 {
        let millis = (self.to - self.from).num_milliseconds().abs();
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }
}

/// A confirmed booking; never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub car_id: CarId,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub user: String,
    pub email: String,
    pub phone: String,
    pub car_name: String,
    pub car_image: String,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn span(&self) -> BookingSpan {
        BookingSpan { from: self.from, to: self.to }
    }
}
