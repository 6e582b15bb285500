use chrono::{DateTime, Utc};
use models::booking::BookingSpan;
use models::errors::ModelError;
use thiserror::Error;

fn day(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Booking failures, in the order the checks run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("All fields are required: carId, from, to, user, email, phone")]
    MissingFields,
    #[error("Invalid date format")]
    InvalidDateFormat,
    #[error("End date must be after start date")]
    InvalidRange,
    #[error("Car not found")]
    ItemNotFound,
    #[error("Car is already booked from {} to {}. Please choose different dates.", day(.conflicting.from), day(.conflicting.to))]
    Conflict { conflicting: BookingSpan },
    #[error("internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            BookingError::MissingFields => 2001,
            BookingError::InvalidDateFormat => 2002,
            BookingError::InvalidRange => 2003,
            BookingError::ItemNotFound => 2004,
            BookingError::Conflict { .. } => 2005,
            BookingError::Internal(_) => 2100,
        }
    }

    /// Metric label.
    pub fn reason(&self) -> &'static str {
        match self {
            BookingError::MissingFields => "missing_fields",
            BookingError::InvalidDateFormat => "invalid_date_format",
            BookingError::InvalidRange => "invalid_range",
            BookingError::ItemNotFound => "item_not_found",
            BookingError::Conflict { .. } => "conflict",
            BookingError::Internal(_) => "internal",
        }
    }
}

impl From<ModelError> for BookingError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidDate(_) => BookingError::InvalidDateFormat,
            ModelError::InvalidRange => BookingError::InvalidRange,
            ModelError::Validation(msg) => BookingError::Internal(msg),
        }
    }
}
