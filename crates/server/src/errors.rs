use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use serde_json::json;
use service::booking::BookingError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const INTERNAL_MESSAGE: &str = "Something went wrong!";
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";

/// Errors a handler can return; each maps to one JSON error shape.
#[derive(Debug)]
pub enum ApiError {
    Booking(BookingError),
    BadRequest(String),
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        ApiError::Booking(e)
    }
}

fn message(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(MessageBody::new(msg))).into_response()
}

fn internal(detail: &str) -> Response {
    error!(error = %detail, "request failed");
    message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Booking(e) => match &e {
                BookingError::MissingFields
                | BookingError::InvalidDateFormat
                | BookingError::InvalidRange => message(StatusCode::BAD_REQUEST, e.to_string()),
                BookingError::ItemNotFound => message(StatusCode::NOT_FOUND, e.to_string()),
                BookingError::Conflict { conflicting } => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": e.to_string(), "conflictingDates": conflicting })),
                )
                    .into_response(),
                BookingError::Internal(detail) => internal(detail),
            },
            ApiError::BadRequest(msg) => message(StatusCode::BAD_REQUEST, msg),
        }
    }
}

/// 404 for anything the router does not know.
pub async fn not_found() -> Response {
    message(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Turns a handler panic into the opaque 500 payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    internal(&detail)
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("catalog: {0}")]
    Catalog(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use chrono::{TimeZone, Utc};
    use models::booking::BookingSpan;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_errors_are_400() {
        for e in [BookingError::MissingFields, BookingError::InvalidDateFormat, BookingError::InvalidRange] {
            let msg = e.to_string();
            let resp = ApiError::from(e).into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_json(resp).await, json!({ "message": msg }));
        }
    }

    #[tokio::test]
    async fn conflict_carries_dates() {
        let conflicting = BookingSpan::new(
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let resp = ApiError::from(BookingError::Conflict { conflicting }).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("2024-02-01"));
        let back: BookingSpan = serde_json::from_value(body["conflictingDates"].clone()).unwrap();
        assert_eq!(back, conflicting);
    }

    #[tokio::test]
    async fn internal_details_are_hidden() {
        let resp = ApiError::from(BookingError::Internal("lock poisoned".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await, json!({ "message": INTERNAL_MESSAGE }));
    }

    #[tokio::test]
    async fn panic_payload_becomes_500() {
        let resp = handle_panic(Box::new("boom"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await, json!({ "message": INTERNAL_MESSAGE }));
    }
}
