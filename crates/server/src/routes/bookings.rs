use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use models::booking::Booking;
use service::booking::domain::CreateBookingInput;
use tracing::debug;

use crate::errors::ApiError;
use crate::state::AppState;

/// `POST /bookings`
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        debug!(error = %rejection, "booking body rejected");
        ApiError::BadRequest("Invalid JSON body".into())
    })?;
    let booking = state.bookings.create(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// `GET /bookings`
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, ApiError> {
    Ok(Json(state.bookings.list().await?))
}
