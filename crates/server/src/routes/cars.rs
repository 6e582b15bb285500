use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::booking::Booking;
use models::car::{parse_car_id, Car};
use serde::Deserialize;
use service::booking::domain::Availability;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CarQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// `GET /cars?q=&category=`
pub async fn list_cars(State(state): State<AppState>, Query(query): Query<CarQuery>) -> Json<Vec<Car>> {
    let q = query.q.unwrap_or_default();
    let category = query.category.unwrap_or_default();
    Json(state.catalog.list(&q, &category))
}

/// `GET /cars/:car_id/bookings`; an id that does not parse has no bookings.
pub async fn car_bookings(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = match parse_car_id(&car_id) {
        Some(id) => state.bookings.list_for_car(id).await?,
        None => Vec::new(),
    };
    Ok(Json(bookings))
}

/// `GET /cars/:car_id/availability`: the booked intervals of the car.
pub async fn car_availability(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> Result<Json<Availability>, ApiError> {
    let availability = state.bookings.availability(parse_car_id(&car_id)).await?;
    Ok(Json(availability))
}
