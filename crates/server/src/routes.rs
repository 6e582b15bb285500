use std::collections::BTreeMap;

use axum::{
    routing::{get, post},
    Json, Router,
};
use common::types::{ApiInfo, Health};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors;
use crate::state::AppState;

pub mod bookings;
pub mod cars;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn index() -> Json<ApiInfo> {
    let endpoints = BTreeMap::from([
        ("cars", "GET /cars?q=&category="),
        ("bookings", "POST /bookings"),
        ("allBookings", "GET /bookings"),
        ("carBookings", "GET /cars/:carId/bookings"),
        ("availability", "GET /cars/:carId/availability"),
    ]);
    Json(ApiInfo { message: "Car Rental API is running", endpoints })
}

async fn metrics() -> (axum::http::StatusCode, String) {
    common::metrics::encode_metrics()
}

/// API routes only, with state applied; no middleware and no static assets.
///
/// A known path hit with an unsupported method answers like an unknown path.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).fallback(errors::not_found))
        .route("/health", get(health).fallback(errors::not_found))
        .route("/metrics", get(metrics).fallback(errors::not_found))
        .route("/cars", get(cars::list_cars).fallback(errors::not_found))
        .route("/cars/:car_id/bookings", get(cars::car_bookings).fallback(errors::not_found))
        .route("/cars/:car_id/availability", get(cars::car_availability).fallback(errors::not_found))
        .route(
            "/bookings",
            post(bookings::create_booking)
                .get(bookings::list_bookings)
                .fallback(errors::not_found),
        )
        .fallback(errors::not_found)
        .with_state(state)
}

/// Middleware stack: CORS, request tracing, panic-to-500.
pub fn with_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(CatchPanicLayer::custom(errors::handle_panic))
}

/// Build the full application router: API, the single-page UI under `/app`, and middleware.
pub fn build_router(state: AppState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let static_dir = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(format!("{frontend_dir}/index.html")));

    let app = api_router(state).nest_service("/app", static_dir);
    with_layers(app, cors)
}
