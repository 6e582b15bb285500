//! Prometheus metrics for the booking service (default registry).

use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

pub static BOOKINGS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "car_rental_bookings_created_total",
        "Total bookings committed"
    )
    .expect("register bookings_created_total")
});

pub static BOOKING_REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "car_rental_booking_rejections_total",
        "Total booking attempts rejected, by reason",
        &["reason"]
    )
    .expect("register booking_rejections_total")
});

pub static CATALOG_QUERIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "car_rental_catalog_queries_total",
        "Total catalog list/filter queries"
    )
    .expect("register catalog_queries_total")
});

pub fn record_booking_created() {
    BOOKINGS_CREATED_TOTAL.inc();
}

pub fn record_booking_rejected(reason: &str) {
    BOOKING_REJECTIONS_TOTAL.with_label_values(&[reason]).inc();
}

pub fn record_catalog_query() {
    CATALOG_QUERIES_TOTAL.inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
