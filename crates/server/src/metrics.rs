use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static HEALTH_CHECKS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "user_registry_health_checks_total",
        "Total liveness requests served"
    )
    .expect("register health_checks_total")
});

pub static USERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "user_registry_users_created_total",
        "Total users persisted through POST /users"
    )
    .expect("register users_created_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "user_registry_store_errors_total",
        "Total requests failed by the user store"
    )
    .expect("register store_errors_total")
});

/// Force registration so every series shows up on the first scrape.
pub fn init() {
    Lazy::force(&HEALTH_CHECKS_TOTAL);
    Lazy::force(&USERS_CREATED_TOTAL);
    Lazy::force(&STORE_ERRORS_TOTAL);
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
