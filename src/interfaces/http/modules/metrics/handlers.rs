//! Prometheus scrape endpoint
//!
//! Renders the global `metrics-exporter-prometheus` recorder after
//! refreshing the fleet and ledger gauges from the booking service.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::application::SharedBookingService;

#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub service: SharedBookingService,
}

/// Set `rental_users`, `rental_items` and `rental_bookings` from one
/// consistent snapshot.
pub fn record_rental_gauges(service: &SharedBookingService) {
    let stats = service.stats();
    metrics::gauge!("rental_users").set(stats.users as f64);
    metrics::gauge!("rental_items").set(stats.items as f64);
    metrics::gauge!("rental_bookings").set(stats.bookings as f64);
}

/// `GET /metrics`
pub async fn prometheus_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    record_rental_gauges(&state.service);
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.handle.render(),
    )
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusBuilder;

    use super::*;
    use crate::interfaces::http::test_support::seeded_service;

    #[test]
    fn gauges_reflect_current_state() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let service = seeded_service();
        service.register_user("Alice", "alice@example.com");

        metrics::with_local_recorder(&recorder, || record_rental_gauges(&service));

        let rendered = handle.render();
        assert!(rendered.contains("rental_users 1"));
        assert!(rendered.contains("rental_items 3"));
        assert!(rendered.contains("rental_bookings 0"));
    }
}
