//! Helpers for driving the full router in handler tests

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::Service;

use super::create_api_router;
use crate::application::{BookingService, SharedBookingService};

/// Service seeded with the three demo cars, no users
pub fn seeded_service() -> SharedBookingService {
    let service = BookingService::shared();
    service.register_item("Peugeot 208", "Economy", Decimal::new(45, 0));
    service.register_item("BMW X5", "SUV", Decimal::new(120, 0));
    service.register_item("Tesla Model 3", "Electric", Decimal::new(150, 0));
    service
}

pub async fn send(service: &SharedBookingService, req: Request<Body>) -> Response<Body> {
    let mut svc = create_api_router(service.clone(), None).into_service();
    svc.call(req).await.unwrap()
}

pub async fn get(service: &SharedBookingService, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    read(send(service, req).await).await
}

pub async fn post_json(service: &SharedBookingService, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    read(send(service, req).await).await
}

async fn read(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
