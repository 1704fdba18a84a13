//! API Router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::SharedBookingService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::bookings::{self, BookingDto, CreateBookingRequest};
use crate::interfaces::http::modules::health::{self, HealthResponse};
use crate::interfaces::http::modules::items::{
    self, AvailabilityDto, CreateItemRequest, ItemDto,
};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::users::{self, CreateUserRequest, UserDto};
use crate::interfaces::http::state::RentalAppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::register_user,
        users::get_user,
        // Items
        items::list_items,
        items::create_item,
        items::get_item,
        items::check_availability,
        items::list_item_bookings,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
    ),
    components(
        schemas(
            ApiResponse<String>,
            HealthResponse,
            CreateUserRequest,
            UserDto,
            CreateItemRequest,
            ItemDto,
            AvailabilityDto,
            CreateBookingRequest,
            BookingDto,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Users", description = "Customer registration"),
        (name = "Items", description = "Rentable fleet and availability"),
        (name = "Bookings", description = "Date-range reservations of items"),
    ),
    info(
        title = "Rental Service API",
        version = "1.0.0",
        description = "In-memory reservation manager for users, items and bookings",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus recorder handle is given.
pub fn create_api_router(
    service: SharedBookingService,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let state = RentalAppState::new(service.clone());

    let user_routes = Router::new()
        .route("/", post(users::register_user))
        .route("/{id}", get(users::get_user));

    let item_routes = Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/{id}", get(items::get_item))
        .route("/{id}/availability", get(items::check_availability))
        .route("/{id}/bookings", get(items::list_item_bookings));

    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/{id}", get(bookings::get_booking));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/items", item_routes)
        .nest("/api/v1/bookings", booking_routes)
        .with_state(state)
        .merge(swagger_routes);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(prometheus_metrics))
                .with_state(MetricsState {
                    handle,
                    service: service.clone(),
                }),
        );
    }

    router
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
