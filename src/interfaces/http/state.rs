//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use crate::application::{QuerySurface, SharedBookingService};

/// State handed to every rental route. Writes go through `service`,
/// reads through `queries`.
#[derive(Clone)]
pub struct RentalAppState {
    pub service: SharedBookingService,
    pub queries: QuerySurface,
    pub started_at: Arc<Instant>,
}

impl RentalAppState {
    pub fn new(service: SharedBookingService) -> Self {
        Self {
            queries: QuerySurface::new(service.clone()),
            service,
            started_at: Arc::new(Instant::now()),
        }
    }
}
