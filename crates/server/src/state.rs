use std::sync::Arc;

use service::booking::{BookingService, InMemoryBookingRepository};
use service::catalog::CatalogService;

pub type Bookings = BookingService<InMemoryBookingRepository>;

/// Process-wide state: the read-only catalog and the booking service over it.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub bookings: Arc<Bookings>,
}

impl AppState {
    pub fn new(catalog: CatalogService) -> Self {
        let catalog = Arc::new(catalog);
        let repo = Arc::new(InMemoryBookingRepository::new());
        let bookings = Arc::new(BookingService::new(Arc::clone(&catalog), repo));
        Self { catalog, bookings }
    }
}
