use std::sync::Arc;

use models::booking::Booking;
use models::car::CarId;
use tracing::{info, instrument, warn};

use super::domain::{Availability, CreateBookingInput, NewBooking};
use super::errors::BookingError;
use super::pricing::total_price;
use super::repository::BookingRepository;
use crate::catalog::CatalogService;

/// Booking rules independent of the web framework.
pub struct BookingService<R: BookingRepository> {
    catalog: Arc<CatalogService>,
    repo: Arc<R>,
}

impl<R: BookingRepository> BookingService<R> {
    pub fn new(catalog: Arc<CatalogService>, repo: Arc<R>) -> Self {
        Self { catalog, repo }
    }

    /// Validate, resolve the car, price the rental and reserve it.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::booking::{BookingService, InMemoryBookingRepository};
    /// use service::booking::domain::CreateBookingInput;
    /// use service::catalog::CatalogService;
    /// use models::car::Car;
    ///
    /// let car = Car { id: 1, name: "Kia Picanto".into(), category: "Economy".into(), price: 50.0, image: "kia.jpg".into(), transmission: None };
    /// let catalog = Arc::new(CatalogService::new(vec![car]).unwrap());
    /// let svc = BookingService::new(catalog, Arc::new(InMemoryBookingRepository::new()));
    /// let input: CreateBookingInput = serde_json::from_value(serde_json::json!({
    ///     "carId": 1, "from": "2024-01-01T10:00", "to": "2024-01-02T12:00",
    ///     "user": "Ana", "email": "ana@example.com", "phone": "+96550000000"
    /// })).unwrap();
    /// let booking = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(booking.total_price, 100.0);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateBookingInput) -> Result<Booking, BookingError> {
        match self.try_create(input).await {
            Ok(booking) => {
                common::metrics::record_booking_created();
                info!(booking_id = booking.id, car_id = booking.car_id, total_price = booking.total_price, "booking_created");
                Ok(booking)
            }
            Err(e) => {
                common::metrics::record_booking_rejected(e.reason());
                match &e {
                    BookingError::Internal(msg) => warn!(error = %msg, "booking_failed"),
                    other => info!(reason = other.reason(), code = other.code(), "booking_rejected"),
                }
                Err(e)
            }
        }
    }

    async fn try_create(&self, input: CreateBookingInput) -> Result<Booking, BookingError> {
        let request = input.validate()?;
        let car = request
            .car_id
            .and_then(|id| self.catalog.get(id))
            .ok_or(BookingError::ItemNotFound)?;

        let draft = NewBooking {
            car_id: car.id,
            total_price: total_price(car.price, &request.span),
            span: request.span,
            renter: request.renter,
            car_name: car.name.clone(),
            car_image: car.image.clone(),
        };
        self.repo.reserve(draft).await
    }

    pub async fn list(&self) -> Result<Vec<Booking>, BookingError> {
        self.repo.list().await
    }

    pub async fn list_for_car(&self, car_id: CarId) -> Result<Vec<Booking>, BookingError> {
        self.repo.list_for_car(car_id).await
    }

    /// Booked intervals for `car_id`; an unknown or unparseable id simply has none.
    pub async fn availability(&self, car_id: Option<CarId>) -> Result<Availability, BookingError> {
        let booked_dates: Vec<_> = match car_id {
            Some(id) => self.repo.list_for_car(id).await?.iter().map(Booking::span).collect(),
            None => Vec::new(),
        };
        Ok(Availability { car_id, booked_dates })
    }
}
