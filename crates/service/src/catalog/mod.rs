//! Static car catalog, loaded once at startup and read-only afterwards.

use std::path::Path;

use models::car::{validate_catalog, Car, CarId};
use tokio::fs;
use tracing::{debug, info};

use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct CatalogService {
    cars: Vec<Car>,
}

impl CatalogService {
    pub fn new(cars: Vec<Car>) -> Result<Self, ServiceError> {
        validate_catalog(&cars)?;
        Ok(Self { cars })
    }

    /// Read a JSON array of cars from `path`.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .await
            .map_err(|e| ServiceError::Io(format!("{}: {e}", path.display())))?;
        let cars: Vec<Car> = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Parse(format!("{}: {e}", path.display())))?;
        let catalog = Self::new(cars)?;
        info!(path = %path.display(), cars = catalog.len(), "catalog_loaded");
        Ok(catalog)
    }

    /// Cars whose name contains `query` and whose category equals `category`,
    /// both case-insensitive; an empty input disables that filter. Catalog order is kept.
    pub fn list(&self, query: &str, category: &str) -> Vec<Car> {
        common::metrics::record_catalog_query();
        let found: Vec<Car> = self
            .cars
            .iter()
            .filter(|car| car.matches(query, category))
            .cloned()
            .collect();
        debug!(%query, %category, count = found.len(), "catalog_list");
        found
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
