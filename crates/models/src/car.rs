use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub type CarId = i64;

/// A rentable car from the static catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub name: String,
    pub category: String,
    /// Price per day.
    pub price: f64,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
}

impl Car {
    /// Case-insensitive name substring and category equality; empty inputs match everything.
    pub fn matches(&self, query: &str, category: &str) -> bool {
        let name_ok = query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase());
        let category_ok = category.is_empty() || self.category.to_lowercase() == category.to_lowercase();
        name_ok && category_ok
    }
}

/// Reject catalogs with duplicate ids or prices that are negative or not finite.
pub fn validate_catalog(cars: &[Car]) -> Result<(), ModelError> {
    let mut seen = HashSet::with_capacity(cars.len());
    for car in cars {
        if !seen.insert(car.id) {
            return Err(ModelError::Validation(format!("duplicate car id {}", car.id)));
        }
        if !car.price.is_finite() || car.price < 0.0 {
            return Err(ModelError::Validation(format!("car {} has invalid price {}", car.id, car.price)));
        }
    }
    Ok(())
}

/// Lenient integer read: optional leading whitespace and sign, then as many
/// digits as are present. `"7"`, `" 7 "` and `"7abc"` all give 7; `"abc"` gives None.
pub fn parse_car_id(raw: &str) -> Option<CarId> {
    let s = raw.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<CarId>().ok().map(|n| sign * n)
}
