use chrono::{DateTime, Utc};
use models::booking::{Booking, BookingId, BookingSpan};
use models::car::{parse_car_id, CarId};
use models::datetime::parse_instant;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::errors::BookingError;

/// `carId` as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum CarIdInput {
    Number(f64),
    Text(String),
    /// Present but neither number nor string (`true`, `{}`); never resolves.
    Other,
}

impl CarIdInput {
    /// Blank strings and zero count as not supplied.
    fn is_blank(&self) -> bool {
        match self {
            CarIdInput::Text(s) => s.trim().is_empty(),
            CarIdInput::Number(n) => *n == 0.0 || n.is_nan(),
            CarIdInput::Other => false,
        }
    }

    /// Integer part of a number, or the leading digits of a string.
    pub fn resolve(&self) -> Option<CarId> {
        match self {
            CarIdInput::Number(n) if n.is_finite() => Some(n.trunc() as CarId),
            CarIdInput::Number(_) | CarIdInput::Other => None,
            CarIdInput::Text(s) => parse_car_id(s),
        }
    }
}

impl From<CarId> for CarIdInput {
    fn from(id: CarId) -> Self {
        CarIdInput::Number(id as f64)
    }
}

fn car_id_input<'de, D>(d: D) -> Result<Option<CarIdInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) => n.as_f64().map(CarIdInput::Number),
        Value::String(s) => Some(CarIdInput::Text(s)),
        _ => Some(CarIdInput::Other),
    })
}

// Non-string values count as missing.
fn text_input<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingInput {
    #[serde(default, deserialize_with = "car_id_input")]
    pub car_id: Option<CarIdInput>,
    #[serde(default, deserialize_with = "text_input")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "text_input")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "text_input")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "text_input")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_input")]
    pub phone: Option<String>,
}

/// Contact details of the person renting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renter {
    pub user: String,
    pub email: String,
    pub phone: String,
}

/// Output of the request-shape checks; the car is not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub car_id: Option<CarId>,
    pub span: BookingSpan,
    pub renter: Renter,
}

fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl CreateBookingInput {
    /// Presence, then date format, then range.
    pub fn validate(&self) -> Result<ValidatedBooking, BookingError> {
        let car_id = self.car_id.as_ref().filter(|id| !id.is_blank());
        let (Some(car_id), Some(from), Some(to), Some(user), Some(email), Some(phone)) = (
            car_id,
            filled(&self.from),
            filled(&self.to),
            filled(&self.user),
            filled(&self.email),
            filled(&self.phone),
        ) else {
            return Err(BookingError::MissingFields);
        };

        let (Ok(start), Ok(end)) = (parse_instant(from), parse_instant(to)) else {
            return Err(BookingError::InvalidDateFormat);
        };
        let span = BookingSpan::new(start, end)?;

        Ok(ValidatedBooking {
            car_id: car_id.resolve(),
            span,
            renter: Renter { user: user.to_string(), email: email.to_string(), phone: phone.to_string() },
        })
    }
}

/// Everything a booking needs except its id and creation time, which the
/// repository assigns inside its critical section.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub car_id: CarId,
    pub span: BookingSpan,
    pub renter: Renter,
    pub car_name: String,
    pub car_image: String,
    pub total_price: f64,
}

impl NewBooking {
    pub fn into_booking(self, id: BookingId, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            car_id: self.car_id,
            from: self.span.from,
            to: self.span.to,
            user: self.renter.user,
            email: self.renter.email,
            phone: self.renter.phone,
            car_name: self.car_name,
            car_image: self.car_image,
            total_price: self.total_price,
            created_at,
        }
    }
}

/// First existing booking (in creation order) whose span overlaps `span`.
pub fn find_conflict<'a>(existing: &'a [Booking], span: &BookingSpan) -> Option<&'a Booking> {
    existing.iter().find(|b| b.span().overlaps(span))
}

/// Booked intervals of one car. Despite the name these are the taken slots, not the free ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub car_id: Option<CarId>,
    pub booked_dates: Vec<BookingSpan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(v: Value) -> CreateBookingInput {
        serde_json::from_value(v).unwrap()
    }

    fn full() -> Value {
        json!({
            "carId": 1,
            "from": "2024-01-01T10:00",
            "to": "2024-01-02T10:00",
            "user": "Ana",
            "email": "ana@example.com",
            "phone": "+96550000000"
        })
    }

    #[test]
    fn complete_input_validates() {
        let v = input(full()).validate().unwrap();
        assert_eq!(v.car_id, Some(1));
        assert_eq!(v.span.billable_days(), 1);
        assert_eq!(v.renter.user, "Ana");
    }

    #[test]
    fn each_missing_field_is_reported() {
        for key in ["carId", "from", "to", "user", "email", "phone"] {
            let mut v = full();
            v.as_object_mut().unwrap().remove(key);
            assert_eq!(input(v).validate(), Err(BookingError::MissingFields), "{key}");

            let mut v = full();
            v[key] = json!("  ");
            assert_eq!(input(v).validate(), Err(BookingError::MissingFields), "{key} blank");
        }
    }

    #[test]
    fn null_and_non_string_text_count_as_missing() {
        let mut v = full();
        v["user"] = json!(42);
        assert_eq!(input(v).validate(), Err(BookingError::MissingFields));
        let mut v = full();
        v["carId"] = Value::Null;
        assert_eq!(input(v).validate(), Err(BookingError::MissingFields));
    }

    #[test]
    fn falsy_car_id_counts_as_missing() {
        for falsy in [json!(0), json!(0.0), json!(false)] {
            let mut v = full();
            v["carId"] = falsy.clone();
            assert_eq!(input(v).validate(), Err(BookingError::MissingFields), "{falsy}");
        }

        let mut v = full();
        v["carId"] = json!("0");
        assert_eq!(input(v).validate().unwrap().car_id, Some(0));

        let mut v = full();
        v["carId"] = json!(true);
        assert_eq!(input(v).validate().unwrap().car_id, None);
    }

    #[test]
    fn missing_fields_win_over_bad_dates() {
        let mut v = full();
        v["from"] = json!("garbage");
        v.as_object_mut().unwrap().remove("phone");
        assert_eq!(input(v).validate(), Err(BookingError::MissingFields));
    }

    #[test]
    fn bad_dates_then_bad_range() {
        let mut v = full();
        v["to"] = json!("not a date");
        assert_eq!(input(v).validate(), Err(BookingError::InvalidDateFormat));

        let mut v = full();
        v["to"] = v["from"].clone();
        assert_eq!(input(v).validate(), Err(BookingError::InvalidRange));

        let mut v = full();
        v["from"] = json!("2024-01-05");
        v["to"] = json!("2024-01-01");
        assert_eq!(input(v).validate(), Err(BookingError::InvalidRange));
    }

    #[test]
    fn car_id_accepts_strings_and_numbers() {
        let mut v = full();
        v["carId"] = json!("3");
        assert_eq!(input(v).validate().unwrap().car_id, Some(3));

        let mut v = full();
        v["carId"] = json!("4 doors");
        assert_eq!(input(v).validate().unwrap().car_id, Some(4));

        let mut v = full();
        v["carId"] = json!(2.9);
        assert_eq!(input(v).validate().unwrap().car_id, Some(2));

        // present but unresolvable: passes presence, fails later as not found
        let mut v = full();
        v["carId"] = json!("abc");
        assert_eq!(input(v).validate().unwrap().car_id, None);

        let mut v = full();
        v["carId"] = json!(true);
        assert_eq!(input(v).validate().unwrap().car_id, None);
    }

    #[test]
    fn availability_serializes_camel_case() {
        let a = Availability { car_id: Some(7), booked_dates: vec![] };
        assert_eq!(serde_json::to_value(&a).unwrap(), json!({ "carId": 7, "bookedDates": [] }));
    }
}
