use models::booking::BookingSpan;

/// `ceil(days) * price_per_day`; 25 hours bills as two days.
pub fn total_price(price_per_day: f64, span: &BookingSpan) -> f64 {
    span.billable_days() as f64 * price_per_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn span(from: (u32, u32), to: (u32, u32)) -> BookingSpan {
        BookingSpan::new(
            Utc.with_ymd_and_hms(2024, 1, from.0, from.1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, to.0, to.1, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn exact_day_bills_once() {
        assert_eq!(total_price(50.0, &span((1, 10), (2, 10))), 50.0);
    }

    #[test]
    fn partial_day_rounds_up() {
        assert_eq!(total_price(50.0, &span((1, 10), (2, 12))), 100.0);
        assert_eq!(total_price(50.0, &span((1, 10), (2, 11))), 100.0);
        assert_eq!(total_price(30.0, &span((1, 0), (1, 1))), 30.0);
    }

    #[test]
    fn free_car_costs_nothing() {
        assert_eq!(total_price(0.0, &span((1, 0), (9, 0))), 0.0);
    }
}
