#![cfg(test)]
use models::car::Car;

pub fn car(id: i64, name: &str, category: &str, price: f64) -> Car {
    Car {
        id,
        name: name.into(),
        category: category.into(),
        price,
        image: format!("https://img.example.com/cars/{id}.jpg"),
        transmission: Some("Automatic".into()),
    }
}

pub fn sample_cars() -> Vec<Car> {
    vec![
        car(1, "Toyota RAV4 SUV", "SUV", 50.0),
        car(2, "Honda Civic", "Sedan", 25.0),
        car(3, "Mercedes S-Class", "Luxury", 120.0),
        car(4, "Nissan Patrol suv", "Luxury", 90.0),
    ]
}
