// Mapping of backend feed records into catalog vehicles

use chrono::Datelike;

use crate::{
    error::TransformError,
    models::{BackendCar, Vehicle},
};

const EARLIEST_MODEL_YEAR: i64 = 1886;

// Converts one backend record. `id` is the catalog identifier assigned by the caller.
pub fn backend_to_vehicle(id: u64, car: BackendCar) -> Result<Vehicle, TransformError> {
    let price = car
        .precio
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| TransformError::InvalidPrice {
            plate: car.placa.clone(),
            price: car.precio.clone(),
        })?;

    let latest_model_year = i64::from(chrono::Utc::now().year()) + 1;
    if !(EARLIEST_MODEL_YEAR..=latest_model_year).contains(&car.year) {
        return Err(TransformError::ImplausibleYear { plate: car.placa, year: car.year });
    }
    let year = car.year as u32; // Range checked above

    let mileage = u32::try_from(car.kilometraje).map_err(|_| TransformError::InvalidMileage {
        plate: car.placa.clone(),
        mileage: car.kilometraje,
    })?;

    let images: Vec<String> = car.imagenes.into_iter().map(|img| img.url_imagen).collect();
    // Prefer the explicit cover image, then the first gallery image
    let image = if car.imagen.is_empty() {
        images.first().cloned().unwrap_or_default()
    } else {
        car.imagen
    };

    Ok(Vehicle {
        id,
        make: car.marca,
        model: car.modelo,
        year,
        price,
        mileage,
        fuel_type: String::new(), // Not part of the backend feed
        body_type: car.categoria.unwrap_or_default(),
        image,
        images,
        is_new: car.is_new == 1,
        transmission: String::new(),
        engine: String::new(),
        horsepower: None,
        acceleration: None,
        drive: None,
        exterior_color: car.color_exterior,
        interior_color: String::new(),
        fuel_economy: None,
        features: Vec::new(),
        description: String::new(),
        plate: Some(car.placa),
    })
}

/// Converts a whole feed, numbering vehicles 1.. in feed order.
///
/// Rejected records are logged and skipped; they do not consume an id.
pub fn transform_backend_cars(cars: Vec<BackendCar>) -> Vec<Vehicle> {
    let mut vehicles = Vec::with_capacity(cars.len());
    for car in cars {
        let next_id = vehicles.len() as u64 + 1;
        match backend_to_vehicle(next_id, car) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(e) => tracing::warn!(error = %e, "Skipping backend vehicle record"),
        }
    }
    vehicles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackendImage;

    fn backend_car(placa: &str, precio: &str, year: i64) -> BackendCar {
        BackendCar {
            placa: placa.to_string(),
            year,
            kilometraje: 12_500,
            precio: precio.to_string(),
            categoria: Some("Sedán".to_string()),
            color_exterior: "Negro Obsidiana".to_string(),
            imagen: String::new(),
            is_new: 0,
            marca: "Mercedes-Benz".to_string(),
            modelo: "Clase S".to_string(),
            imagenes: vec![
                BackendImage { url_imagen: "https://img.test/a.jpeg".to_string() },
                BackendImage { url_imagen: "https://img.test/b.jpeg".to_string() },
            ],
        }
    }

    #[test]
    fn maps_backend_fields() {
        let mut car = backend_car("ABC123", "109800.50", 2022);
        car.is_new = 1;
        let vehicle = backend_to_vehicle(3, car).unwrap();

        assert_eq!(vehicle.id, 3);
        assert_eq!(vehicle.make, "Mercedes-Benz");
        assert_eq!(vehicle.model, "Clase S");
        assert_eq!(vehicle.price, 109_800.5);
        assert_eq!(vehicle.mileage, 12_500);
        assert_eq!(vehicle.body_type, "Sedán");
        assert!(vehicle.is_new);
        assert_eq!(vehicle.plate.as_deref(), Some("ABC123"));
        assert_eq!(vehicle.image, "https://img.test/a.jpeg");
        assert_eq!(vehicle.images.len(), 2);
    }

    #[test]
    fn rejects_bad_price_and_year() {
        assert_eq!(
            backend_to_vehicle(1, backend_car("P1", "abc", 2022)),
            Err(TransformError::InvalidPrice { plate: "P1".to_string(), price: "abc".to_string() })
        );
        assert!(matches!(
            backend_to_vehicle(1, backend_car("P2", "-5", 2022)),
            Err(TransformError::InvalidPrice { .. })
        ));
        assert_eq!(
            backend_to_vehicle(1, backend_car("P3", "1000", 203)),
            Err(TransformError::ImplausibleYear { plate: "P3".to_string(), year: 203 })
        );
    }

    #[test]
    fn feed_ids_are_sequential_over_accepted_records() {
        let feed = vec![
            backend_car("A", "100", 2020),
            backend_car("B", "not a price", 2020),
            backend_car("C", "300", 2021),
        ];
        let vehicles = transform_backend_cars(feed);

        let plates: Vec<(u64, &str)> =
            vehicles.iter().map(|v| (v.id, v.plate.as_deref().unwrap_or(""))).collect();
        assert_eq!(plates, vec![(1, "A"), (2, "C")]);
    }

    #[test]
    fn parses_wire_format() {
        let json = r#"[{
            "placa": "XYZ987", "year": 2023, "kilometraje": 0, "precio": "84700.00",
            "categoria": "Coupé", "colorExterior": "Blanco Alpino", "serial_motor": "S1",
            "imagen": "https://img.test/cover.jpeg", "serial_carroceria": "S2", "isNew": 1,
            "marca": "BMW", "modelo": "M4 Competition",
            "imagenes": [{"id": 1, "url_imagen": "https://img.test/1.jpeg"}]
        }]"#;
        let feed: Vec<BackendCar> = serde_json::from_str(json).unwrap();
        let vehicles = transform_backend_cars(feed);

        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].image, "https://img.test/cover.jpeg");
        assert_eq!(vehicles[0].exterior_color, "Blanco Alpino");
        assert!(vehicles[0].is_new);
    }
}
