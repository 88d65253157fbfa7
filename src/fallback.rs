// Built-in catalog used when no backend is configured or it cannot be reached

use once_cell::sync::Lazy;

use crate::models::Vehicle;

const GALLERY_PHOTO_IDS: [u64; 10] = [
    1545743, 244206, 2127039, 3802510, 6894428, 1104768, 1231643, 3729464, 2676096, 170811,
];

// Ten gallery images per car, offset by the car id so galleries differ
fn gallery_images(base_id: u64) -> Vec<String> {
    GALLERY_PHOTO_IDS
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let photo = id + base_id * 10 + index as u64;
            format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg")
        })
        .collect()
}

fn cover_image(photo: u64) -> String {
    format!("https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg")
}

struct Listing {
    id: u64,
    make: &'static str,
    model: &'static str,
    year: u32,
    price: f64,
    mileage: u32,
    fuel_type: &'static str,
    body_type: &'static str,
    cover: String,
    is_new: bool,
    transmission: &'static str,
    engine: &'static str,
    exterior_color: &'static str,
    interior_color: &'static str,
    description: &'static str,
}

impl Listing {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            id: self.id,
            make: self.make.to_string(),
            model: self.model.to_string(),
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            fuel_type: self.fuel_type.to_string(),
            body_type: self.body_type.to_string(),
            image: self.cover,
            images: gallery_images(self.id),
            is_new: self.is_new,
            transmission: self.transmission.to_string(),
            engine: self.engine.to_string(),
            horsepower: None,
            acceleration: None,
            drive: None,
            exterior_color: self.exterior_color.to_string(),
            interior_color: self.interior_color.to_string(),
            fuel_economy: None,
            features: Vec::new(),
            description: self.description.to_string(),
            plate: None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn build_catalog() -> Vec<Vehicle> {
    let listings = vec![
        Listing { id: 1, make: "BMW", model: "M4 Competition", year: 2023, price: 84700.0, mileage: 0, fuel_type: "Gasolina", body_type: "Coupé", cover: cover_image(1545743), is_new: true, transmission: "Automática", engine: "3.0L Twin-Turbo Inline-6", exterior_color: "Blanco Alpino", interior_color: "Negro/Rojo", description: "El BMW M4 Competition combina un diseño impresionante con un rendimiento extraordinario, con un potente motor twin-turbo y manejo de precisión." },
        Listing { id: 2, make: "Mercedes-Benz", model: "Clase S", year: 2022, price: 109800.0, mileage: 12500, fuel_type: "Híbrido", body_type: "Sedán", cover: cover_image(6894428), is_new: false, transmission: "Automática", engine: "3.0L Inline-6 + Motor Eléctrico", exterior_color: "Negro Obsidiana", interior_color: "Beige Macchiato", description: "El Mercedes-Benz Clase S representa la cúspide del lujo, comodidad y tecnología con su interior refinado y experiencia de conducción suave." },
        Listing { id: 3, make: "Audi", model: "e-tron GT", year: 2023, price: 102400.0, mileage: 5000, fuel_type: "Eléctrico", body_type: "Sedán", cover: cover_image(1035108), is_new: false, transmission: "Automática", engine: "Motores Eléctricos Duales", exterior_color: "Gris Daytona", interior_color: "Negro", description: "El Audi e-tron GT combina rendimiento eléctrico con usabilidad diaria, con tracción integral quattro y capacidad de carga rápida." },
        Listing { id: 4, make: "Porsche", model: "911 Carrera", year: 2023, price: 114000.0, mileage: 0, fuel_type: "Gasolina", body_type: "Coupé", cover: cover_image(3802508), is_new: true, transmission: "PDK", engine: "3.0L Twin-Turbo Flat-6", exterior_color: "Rojo Guards", interior_color: "Negro", description: "El icónico Porsche 911 Carrera ofrece una experiencia de conducción emocionante con su diseño de motor trasero y dinámica de manejo precisa." },
        Listing { id: 5, make: "Tesla", model: "Model S", year: 2023, price: 89990.0, mileage: 0, fuel_type: "Eléctrico", body_type: "Sedán", cover: "https://images.pexels.com/photos/13861/IMG_3496bfree.jpg".to_string(), is_new: true, transmission: "Automática", engine: "Motores Eléctricos Duales", exterior_color: "Blanco Perla", interior_color: "Negro", description: "El Tesla Model S redefine el vehículo eléctrico con tecnología de vanguardia, autonomía impresionante y capacidades de alto rendimiento." },
        Listing { id: 6, make: "Lexus", model: "RX 450h", year: 2022, price: 58400.0, mileage: 15000, fuel_type: "Híbrido", body_type: "SUV", cover: cover_image(3729464), is_new: false, transmission: "Automática", engine: "3.5L V6 + Motores Eléctricos", exterior_color: "Gris Nebula Perla", interior_color: "Pergamino", description: "El Lexus RX 450h combina lujo, eficiencia y versatilidad con su tren motriz híbrido y acabados interiores refinados." },
        Listing { id: 7, make: "Ford", model: "F-150 Lightning", year: 2023, price: 55974.0, mileage: 0, fuel_type: "Eléctrico", body_type: "Camioneta", cover: cover_image(2676096), is_new: true, transmission: "Automática", engine: "Motores Eléctricos Duales", exterior_color: "Azul Antimateria", interior_color: "Negro", description: "El Ford F-150 Lightning trae energía eléctrica a la camioneta más vendida de América, con capacidad impresionante y características innovadoras." },
        Listing { id: 8, make: "Toyota", model: "Camry Híbrido", year: 2022, price: 33300.0, mileage: 18000, fuel_type: "Híbrido", body_type: "Sedán", cover: cover_image(170811), is_new: false, transmission: "Automática", engine: "2.5L Inline-4 + Motor Eléctrico", exterior_color: "Plata Celestial", interior_color: "Ceniza", description: "El Toyota Camry Híbrido ofrece eficiencia excepcional sin comprometer la comodidad, confiabilidad o dinámica de conducción." },
        Listing { id: 9, make: "Volkswagen", model: "ID.4", year: 2023, price: 38995.0, mileage: 2500, fuel_type: "Eléctrico", body_type: "SUV", cover: cover_image(1545743), is_new: false, transmission: "Automática", engine: "Motor Eléctrico", exterior_color: "Azul Dusk", interior_color: "Gris", description: "El Volkswagen ID.4 es un SUV eléctrico espacioso y eficiente con tecnología avanzada y diseño moderno." },
        Listing { id: 10, make: "Honda", model: "Accord Híbrido", year: 2023, price: 36540.0, mileage: 8000, fuel_type: "Híbrido", body_type: "Sedán", cover: cover_image(170811), is_new: false, transmission: "Automática", engine: "2.0L Inline-4 + Motor Eléctrico", exterior_color: "Blanco Platino", interior_color: "Negro", description: "El Honda Accord Híbrido combina eficiencia de combustible excepcional con un interior espacioso y tecnología avanzada." },
        Listing { id: 11, make: "Hyundai", model: "IONIQ 5", year: 2023, price: 44700.0, mileage: 1200, fuel_type: "Eléctrico", body_type: "SUV", cover: cover_image(3802508), is_new: false, transmission: "Automática", engine: "Motor Eléctrico", exterior_color: "Gris Cyber", interior_color: "Beige", description: "El Hyundai IONIQ 5 es un SUV eléctrico futurista con carga ultrarrápida y un interior espacioso y versátil." },
        Listing { id: 12, make: "Kia", model: "EV6", year: 2023, price: 42115.0, mileage: 3500, fuel_type: "Eléctrico", body_type: "SUV", cover: cover_image(1035108), is_new: false, transmission: "Automática", engine: "Motor Eléctrico", exterior_color: "Verde Gravity", interior_color: "Negro", description: "El Kia EV6 ofrece un diseño audaz, tecnología de carga rápida y una experiencia de conducción emocionante." },
        Listing { id: 13, make: "Genesis", model: "GV70", year: 2023, price: 54500.0, mileage: 6800, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(6894428), is_new: false, transmission: "Automática", engine: "2.5L Turbo Inline-4", exterior_color: "Negro Obsidiana", interior_color: "Marrón", description: "El Genesis GV70 combina lujo, rendimiento y tecnología avanzada en un SUV compacto elegante." },
        Listing { id: 14, make: "Cadillac", model: "Escalade", year: 2022, price: 78295.0, mileage: 22000, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(3729464), is_new: false, transmission: "Automática", engine: "6.2L V8", exterior_color: "Blanco Cristal", interior_color: "Negro", description: "El Cadillac Escalade es un SUV de lujo de tamaño completo con presencia imponente y tecnología de vanguardia." },
        Listing { id: 15, make: "Lincoln", model: "Navigator", year: 2023, price: 83265.0, mileage: 4500, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(2676096), is_new: false, transmission: "Automática", engine: "3.5L Twin-Turbo V6", exterior_color: "Azul Infinite", interior_color: "Cappuccino", description: "El Lincoln Navigator ofrece lujo refinado, espacio generoso y capacidades de remolque impresionantes." },
        Listing { id: 16, make: "Infiniti", model: "QX80", year: 2022, price: 69050.0, mileage: 16500, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(1545743), is_new: false, transmission: "Automática", engine: "5.6L V8", exterior_color: "Gris Graphite", interior_color: "Almond", description: "El Infiniti QX80 es un SUV de lujo de tamaño completo con motor V8 potente y interior lujoso." },
        Listing { id: 17, make: "Acura", model: "MDX", year: 2023, price: 48550.0, mileage: 7200, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(170811), is_new: false, transmission: "Automática", engine: "3.5L V6", exterior_color: "Rojo Performance", interior_color: "Ebony", description: "El Acura MDX combina rendimiento deportivo con practicidad familiar en un SUV de lujo de tres filas." },
        Listing { id: 18, make: "Volvo", model: "XC90", year: 2023, price: 56200.0, mileage: 3800, fuel_type: "Híbrido", body_type: "SUV", cover: cover_image(3802508), is_new: false, transmission: "Automática", engine: "2.0L Turbo + Motor Eléctrico", exterior_color: "Blanco Crystal", interior_color: "Charcoal", description: "El Volvo XC90 es un SUV de lujo escandinavo con enfoque en seguridad, sostenibilidad y diseño elegante." },
        Listing { id: 19, make: "Jaguar", model: "F-PACE", year: 2022, price: 52400.0, mileage: 11200, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(1035108), is_new: false, transmission: "Automática", engine: "2.0L Turbo Inline-4", exterior_color: "Azul Caesium", interior_color: "Windsor Leather", description: "El Jaguar F-PACE combina el rendimiento deportivo de Jaguar con la practicidad de un SUV de lujo." },
        Listing { id: 20, make: "Land Rover", model: "Range Rover Sport", year: 2023, price: 83500.0, mileage: 2100, fuel_type: "Gasolina", body_type: "SUV", cover: cover_image(6894428), is_new: false, transmission: "Automática", engine: "3.0L Inline-6 Mild Hybrid", exterior_color: "Verde Byron", interior_color: "Tan", description: "El Range Rover Sport ofrece capacidades todoterreno excepcionales con lujo refinado y tecnología avanzada." },
    ];

    let mut vehicles: Vec<Vehicle> = listings.into_iter().map(Listing::into_vehicle).collect();

    // Spec sheets for the two flagship listings
    if let Some(bmw) = vehicles.iter_mut().find(|vehicle| vehicle.id == 1) {
        bmw.horsepower = Some(503);
        bmw.acceleration = Some(3.8);
        bmw.drive = Some("Tracción integral".to_string());
        bmw.fuel_economy = Some("16 ciudad / 23 carretera".to_string());
        bmw.features = strings(&[
            "Paquete M Sport",
            "Paquete Premium",
            "Paquete Ejecutivo",
            "Acabado en Fibra de Carbono",
            "Sistema de Sonido Harman Kardon",
            "Apple CarPlay",
            "Asientos Calefaccionados",
            "Head-up Display",
            "Asistente de Estacionamiento Plus",
            "Asistente de Conducción Profesional",
        ]);
    }
    if let Some(mercedes) = vehicles.iter_mut().find(|vehicle| vehicle.id == 2) {
        mercedes.horsepower = Some(429);
        mercedes.acceleration = Some(4.9);
        mercedes.drive = Some("Tracción integral".to_string());
        mercedes.fuel_economy = Some("22 ciudad / 29 carretera".to_string());
        mercedes.features = strings(&[
            "Paquete Premium",
            "Paquete Ejecutivo Asientos Traseros",
            "Sistema de Sonido Burmester 3D",
            "Navegación MBUX Realidad Aumentada",
            "Iluminación Ambiental Activa",
            "Asientos Delanteros Multicontorno con Masaje",
            "Control de Clima de Cuatro Zonas",
            "Head-up Display",
            "Dirección en Ruedas Traseras",
            "Paquete de Asistencia al Conductor",
        ]);
    }

    vehicles
}

static FALLBACK_CATALOG: Lazy<Vec<Vehicle>> = Lazy::new(build_catalog);

pub fn fallback_catalog() -> Vec<Vehicle> {
    FALLBACK_CATALOG.clone()
}
