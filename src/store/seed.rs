//! Demo records loaded at startup when `store.seed` is enabled.

use serde_json::Number;

use crate::store::{CarFields, DealershipFields, Store};

const DEMO: &[(&str, &str, &[(&str, i64, u64)])] = &[
    (
        "Concesionario A",
        "Calle Trigal 10",
        &[("Renault Clio", 75, 9000), ("Nissan Skyline R34", 280, 40000)],
    ),
    (
        "Concesionario B",
        "Avenida de la Libertad 5",
        &[("Ford Fiesta", 90, 10000), ("Toyota Corolla", 130, 12000)],
    ),
];

impl Store {
    /// A store holding the two demo dealerships and their cars.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, address, cars) in DEMO {
            let dealership = store.push_dealership(DealershipFields {
                name: Some(name.to_string()),
                address: Some(address.to_string()),
            });
            for (model, horsepower, price) in cars.iter() {
                dealership.push_car(CarFields {
                    model: Some(model.to_string()),
                    horsepower: Some(*horsepower),
                    price: Some(Number::from(*price)),
                });
            }
        }
        store
    }
}
