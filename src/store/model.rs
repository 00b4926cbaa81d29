//! Dealership and car records plus the request payloads that create and
//! update them.
//!
//! Output always uses the English field names. Payloads also accept the
//! Spanish keys used by the first clients of this service.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::store::update::overwrite_if_truthy;

/// A dealership and the cars it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealership {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default)]
    pub cars: Vec<Car>,
}

/// A car, identified uniquely only within its dealership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horsepower: Option<i64>,

    /// Kept as a JSON number so `15000` is echoed back as `15000`, not `15000.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
}

/// Body of `POST /dealerships` and `PUT /dealerships/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DealershipFields {
    #[serde(alias = "nombre")]
    pub name: Option<String>,

    #[serde(alias = "direccion")]
    pub address: Option<String>,
}

/// Body of `POST /dealerships/{id}/cars` and `PUT /dealerships/{id}/cars/{car_id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarFields {
    #[serde(alias = "modelo")]
    pub model: Option<String>,

    #[serde(alias = "cv")]
    pub horsepower: Option<i64>,

    #[serde(alias = "precio")]
    pub price: Option<Number>,
}

impl Dealership {
    pub(crate) fn create(id: u64, fields: DealershipFields) -> Self {
        Self {
            id,
            name: fields.name,
            address: fields.address,
            cars: Vec::new(),
        }
    }

    pub(crate) fn apply(&mut self, fields: DealershipFields) {
        overwrite_if_truthy(&mut self.name, fields.name);
        overwrite_if_truthy(&mut self.address, fields.address);
    }

    /// Append a car with id `cars.len() + 1`.
    pub(crate) fn push_car(&mut self, fields: CarFields) -> &Car {
        let id = self.cars.len() as u64 + 1;
        self.cars.push(Car::create(id, fields));
        &self.cars[self.cars.len() - 1]
    }
}

impl Car {
    pub(crate) fn create(id: u64, fields: CarFields) -> Self {
        Self {
            id,
            model: fields.model,
            horsepower: fields.horsepower,
            price: fields.price,
        }
    }

    pub(crate) fn apply(&mut self, fields: CarFields) {
        overwrite_if_truthy(&mut self.model, fields.model);
        overwrite_if_truthy(&mut self.horsepower, fields.horsepower);
        overwrite_if_truthy(&mut self.price, fields.price);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted_from_output() {
        let dealership = Dealership::create(1, DealershipFields::default());
        assert_eq!(
            serde_json::to_value(&dealership).unwrap(),
            json!({ "id": 1, "cars": [] })
        );
    }

    #[test]
    fn car_payload_accepts_spanish_keys() {
        let fields: CarFields =
            serde_json::from_value(json!({ "modelo": "Mazda MX-5", "cv": 160, "precio": 15000 }))
                .unwrap();
        assert_eq!(fields.model.as_deref(), Some("Mazda MX-5"));
        assert_eq!(fields.horsepower, Some(160));

        let car = Car::create(3, fields);
        assert_eq!(
            serde_json::to_value(&car).unwrap(),
            json!({ "id": 3, "model": "Mazda MX-5", "horsepower": 160, "price": 15000 })
        );
    }

    #[test]
    fn null_counts_as_absent() {
        let fields: DealershipFields =
            serde_json::from_value(json!({ "name": null, "address": "X" })).unwrap();
        assert_eq!(fields.name, None);
        assert_eq!(fields.address.as_deref(), Some("X"));
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result: Result<CarFields, _> = serde_json::from_value(json!({ "horsepower": "fast" }));
        assert!(result.is_err());
    }
}
