//! In-memory dealership store.
//!
//! # Data Flow
//! ```text
//! handler (holding the store lock)
//!     → id.rs (path segment → ResourceId)
//!     → Store (linear scan, mutation)
//!     → model.rs (records, payloads)
//!     → update.rs (truthy-overwrite on PUT)
//! ```
//!
//! # Design Decisions
//! - Ids are `len + 1` at insertion time, not a counter. After a deletion
//!   a new record may reuse the id of a live one; lookups return the first
//!   match in insertion order.
//! - The store itself is not synchronized. Callers share it through
//!   [`SharedStore`] and hold the write lock for the whole mutation.

pub mod id;
pub mod model;
pub mod seed;
pub mod update;

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub use id::ResourceId;
pub use model::{Car, CarFields, Dealership, DealershipFields};

/// Store shared between request handlers.
pub type SharedStore = Arc<RwLock<Store>>;

/// Lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Dealership not found")]
    DealershipNotFound,

    #[error("Car not found")]
    CarNotFound,
}

/// Ordered collection of dealerships, each owning its cars.
#[derive(Debug, Default)]
pub struct Store {
    dealerships: Vec<Dealership>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store for sharing across handlers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// All dealerships in insertion order.
    pub fn dealerships(&self) -> &[Dealership] {
        &self.dealerships
    }

    /// Total number of cars across all dealerships.
    pub fn car_count(&self) -> usize {
        self.dealerships.iter().map(|d| d.cars.len()).sum()
    }

    pub fn create_dealership(&mut self, fields: DealershipFields) -> &Dealership {
        self.push_dealership(fields)
    }

    /// Append a dealership with id `len + 1`.
    pub(crate) fn push_dealership(&mut self, fields: DealershipFields) -> &mut Dealership {
        let id = self.dealerships.len() as u64 + 1;
        self.dealerships.push(Dealership::create(id, fields));
        let last = self.dealerships.len() - 1;
        &mut self.dealerships[last]
    }

    pub fn dealership(&self, id: ResourceId) -> Result<&Dealership, StoreError> {
        self.dealerships
            .iter()
            .find(|d| id.matches(d.id))
            .ok_or(StoreError::DealershipNotFound)
    }

    fn dealership_mut(&mut self, id: ResourceId) -> Result<&mut Dealership, StoreError> {
        self.dealerships
            .iter_mut()
            .find(|d| id.matches(d.id))
            .ok_or(StoreError::DealershipNotFound)
    }

    pub fn update_dealership(
        &mut self,
        id: ResourceId,
        fields: DealershipFields,
    ) -> Result<&Dealership, StoreError> {
        let dealership = self.dealership_mut(id)?;
        dealership.apply(fields);
        Ok(dealership)
    }

    /// Remove a dealership together with its cars.
    pub fn delete_dealership(&mut self, id: ResourceId) -> Result<Dealership, StoreError> {
        let index = self
            .dealerships
            .iter()
            .position(|d| id.matches(d.id))
            .ok_or(StoreError::DealershipNotFound)?;
        Ok(self.dealerships.remove(index))
    }

    pub fn cars(&self, id: ResourceId) -> Result<&[Car], StoreError> {
        Ok(&self.dealership(id)?.cars)
    }

    pub fn create_car(&mut self, id: ResourceId, fields: CarFields) -> Result<&Car, StoreError> {
        Ok(self.dealership_mut(id)?.push_car(fields))
    }

    pub fn car(&self, id: ResourceId, car_id: ResourceId) -> Result<&Car, StoreError> {
        self.dealership(id)?
            .cars
            .iter()
            .find(|c| car_id.matches(c.id))
            .ok_or(StoreError::CarNotFound)
    }

    pub fn update_car(
        &mut self,
        id: ResourceId,
        car_id: ResourceId,
        fields: CarFields,
    ) -> Result<&Car, StoreError> {
        let car = self
            .dealership_mut(id)?
            .cars
            .iter_mut()
            .find(|c| car_id.matches(c.id))
            .ok_or(StoreError::CarNotFound)?;
        car.apply(fields);
        Ok(car)
    }

    pub fn delete_car(&mut self, id: ResourceId, car_id: ResourceId) -> Result<Car, StoreError> {
        let cars = &mut self.dealership_mut(id)?.cars;
        let index = cars
            .iter()
            .position(|c| car_id.matches(c.id))
            .ok_or(StoreError::CarNotFound)?;
        Ok(cars.remove(index))
    }
}
