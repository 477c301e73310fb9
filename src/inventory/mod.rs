//! Inventory Module
//!
//! Caller-side editing over the record store.
//!
//! ## Responsibilities
//! - Validate every field before it can reach disk
//! - Apply add / sell / edit / delete to the loaded collection
//! - Commit each change with one full `save_all`
//!
//! Every mutation follows the same cycle:
//! ```text
//! load_all ──► Vec<CarRecord> ──► validate + mutate ──► save_all
//! ```
//! A rejected edit returns before `save_all`, so the files are untouched.

mod filter;
pub mod validate;

pub use filter::{brand_options, model_options, year_options, CarFilter};

use tracing::info;

use crate::car::{CarId, CarRecord};
use crate::config::Config;
use crate::error::{CarlotError, Result};
use crate::storage::RecordStore;

/// A car to be added to the inventory
#[derive(Debug, Clone)]
pub struct NewCar {
    pub car_id: CarId,
    pub year: i32,
    pub brand: String,
    pub model: String,
    pub odometer: i32,
    pub buy_price: i32,
    pub sell_price: f32,
    /// Present when the car is entered as already sold
    pub sale: Option<SaleDetails>,
}

/// Completed sale
#[derive(Debug, Clone)]
pub struct SaleDetails {
    pub final_price: f32,
    pub customer_name: String,
    pub customer_phone: String,
}

impl SaleDetails {
    fn validate(&self) -> Result<()> {
        validate::price("Final Price", self.final_price)?;
        validate::non_empty("Customer Name", &self.customer_name)?;
        validate::phone(&self.customer_phone)
    }
}

/// Changes to an existing sale; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct SaleUpdate {
    pub final_price: Option<f32>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

impl SaleUpdate {
    pub fn is_empty(&self) -> bool {
        self.final_price.is_none() && self.customer_name.is_none() && self.customer_phone.is_none()
    }

    fn validate(&self) -> Result<()> {
        if let Some(price) = self.final_price {
            validate::price("Final Price", price)?;
        }
        if let Some(name) = &self.customer_name {
            validate::non_empty("Customer Name", name)?;
        }
        if let Some(phone) = &self.customer_phone {
            validate::phone(phone)?;
        }
        Ok(())
    }
}

/// Used-car inventory backed by a record store
pub struct Inventory {
    store: RecordStore,
}

impl Inventory {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Open the store described by `config` and wrap it
    pub fn open(config: Config) -> Result<Self> {
        Ok(Self::new(RecordStore::open(config)?))
    }

    /// The underlying store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All cars in file order
    pub fn list(&self) -> Result<Vec<CarRecord>> {
        self.store.load_all()
    }

    /// One car by id
    pub fn get(&self, car_id: CarId) -> Result<CarRecord> {
        self.store
            .load_all()?
            .into_iter()
            .find(|c| c.car_id == car_id)
            .ok_or_else(|| CarlotError::CarNotFound(car_id.to_string()))
    }

    /// Cars matching every filter, in file order
    pub fn filter(&self, filters: &[CarFilter]) -> Result<Vec<CarRecord>> {
        let cars = self.store.load_all()?;
        Ok(cars
            .into_iter()
            .filter(|car| filters.iter().all(|f| f.matches(car)))
            .collect())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new car and save
    pub fn add(&self, new_car: NewCar) -> Result<CarRecord> {
        let mut cars = self.store.load_all()?;

        if cars.iter().any(|c| c.car_id == new_car.car_id) {
            return Err(CarlotError::DuplicateCarId(new_car.car_id.to_string()));
        }

        validate::non_empty("Brand", &new_car.brand)?;
        validate::non_empty("Model", &new_car.model)?;
        validate::year(new_car.year)?;
        validate::non_negative_int("Odometer", new_car.odometer)?;
        validate::non_negative_int("Buy Price", new_car.buy_price)?;
        validate::price("Sell Price", new_car.sell_price)?;
        if let Some(sale) = &new_car.sale {
            sale.validate()?;
        }

        let mut car = CarRecord::new(
            new_car.car_id,
            new_car.year,
            new_car.brand.trim(),
            new_car.model.trim(),
            new_car.odometer,
            new_car.buy_price,
            new_car.sell_price,
        );
        if let Some(sale) = new_car.sale {
            apply_sale(&mut car, sale);
        }

        cars.push(car.clone());
        self.store.save_all(&cars)?;

        info!(car_id = %car.car_id, sold = car.is_sold, "Car added");
        Ok(car)
    }

    /// Record the sale of a car that is still available
    pub fn mark_sold(&self, car_id: CarId, sale: SaleDetails) -> Result<CarRecord> {
        let mut cars = self.store.load_all()?;
        let index = position_of(&cars, car_id)?;

        if cars[index].is_sold {
            return Err(CarlotError::Validation(format!(
                "{} is already sold",
                car_id
            )));
        }
        sale.validate()?;

        apply_sale(&mut cars[index], sale);
        self.store.save_all(&cars)?;

        info!(car_id = %car_id, final_price = cars[index].final_price, "Car sold");
        Ok(cars[index].clone())
    }

    /// Change the details of a sale already recorded
    pub fn update_sale(&self, car_id: CarId, update: SaleUpdate) -> Result<CarRecord> {
        let mut cars = self.store.load_all()?;
        let index = position_of(&cars, car_id)?;

        if !cars[index].is_sold {
            return Err(CarlotError::Validation(format!(
                "{} is not sold yet",
                car_id
            )));
        }
        update.validate()?;

        let car = &mut cars[index];
        if let Some(price) = update.final_price {
            car.final_price = price;
        }
        if let Some(name) = update.customer_name {
            car.customer_name = name.trim().to_string();
        }
        if let Some(phone) = update.customer_phone {
            car.customer_phone = phone;
        }
        let updated = car.clone();

        self.store.save_all(&cars)?;

        info!(car_id = %car_id, "Sale updated");
        Ok(updated)
    }

    /// Remove a car and save the remainder
    pub fn delete(&self, car_id: CarId) -> Result<CarRecord> {
        let mut cars = self.store.load_all()?;
        let index = position_of(&cars, car_id)?;

        let removed = cars.remove(index);
        self.store.save_all(&cars)?;

        info!(car_id = %car_id, remaining = cars.len(), "Car deleted");
        Ok(removed)
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

fn position_of(cars: &[CarRecord], car_id: CarId) -> Result<usize> {
    cars.iter()
        .position(|c| c.car_id == car_id)
        .ok_or_else(|| CarlotError::CarNotFound(car_id.to_string()))
}

fn apply_sale(car: &mut CarRecord, sale: SaleDetails) {
    car.is_sold = true;
    car.final_price = sale.final_price;
    car.customer_name = sale.customer_name.trim().to_string();
    car.customer_phone = sale.customer_phone;
}
