//! Logical car record

use serde::Serialize;

use super::CarId;

/// Complete in-memory representation of one car
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarRecord {
    pub car_id: CarId,
    pub year: i32,
    pub brand: String,
    pub model: String,
    /// Kilometers
    pub odometer: i32,
    pub buy_price: i32,
    /// Persisted but never edited; true for every record built by this crate
    pub active: bool,
    pub is_sold: bool,
    /// Asking price
    pub sell_price: f32,
    /// Actual sale price, 0 while unsold
    pub final_price: f32,
    pub customer_name: String,
    pub customer_phone: String,
}

impl CarRecord {
    /// Create an active, unsold record
    pub fn new(
        car_id: CarId,
        year: i32,
        brand: impl Into<String>,
        model: impl Into<String>,
        odometer: i32,
        buy_price: i32,
        sell_price: f32,
    ) -> Self {
        Self {
            car_id,
            year,
            brand: brand.into(),
            model: model.into(),
            odometer,
            buy_price,
            active: true,
            is_sold: false,
            sell_price,
            final_price: 0.0,
            customer_name: String::new(),
            customer_phone: String::new(),
        }
    }

    /// `final_price - buy_price` once a final price is set, otherwise 0
    pub fn profit(&self) -> f64 {
        if self.final_price > 0.0 {
            f64::from(self.final_price) - f64::from(self.buy_price)
        } else {
            0.0
        }
    }

    /// "Yes" when sold, "No" otherwise
    pub fn status_label(&self) -> &'static str {
        if self.is_sold {
            "Yes"
        } else {
            "No"
        }
    }
}
