//! Collection filters

use std::collections::BTreeSet;

use crate::car::CarRecord;

/// One criterion for narrowing the car list
#[derive(Debug, Clone, PartialEq)]
pub enum CarFilter {
    /// Case-insensitive brand match
    Brand(String),

    /// Case-insensitive model match
    Model(String),

    /// Exact production year
    Year(i32),

    /// Sold (`true`) or still available (`false`)
    Sold(bool),
}

impl CarFilter {
    pub fn matches(&self, car: &CarRecord) -> bool {
        match self {
            CarFilter::Brand(brand) => car.brand.to_lowercase() == brand.trim().to_lowercase(),
            CarFilter::Model(model) => car.model.to_lowercase() == model.trim().to_lowercase(),
            CarFilter::Year(year) => car.year == *year,
            CarFilter::Sold(sold) => car.is_sold == *sold,
        }
    }

    /// Heading used when printing a filtered list
    pub fn title(&self) -> String {
        match self {
            CarFilter::Brand(brand) => format!("Cars Filtered by Brand = {}", capitalize(brand.trim())),
            CarFilter::Model(model) => format!("Cars Filtered by Model = {}", capitalize(model.trim())),
            CarFilter::Year(year) => format!("Cars Filtered by Year = {}", year),
            CarFilter::Sold(true) => "Cars Filtered by Status = Yes".to_string(),
            CarFilter::Sold(false) => "Cars Filtered by Status = No".to_string(),
        }
    }
}

/// Upper-case the first char, lower-case the rest
fn capitalize(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Option Lists
// =============================================================================

/// Distinct brands, sorted
pub fn brand_options(cars: &[CarRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = cars.iter().map(|c| c.brand.as_str()).collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Distinct models, sorted
pub fn model_options(cars: &[CarRecord]) -> Vec<String> {
    let set: BTreeSet<&str> = cars.iter().map(|c| c.model.as_str()).collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Distinct production years, ascending
pub fn year_options(cars: &[CarRecord]) -> Vec<i32> {
    let set: BTreeSet<i32> = cars.iter().map(|c| c.year).collect();
    set.into_iter().collect()
}
