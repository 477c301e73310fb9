//! Aggregate summary over a car collection

use std::fmt::Write;

use serde::Serialize;

use crate::car::CarRecord;

use super::format::{group_int, money};

/// Counts and final-price statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub sold: usize,
    pub available: usize,
    /// Only cars with a non-zero final price contribute
    pub prices: Option<PriceStats>,
    /// Per-brand counts in order of first appearance
    pub brands: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl Summary {
    pub fn from_cars(cars: &[CarRecord]) -> Self {
        let total = cars.len();
        let sold = cars.iter().filter(|c| c.is_sold).count();

        let prices: Vec<f64> = cars
            .iter()
            .filter(|c| c.final_price != 0.0)
            .map(|c| f64::from(c.final_price))
            .collect();

        let price_stats = if prices.is_empty() {
            None
        } else {
            let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
            let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let avg = prices.iter().sum::<f64>() / prices.len() as f64;
            Some(PriceStats { min, max, avg })
        };

        let mut brands: Vec<(String, usize)> = Vec::new();
        for car in cars {
            match brands.iter_mut().find(|(brand, _)| *brand == car.brand) {
                Some((_, count)) => *count += 1,
                None => brands.push((car.brand.clone(), 1)),
            }
        }

        Self {
            total,
            sold,
            available: total - sold,
            prices: price_stats,
            brands,
        }
    }

    /// Text block headed by `title`
    pub fn render(&self, title: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "\n{}", title);
        let _ = writeln!(out, "* Total Cars : {}", group_int(self.total as i64));
        let _ = writeln!(out, "* Sold Cars  : {}", group_int(self.sold as i64));
        let _ = writeln!(out, "* Available  : {}\n", group_int(self.available as i64));

        if let Some(stats) = &self.prices {
            let _ = writeln!(out, "Price Statistics (Final Price, THB)");
            let _ = writeln!(out, "* Min : {}", money(stats.min));
            let _ = writeln!(out, "* Max : {}", money(stats.max));
            let _ = writeln!(out, "* Avg : {}\n", money(stats.avg));
        }

        out.push_str("Cars by Brand");
        for (brand, count) in &self.brands {
            let _ = write!(out, "\n* {:<8}: {}", brand, count);
        }
        out
    }
}
