//! Report Module
//!
//! Plain-text views of the car collection: detail cards, lists, the
//! unsold and sold reports, and the aggregate summary.

mod format;
mod summary;

pub use format::{group_int, money, render_table, Align, Column};
pub use summary::{PriceStats, Summary};

use crate::car::CarRecord;

/// Default output file for the unsold report
pub const UNSOLD_REPORT_FILE: &str = "report_not_sale.txt";

/// Default output file for the sold report
pub const SOLD_REPORT_FILE: &str = "report_sold.txt";

const BASE_COLUMNS: [Column; 8] = [
    Column::left("CarID", 6),
    Column::left("Brand", 10),
    Column::left("Model", 10),
    Column::left("Year", 6),
    Column::right("Odometer(km)", 14),
    Column::right("Buy Price", 13),
    Column::right("Sell Price", 13),
    Column::left("Sold", 5),
];

const SALE_COLUMNS: [Column; 4] = [
    Column::right("Final Price", 13),
    Column::right("Profit", 13),
    Column::left("Customer Name", 18),
    Column::left("Customer Phone", 15),
];

fn base_cells(car: &CarRecord) -> Vec<String> {
    vec![
        car.car_id.to_string(),
        car.brand.clone(),
        car.model.clone(),
        car.year.to_string(),
        group_int(i64::from(car.odometer)),
        money(f64::from(car.buy_price)),
        money(f64::from(car.sell_price)),
        car.status_label().to_string(),
    ]
}

/// Table of unsold cars
pub fn unsold_table(cars: &[CarRecord], title: &str) -> String {
    let rows: Vec<Vec<String>> = cars.iter().map(base_cells).collect();
    render_table(title, &BASE_COLUMNS, &rows)
}

/// Table of sold cars with price, profit and customer columns
pub fn sold_table(cars: &[CarRecord], title: &str) -> String {
    let columns: Vec<Column> = BASE_COLUMNS.iter().chain(SALE_COLUMNS.iter()).copied().collect();
    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            let mut cells = base_cells(car);
            cells.push(money(f64::from(car.final_price)));
            cells.push(money(car.profit()));
            cells.push(car.customer_name.clone());
            cells.push(car.customer_phone.clone());
            cells
        })
        .collect();
    render_table(title, &columns, &rows)
}

/// Unsold table followed by a summary of the whole collection
///
/// `None` when every car is sold (or there are none).
pub fn unsold_report(cars: &[CarRecord]) -> Option<String> {
    let unsold: Vec<CarRecord> = cars.iter().filter(|c| !c.is_sold).cloned().collect();
    if unsold.is_empty() {
        return None;
    }
    let mut report = unsold_table(&unsold, "Report: Car Not Sale");
    report.push('\n');
    report.push_str(&Summary::from_cars(cars).render("Overall Summary"));
    Some(report)
}

/// Sold table followed by a summary of the whole collection
///
/// `None` when no car is sold.
pub fn sold_report(cars: &[CarRecord]) -> Option<String> {
    let sold: Vec<CarRecord> = cars.iter().filter(|c| c.is_sold).cloned().collect();
    if sold.is_empty() {
        return None;
    }
    let mut report = sold_table(&sold, "Report: Car Sold with Customer");
    report.push('\n');
    report.push_str(&Summary::from_cars(cars).render("Sold Car Summary"));
    Some(report)
}

/// Short list: id, brand, model, year, status
pub fn car_list(cars: &[CarRecord], title: &str) -> String {
    let mut lines = vec![
        format!("========= {} =========", title),
        format!("{:<6} | {:<10} | {:<10} | {:<6} | {}", "CarID", "Brand", "Model", "Year", "Status"),
        "-".repeat(50),
    ];
    for car in cars {
        lines.push(format!(
            "{:<6} | {:<10} | {:<10} | {:<6} | {}",
            car.car_id.to_string(),
            car.brand,
            car.model,
            car.year,
            car.status_label()
        ));
    }
    lines.push("=".repeat(50));
    lines.join("\n")
}

/// Every field of one car
pub fn car_detail(car: &CarRecord) -> String {
    let rule = "=".repeat(80);
    [
        rule.clone(),
        format!("CarID : {}", car.car_id),
        format!("Brand : {}", car.brand),
        format!("Model : {}", car.model),
        format!("Year  : {}", car.year),
        format!("Odometer : {} km", group_int(i64::from(car.odometer))),
        format!("Buy Price : {}", group_int(i64::from(car.buy_price))),
        format!("Sell Price: {}", money(f64::from(car.sell_price))),
        format!("Status    : {}", car.status_label()),
        format!("Final Price: {}", money(f64::from(car.final_price))),
        format!("Profit     : {}", money(car.profit())),
        format!("Customer   : {} ({})", car.customer_name, car.customer_phone),
        rule,
    ]
    .join("\n")
}
