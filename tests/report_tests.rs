//! Tests for text reports and summaries

use carlot::report::{
    car_detail, car_list, group_int, money, render_table, sold_report, sold_table, unsold_report,
    unsold_table, Column, Summary,
};
use carlot::{CarId, CarRecord};

// =============================================================================
// Helper Functions
// =============================================================================

fn car(id: i32, brand: &str, buy_price: i32) -> CarRecord {
    CarRecord::new(CarId::from_raw(id), 2019, brand, "Model", 123_456, buy_price, 500_000.0)
}

fn sold(id: i32, brand: &str, buy_price: i32, final_price: f32) -> CarRecord {
    let mut c = car(id, brand, buy_price);
    c.is_sold = true;
    c.final_price = final_price;
    c.customer_name = "Anan".to_string();
    c.customer_phone = "0899999999".to_string();
    c
}

fn fleet() -> Vec<CarRecord> {
    vec![
        car(1, "Toyota", 300_000),
        sold(2, "Honda", 12_000, 15_000.0),
        car(3, "Toyota", 250_000),
        sold(4, "Mazda", 100_000, 45_000.0),
    ]
}

// =============================================================================
// Number Formatting Tests
// =============================================================================

#[test]
fn test_group_int() {
    assert_eq!(group_int(0), "0");
    assert_eq!(group_int(999), "999");
    assert_eq!(group_int(1_000), "1,000");
    assert_eq!(group_int(1_234_567), "1,234,567");
    assert_eq!(group_int(-1_234), "-1,234");
}

#[test]
fn test_money() {
    assert_eq!(money(0.0), "0.00");
    assert_eq!(money(450_000.0), "450,000.00");
    assert_eq!(money(1_234.5), "1,234.50");
    assert_eq!(money(-3_000.25), "-3,000.25");
    assert_eq!(money(-0.001), "0.00");
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_render_table_layout() {
    let columns = [Column::left("Id", 4), Column::right("Qty", 5)];
    let rows = vec![vec!["a".to_string(), "12".to_string()]];

    let table = render_table("Title", &columns, &rows);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Title");
    assert_eq!(lines[2], "+------+-------+");
    assert_eq!(lines[3], "| Id   |   Qty |");
    assert_eq!(lines[4], "+------+-------+");
    assert_eq!(lines[5], "| a    |    12 |");
    assert_eq!(lines[6], "+------+-------+");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_unsold_table_rows() {
    let cars = vec![car(1, "Toyota", 300_000)];
    let table = unsold_table(&cars, "Unsold");

    assert!(table.contains("| C001   | Toyota     | Model      | 2019   |"));
    assert!(table.contains("123,456"));
    assert!(table.contains("300,000.00"));
    assert!(table.contains("500,000.00"));
    assert!(table.contains("| No    |"));
}

#[test]
fn test_sold_table_includes_profit_and_customer() {
    let cars = vec![sold(2, "Honda", 12_000, 15_000.0)];
    let table = sold_table(&cars, "Sold");

    assert!(table.contains("Final Price"));
    assert!(table.contains("15,000.00"));
    assert!(table.contains("3,000.00"));
    assert!(table.contains("Anan"));
    assert!(table.contains("0899999999"));
}

// =============================================================================
// Summary Tests
// =============================================================================

#[test]
fn test_summary_counts_and_prices() {
    let summary = Summary::from_cars(&fleet());

    assert_eq!(summary.total, 4);
    assert_eq!(summary.sold, 2);
    assert_eq!(summary.available, 2);

    let prices = summary.prices.unwrap();
    assert_eq!(prices.min, 15_000.0);
    assert_eq!(prices.max, 45_000.0);
    assert_eq!(prices.avg, 30_000.0);
}

#[test]
fn test_summary_brands_in_first_seen_order() {
    let summary = Summary::from_cars(&fleet());

    assert_eq!(
        summary.brands,
        vec![
            ("Toyota".to_string(), 2),
            ("Honda".to_string(), 1),
            ("Mazda".to_string(), 1),
        ]
    );
}

#[test]
fn test_summary_without_sales_has_no_price_stats() {
    let summary = Summary::from_cars(&[car(1, "Toyota", 1)]);
    assert!(summary.prices.is_none());

    let text = summary.render("Overall Summary");
    assert!(!text.contains("Price Statistics"));
    assert!(text.contains("* Total Cars : 1"));
    assert!(text.contains("* Toyota  : 1"));
}

#[test]
fn test_summary_render() {
    let text = Summary::from_cars(&fleet()).render("Overall Summary");

    assert!(text.starts_with("\nOverall Summary\n"));
    assert!(text.contains("* Sold Cars  : 2"));
    assert!(text.contains("* Available  : 2"));
    assert!(text.contains("* Min : 15,000.00"));
    assert!(text.contains("* Max : 45,000.00"));
    assert!(text.contains("* Avg : 30,000.00"));
    assert!(text.ends_with("* Mazda   : 1"));
}

#[test]
fn test_summary_of_empty_collection() {
    let summary = Summary::from_cars(&[]);

    assert_eq!(summary.total, 0);
    assert!(summary.prices.is_none());
    assert!(summary.brands.is_empty());
}

// =============================================================================
// Report Tests
// =============================================================================

#[test]
fn test_unsold_report() {
    let report = unsold_report(&fleet()).unwrap();

    assert!(report.contains("Report: Car Not Sale"));
    assert!(report.contains("C001"));
    assert!(report.contains("C003"));
    assert!(!report.contains("C002"));
    assert!(report.contains("Overall Summary"));
    // Summary covers the whole collection
    assert!(report.contains("* Total Cars : 4"));
}

#[test]
fn test_sold_report() {
    let report = sold_report(&fleet()).unwrap();

    assert!(report.contains("Report: Car Sold with Customer"));
    assert!(report.contains("C002"));
    assert!(report.contains("C004"));
    assert!(!report.contains("C001"));
    assert!(report.contains("Sold Car Summary"));
    // Loss on C004
    assert!(report.contains("-55,000.00"));
}

#[test]
fn test_reports_absent_when_nothing_matches() {
    let all_unsold = vec![car(1, "Toyota", 1)];
    let all_sold = vec![sold(1, "Toyota", 1, 2.0)];

    assert!(sold_report(&all_unsold).is_none());
    assert!(unsold_report(&all_sold).is_none());
    assert!(unsold_report(&[]).is_none());
}

// =============================================================================
// List / Detail Tests
// =============================================================================

#[test]
fn test_car_list() {
    let text = car_list(&fleet(), "All Cars");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "========= All Cars =========");
    assert_eq!(lines[1], "CarID  | Brand      | Model      | Year   | Status");
    assert_eq!(lines[3], "C001   | Toyota     | Model      | 2019   | No");
    assert_eq!(lines[4], "C002   | Honda      | Model      | 2019   | Yes");
    assert_eq!(lines.len(), 2 + 1 + 4 + 1);
}

#[test]
fn test_car_detail() {
    let text = car_detail(&sold(2, "Honda", 12_000, 15_000.0));

    assert!(text.contains("CarID : C002"));
    assert!(text.contains("Odometer : 123,456 km"));
    assert!(text.contains("Buy Price : 12,000"));
    assert!(text.contains("Status    : Yes"));
    assert!(text.contains("Profit     : 3,000.00"));
    assert!(text.contains("Customer   : Anan (0899999999)"));
}
