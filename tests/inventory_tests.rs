//! Tests for Inventory
//!
//! These tests verify:
//! - Add / sell / edit / delete go through load, validate, save
//! - Rejected edits leave the record files untouched
//! - Filters and option lists over the loaded collection

use std::fs;

use carlot::inventory::{
    brand_options, model_options, year_options, CarFilter, NewCar, SaleDetails, SaleUpdate,
};
use carlot::{CarId, CarlotError, Config, Inventory, RecordStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_inventory() -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let inventory = Inventory::open(config).unwrap();
    (temp_dir, inventory)
}

fn id(text: &str) -> CarId {
    CarId::parse(text).unwrap()
}

fn new_car(car_id: &str, brand: &str, model: &str, year: i32) -> NewCar {
    NewCar {
        car_id: id(car_id),
        year,
        brand: brand.to_string(),
        model: model.to_string(),
        odometer: 50_000,
        buy_price: 400_000,
        sell_price: 450_000.0,
        sale: None,
    }
}

fn sale(final_price: f32) -> SaleDetails {
    SaleDetails {
        final_price,
        customer_name: "Somchai Jaidee".to_string(),
        customer_phone: "0812345678".to_string(),
    }
}

fn populate(inventory: &Inventory) {
    inventory.add(new_car("C001", "Toyota", "Altis", 2020)).unwrap();
    inventory.add(new_car("C002", "Honda", "Civic", 2018)).unwrap();
    inventory.add(new_car("C003", "toyota", "Camry", 2020)).unwrap();
    inventory.mark_sold(id("C002"), sale(420_000.0)).unwrap();
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_persists_car() {
    let (temp, inventory) = setup_inventory();

    let car = inventory.add(new_car("C001", "Toyota", "Altis", 2020)).unwrap();
    assert_eq!(car.car_id.to_string(), "C001");
    assert!(!car.is_sold);

    // A fresh store over the same directory sees the car
    let reopened = RecordStore::open_path(temp.path()).unwrap();
    let cars = reopened.load_all().unwrap();
    assert_eq!(cars, vec![car]);
}

#[test]
fn test_add_appends_in_order() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let ids: Vec<String> = inventory
        .list()
        .unwrap()
        .iter()
        .map(|c| c.car_id.to_string())
        .collect();
    assert_eq!(ids, vec!["C001", "C002", "C003"]);
}

#[test]
fn test_add_duplicate_id_rejected() {
    let (_temp, inventory) = setup_inventory();
    inventory.add(new_car("C001", "Toyota", "Altis", 2020)).unwrap();

    let result = inventory.add(new_car("C001", "Honda", "City", 2019));

    assert!(matches!(result, Err(CarlotError::DuplicateCarId(_))));
    assert_eq!(inventory.list().unwrap().len(), 1);
}

#[test]
fn test_add_validates_fields() {
    let (temp, inventory) = setup_inventory();

    let mut bad_year = new_car("C001", "Toyota", "Altis", 1899);
    assert!(matches!(inventory.add(bad_year.clone()), Err(CarlotError::Validation(_))));
    bad_year.year = 2101;
    assert!(matches!(inventory.add(bad_year), Err(CarlotError::Validation(_))));

    let empty_brand = new_car("C001", "  ", "Altis", 2020);
    assert!(matches!(inventory.add(empty_brand), Err(CarlotError::Validation(_))));

    let mut negative_odo = new_car("C001", "Toyota", "Altis", 2020);
    negative_odo.odometer = -1;
    assert!(matches!(inventory.add(negative_odo), Err(CarlotError::Validation(_))));

    let mut negative_price = new_car("C001", "Toyota", "Altis", 2020);
    negative_price.sell_price = -1.0;
    assert!(matches!(inventory.add(negative_price), Err(CarlotError::Validation(_))));

    // Nothing was ever saved
    assert!(!temp.path().join("cars_basic.dat").exists());
}

#[test]
fn test_add_year_bounds_inclusive() {
    let (_temp, inventory) = setup_inventory();

    inventory.add(new_car("C001", "Ford", "Model T", 1900)).unwrap();
    inventory.add(new_car("C002", "Future", "X", 2100)).unwrap();

    assert_eq!(inventory.list().unwrap().len(), 2);
}

#[test]
fn test_add_already_sold() {
    let (_temp, inventory) = setup_inventory();

    let mut car = new_car("C010", "Mazda", "3", 2019);
    car.sale = Some(sale(480_000.0));
    let added = inventory.add(car).unwrap();

    assert!(added.is_sold);
    assert_eq!(added.final_price, 480_000.0);
    assert_eq!(added.profit(), 80_000.0);
    assert_eq!(added.customer_phone, "0812345678");
}

#[test]
fn test_add_sold_with_bad_phone_rejected() {
    let (_temp, inventory) = setup_inventory();

    let mut car = new_car("C010", "Mazda", "3", 2019);
    car.sale = Some(SaleDetails {
        customer_phone: "12345".to_string(),
        ..sale(480_000.0)
    });

    assert!(matches!(inventory.add(car), Err(CarlotError::Validation(_))));
    assert!(inventory.list().unwrap().is_empty());
}

// =============================================================================
// Sale Tests
// =============================================================================

#[test]
fn test_mark_sold() {
    let (_temp, inventory) = setup_inventory();
    inventory.add(new_car("C001", "Toyota", "Altis", 2020)).unwrap();

    let car = inventory.mark_sold(id("C001"), sale(430_000.0)).unwrap();

    assert!(car.is_sold);
    assert_eq!(car.profit(), 30_000.0);

    let stored = inventory.get(id("C001")).unwrap();
    assert_eq!(stored, car);
    assert_eq!(stored.status_label(), "Yes");
}

#[test]
fn test_mark_sold_twice_rejected() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let result = inventory.mark_sold(id("C002"), sale(1.0));
    assert!(matches!(result, Err(CarlotError::Validation(_))));
    assert_eq!(inventory.get(id("C002")).unwrap().final_price, 420_000.0);
}

#[test]
fn test_mark_sold_missing_car() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let result = inventory.mark_sold(id("C404"), sale(1.0));
    assert!(matches!(result, Err(CarlotError::CarNotFound(_))));
}

#[test]
fn test_mark_sold_validates_phone_and_name() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    for phone in ["081-234-5678", "1234567", "1234567890123456", ""] {
        let details = SaleDetails {
            customer_phone: phone.to_string(),
            ..sale(400_000.0)
        };
        let result = inventory.mark_sold(id("C001"), details);
        assert!(
            matches!(result, Err(CarlotError::Validation(_))),
            "phone {:?} should be rejected",
            phone
        );
    }

    let nameless = SaleDetails {
        customer_name: " ".to_string(),
        ..sale(400_000.0)
    };
    assert!(matches!(
        inventory.mark_sold(id("C001"), nameless),
        Err(CarlotError::Validation(_))
    ));

    assert!(!inventory.get(id("C001")).unwrap().is_sold);
}

#[test]
fn test_update_sale_keeps_unset_fields() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let update = SaleUpdate {
        final_price: Some(440_000.0),
        ..SaleUpdate::default()
    };
    let car = inventory.update_sale(id("C002"), update).unwrap();

    assert_eq!(car.final_price, 440_000.0);
    assert_eq!(car.customer_name, "Somchai Jaidee");
    assert_eq!(car.customer_phone, "0812345678");
    assert_eq!(inventory.get(id("C002")).unwrap(), car);
}

#[test]
fn test_update_sale_customer() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let update = SaleUpdate {
        final_price: None,
        customer_name: Some("Malee".to_string()),
        customer_phone: Some("029998888".to_string()),
    };
    let car = inventory.update_sale(id("C002"), update).unwrap();

    assert_eq!(car.final_price, 420_000.0);
    assert_eq!(car.customer_name, "Malee");
    assert_eq!(car.customer_phone, "029998888");
}

#[test]
fn test_update_sale_rejects_invalid_values() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let update = SaleUpdate {
        final_price: Some(-5.0),
        ..SaleUpdate::default()
    };
    assert!(matches!(
        inventory.update_sale(id("C002"), update),
        Err(CarlotError::Validation(_))
    ));

    let update = SaleUpdate {
        customer_phone: Some("abc".to_string()),
        ..SaleUpdate::default()
    };
    assert!(matches!(
        inventory.update_sale(id("C002"), update),
        Err(CarlotError::Validation(_))
    ));

    assert_eq!(inventory.get(id("C002")).unwrap().final_price, 420_000.0);
}

#[test]
fn test_update_sale_on_unsold_car_rejected() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let result = inventory.update_sale(id("C001"), SaleUpdate::default());
    assert!(matches!(result, Err(CarlotError::Validation(_))));
}

#[test]
fn test_sale_update_is_empty() {
    assert!(SaleUpdate::default().is_empty());
    assert!(!SaleUpdate {
        customer_name: Some("x".to_string()),
        ..SaleUpdate::default()
    }
    .is_empty());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_car() {
    let (temp, inventory) = setup_inventory();
    populate(&inventory);

    let removed = inventory.delete(id("C001")).unwrap();
    assert_eq!(removed.brand, "Toyota");

    let ids: Vec<String> = inventory
        .list()
        .unwrap()
        .iter()
        .map(|c| c.car_id.to_string())
        .collect();
    assert_eq!(ids, vec!["C002", "C003"]);

    let basic_len = fs::metadata(temp.path().join("cars_basic.dat")).unwrap().len();
    assert_eq!(basic_len, 2 * 56);
}

#[test]
fn test_delete_missing_car() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let result = inventory.delete(id("C999"));
    assert!(matches!(result, Err(CarlotError::CarNotFound(_))));
    assert_eq!(inventory.list().unwrap().len(), 3);
}

#[test]
fn test_delete_from_empty_inventory() {
    let (_temp, inventory) = setup_inventory();

    let result = inventory.delete(id("C001"));
    assert!(matches!(result, Err(CarlotError::CarNotFound(_))));
}

// =============================================================================
// Query Tests
// =============================================================================

#[test]
fn test_get_missing_car() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    assert!(matches!(
        inventory.get(id("C123")),
        Err(CarlotError::CarNotFound(_))
    ));
}

#[test]
fn test_filter_by_brand_case_insensitive() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let cars = inventory
        .filter(&[CarFilter::Brand("TOYOTA".to_string())])
        .unwrap();

    let ids: Vec<i32> = cars.iter().map(|c| c.car_id.raw()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_filter_by_model_year_and_status() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let by_model = inventory.filter(&[CarFilter::Model("civic".to_string())]).unwrap();
    assert_eq!(by_model.len(), 1);
    assert_eq!(by_model[0].car_id.raw(), 2);

    let by_year = inventory.filter(&[CarFilter::Year(2020)]).unwrap();
    assert_eq!(by_year.len(), 2);

    let sold = inventory.filter(&[CarFilter::Sold(true)]).unwrap();
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].car_id.raw(), 2);

    let unsold = inventory.filter(&[CarFilter::Sold(false)]).unwrap();
    assert_eq!(unsold.len(), 2);
}

#[test]
fn test_filter_combined() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);

    let cars = inventory
        .filter(&[
            CarFilter::Brand("toyota".to_string()),
            CarFilter::Model("Camry".to_string()),
        ])
        .unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].car_id.raw(), 3);

    let none = inventory
        .filter(&[CarFilter::Brand("Honda".to_string()), CarFilter::Sold(false)])
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_filter_titles() {
    assert_eq!(
        CarFilter::Brand("toyota".to_string()).title(),
        "Cars Filtered by Brand = Toyota"
    );
    assert_eq!(CarFilter::Year(2020).title(), "Cars Filtered by Year = 2020");
    assert_eq!(CarFilter::Sold(false).title(), "Cars Filtered by Status = No");
}

#[test]
fn test_option_lists() {
    let (_temp, inventory) = setup_inventory();
    populate(&inventory);
    let cars = inventory.list().unwrap();

    assert_eq!(brand_options(&cars), vec!["Honda", "Toyota", "toyota"]);
    assert_eq!(model_options(&cars), vec!["Altis", "Camry", "Civic"]);
    assert_eq!(year_options(&cars), vec![2018, 2020]);
}
