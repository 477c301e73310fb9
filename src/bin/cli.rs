//! carlot CLI
//!
//! Command-line interface for the used-car inventory.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use carlot::inventory::{CarFilter, NewCar, SaleDetails, SaleUpdate};
use carlot::report::{self, Summary};
use carlot::{CarId, CarRecord, Config, Inventory, Result, TrailingData};

/// carlot CLI
#[derive(Parser, Debug)]
#[command(name = "carlot")]
#[command(about = "Used-car inventory stored in fixed-record binary files")]
#[command(version)]
struct Args {
    /// Directory holding cars_basic.dat, cars_status.dat and cars_sale.dat
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Fail the load when the record files differ in length
    #[arg(long)]
    strict: bool,

    /// Skip the cross-file car id check on load
    #[arg(long)]
    no_verify_ids: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a car
    Add {
        /// Car id, e.g. C001
        #[arg(long)]
        id: CarId,

        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        year: i32,

        /// Odometer reading in km
        #[arg(long)]
        odometer: i32,

        #[arg(long)]
        buy_price: i32,

        #[arg(long)]
        sell_price: f32,

        /// Final price; marks the car as sold
        #[arg(long, requires_all = ["customer_name", "customer_phone"])]
        final_price: Option<f32>,

        #[arg(long, requires = "final_price")]
        customer_name: Option<String>,

        #[arg(long, requires = "final_price")]
        customer_phone: Option<String>,
    },

    /// Record the sale of an available car
    Sell {
        /// Car id, e.g. C001
        id: CarId,

        #[arg(long)]
        final_price: f32,

        #[arg(long)]
        customer_name: String,

        #[arg(long)]
        customer_phone: String,
    },

    /// Change the details of a recorded sale
    EditSale {
        /// Car id, e.g. C001
        id: CarId,

        #[arg(long)]
        final_price: Option<f32>,

        #[arg(long)]
        customer_name: Option<String>,

        #[arg(long)]
        customer_phone: Option<String>,
    },

    /// Delete a car
    Delete {
        /// Car id, e.g. C001
        id: CarId,
    },

    /// Show every field of one car
    Show {
        /// Car id, e.g. C001
        id: CarId,

        #[arg(long)]
        json: bool,
    },

    /// List cars, optionally filtered
    List {
        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        /// Only sold cars
        #[arg(long, conflicts_with = "unsold")]
        sold: bool,

        /// Only available cars
        #[arg(long)]
        unsold: bool,

        #[arg(long)]
        json: bool,
    },

    /// Print a report and write it to a file
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        /// Output file (defaults to report_not_sale.txt / report_sold.txt)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the aggregate summary
    Summary {
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportKind {
    /// Cars not sold yet
    Unsold,
    /// Sold cars with customer details
    Sold,
}

/// JSON shape of one car, including derived fields
#[derive(Serialize)]
struct CarView<'a> {
    #[serde(flatten)]
    car: &'a CarRecord,
    status: &'static str,
    profit: f64,
}

impl<'a> CarView<'a> {
    fn new(car: &'a CarRecord) -> Self {
        Self {
            car,
            status: car.status_label(),
            profit: car.profit(),
        }
    }
}

fn main() {
    // Logs go to stderr; stdout carries command output only
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,carlot=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .verify_ids(!args.no_verify_ids)
        .trailing_data(if args.strict {
            TrailingData::Reject
        } else {
            TrailingData::Ignore
        })
        .build();

    let inventory = match Inventory::open(config) {
        Ok(inv) => inv,
        Err(e) => {
            tracing::error!("Failed to open inventory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&inventory, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(inventory: &Inventory, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            id,
            brand,
            model,
            year,
            odometer,
            buy_price,
            sell_price,
            final_price,
            customer_name,
            customer_phone,
        } => {
            let sale = final_price.map(|final_price| SaleDetails {
                final_price,
                customer_name: customer_name.unwrap_or_default(),
                customer_phone: customer_phone.unwrap_or_default(),
            });
            let car = inventory.add(NewCar {
                car_id: id,
                year,
                brand,
                model,
                odometer,
                buy_price,
                sell_price,
                sale,
            })?;
            println!("Car {} added successfully!", car.car_id);
        }

        Commands::Sell {
            id,
            final_price,
            customer_name,
            customer_phone,
        } => {
            let car = inventory.mark_sold(
                id,
                SaleDetails {
                    final_price,
                    customer_name,
                    customer_phone,
                },
            )?;
            println!("Car {} marked sold, profit {}", car.car_id, report::money(car.profit()));
        }

        Commands::EditSale {
            id,
            final_price,
            customer_name,
            customer_phone,
        } => {
            let update = SaleUpdate {
                final_price,
                customer_name,
                customer_phone,
            };
            if update.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let car = inventory.update_sale(id, update)?;
            println!("Car {} updated successfully!", car.car_id);
        }

        Commands::Delete { id } => {
            let car = inventory.delete(id)?;
            println!("Car {} deleted successfully.", car.car_id);
        }

        Commands::Show { id, json } => {
            let car = inventory.get(id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&CarView::new(&car))?);
            } else {
                println!("{}", report::car_detail(&car));
            }
        }

        Commands::List {
            brand,
            model,
            year,
            sold,
            unsold,
            json,
        } => {
            let mut filters = Vec::new();
            if let Some(brand) = brand {
                filters.push(CarFilter::Brand(brand));
            }
            if let Some(model) = model {
                filters.push(CarFilter::Model(model));
            }
            if let Some(year) = year {
                filters.push(CarFilter::Year(year));
            }
            if sold || unsold {
                filters.push(CarFilter::Sold(sold));
            }

            let cars = inventory.filter(&filters)?;
            if json {
                let views: Vec<CarView<'_>> = cars.iter().map(CarView::new).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if cars.is_empty() {
                println!("No cars found.");
            } else {
                let title = match filters.as_slice() {
                    [] => "All Cars".to_string(),
                    [only] => only.title(),
                    _ => "Filtered Cars".to_string(),
                };
                println!("{}", report::car_list(&cars, &title));
            }
        }

        Commands::Report { kind, out } => {
            let cars = inventory.list()?;
            let (text, default_file) = match kind {
                ReportKind::Unsold => (report::unsold_report(&cars), report::UNSOLD_REPORT_FILE),
                ReportKind::Sold => (report::sold_report(&cars), report::SOLD_REPORT_FILE),
            };
            let Some(text) = text else {
                println!("No cars for this report.");
                return Ok(());
            };

            println!("{}", text);
            let path = out.unwrap_or_else(|| PathBuf::from(default_file));
            fs::write(&path, &text)?;
            tracing::info!(path = %path.display(), "Report written");
        }

        Commands::Summary { json } => {
            let summary = Summary::from_cars(&inventory.list()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.render("Summary"));
            }
        }
    }

    Ok(())
}
