//! # Seed Data Generator
//!
//! Populates the database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p catalog-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p catalog-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p catalog-db --bin seed -- --db ./data/catalog.db
//! ```
//!
//! ## Generated Products
//! Cycles through a small set of realistic names and descriptions; prices
//! spread over $0.99 - $99.99. No images are attached (the admin can upload
//! them through the form).

use std::env;

use catalog_core::types::ProductInput;
use catalog_core::Product;
use catalog_db::{Database, DbConfig};

/// Base names for demo products.
const NAMES: &[&str] = &[
    "Aluminium Widget",
    "Brass Widget",
    "Steel Spanner",
    "Torque Wrench",
    "Claw Hammer",
    "Cordless Drill",
    "Socket Set",
    "Measuring Tape",
    "Utility Knife",
    "Work Gloves",
    "Safety Goggles",
    "Soldering Iron",
];

/// Description fragments paired with the names above.
const DESCRIPTIONS: &[&str] = &[
    "Shop-floor staple, sold individually.",
    "Corrosion resistant, suitable for outdoor use.",
    "Drop-forged and heat treated.",
    "Calibrated at the factory.",
    "Fibreglass handle with rubber grip.",
    "Battery and charger included.",
    "Metric sizes, 40 pieces.",
    "8 metre reel with locking slide.",
    "Retractable blade, spare blades included.",
    "One size fits most.",
    "Anti-fog coating.",
    "Temperature controlled, 60 watts.",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./catalog_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Catalog Admin Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./catalog_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Catalog Admin Seed Data Generator");
    println!("=================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected to database, migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("Database already has {} products", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let mut generated = 0;
    for seed in 0..count {
        let product = generate_product(seed);

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.name, e);
            continue;
        }

        generated += 1;

        if generated % 25 == 0 {
            println!("  Generated {} products...", generated);
        }
    }

    println!();
    println!("Generated {} products", generated);

    Ok(())
}

/// Generates a single demo product.
fn generate_product(seed: usize) -> Product {
    let name = NAMES[seed % NAMES.len()];
    let description = DESCRIPTIONS[seed % DESCRIPTIONS.len()];

    // $0.99 - $99.99, deterministic across runs
    let cents = 99 + (seed * 731) % 9900;
    let price = format!("{}.{:02}", cents / 100, cents % 100);

    let batch = seed / NAMES.len() + 1;

    Product::new(
        ProductInput {
            name: format!("{name} (batch {batch})"),
            description: description.to_string(),
            price,
        },
        None,
    )
}
