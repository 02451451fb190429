/**
 * Catalog Seeding Utility
 *
 * Inserts a set of sample products into the database so the catalog has
 * something to browse. Safe to run against an empty or existing database;
 * products are plain inserts, so running it twice duplicates the samples.
 *
 * Usage: cargo run --bin seed_products
 */

use storefront::backend::catalog::products::insert_product;
use storefront::backend::server::config::{connect_database, ServerConfig};

const SAMPLE_PRODUCTS: &[(&str, &str, f64)] = &[
    ("Laptop", "Powerful laptop for work and play.", 1200.00),
    ("Smartphone", "High-end smartphone with great camera.", 800.00),
    ("Headphones", "Noise-cancelling headphones for immersive audio.", 150.00),
    ("Monitor", "27-inch 4K monitor.", 300.00),
    ("Keyboard", "Mechanical keyboard for gaming.", 100.00),
    ("Wireless Mouse", "Ergonomic wireless mouse.", 50.00),
    ("Gaming Console", "Next-gen gaming console.", 500.00),
    ("Tablet", "10-inch tablet for entertainment.", 250.00),
    ("Camera", "Mirrorless digital camera.", 700.00),
    ("Smartwatch", "Fitness tracking smartwatch.", 200.00),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env();
    let pool = connect_database(&config.database_url).await?;

    for (name, description, price) in SAMPLE_PRODUCTS {
        let product = insert_product(&pool, name, description, *price).await?;
        println!("Product '{}' added successfully! (id {})", product.name, product.id);
    }

    Ok(())
}
