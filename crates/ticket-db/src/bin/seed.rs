//! # Seed Data Generator
//!
//! Populates a fresh database with a demo company and a handful of sales so
//! `/api/factura-ticket?id=1` has something to print.
//!
//! ## Usage
//! ```bash
//! # Seed ./ticket.db with 5 sales (default)
//! cargo run -p ticket-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p ticket-db --bin seed -- --sales 20 --db ./data/ticket.db
//! ```
//!
//! ## Generated Data
//! - One `DATOS DE FACTURA` row
//! - Customers, sellers and products from the tables below
//! - Sales dated today, each with 1 to 4 lines; every third sale is a
//!   walk-in (no customer), every fourth has a sale-level discount

use chrono::{Duration, Local};
use std::env;
use ticket_db::{Database, DbConfig};

const COMPANY: (&str, &str, &str, &str, &str, &str) = (
    "Tienda X",
    "Barrio El Centro, Tegucigalpa",
    "08011999000001",
    "2222-0000",
    "ventas@tiendax.hn",
    "www.tiendax.hn",
);

const CUSTOMERS: &[(&str, &str, &str)] = &[
    ("Luis Martinez", "Col. Kennedy", "9999-1111"),
    ("Maria Lopez", "Res. Plaza", "9999-2222"),
    ("Carlos Reyes", "Col. Palmira", "9999-3333"),
];

const SELLERS: &[&str] = &["Ana Flores", "Jose Mejia"];

/// (name, unit price)
const PRODUCTS: &[(&str, f64)] = &[
    ("Cafe molido 400g", 85.00),
    ("Azucar 1kg", 32.50),
    ("Leche entera 1L", 28.75),
    ("Pan blanco", 45.00),
    ("Huevos (carton 30)", 120.00),
    ("Arroz 2lb", 24.90),
    ("Frijoles rojos 2lb", 36.00),
    ("Queso seco 1lb", 70.00),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut sales: usize = 5;
    let mut db_path = String::from("./ticket.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sales" | "-s" => {
                if i + 1 < args.len() {
                    sales = args[i + 1].parse().unwrap_or(5);
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
                println!("Ticket Receipts Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --sales <N>    Number of sales to generate (default: 5)");
                println!("  -d, --db <PATH>    Database file path (default: ./ticket.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Ticket Receipts Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!("Sales:    {}", sales);
    println!();

    let db = Database::new(DbConfig::new(&db_path).run_migrations(true)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM VENTA")
        .fetch_one(db.pool())
        .await?;
    if existing > 0 {
        println!("⚠ Database already has {} sales", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut tx = db.pool().begin().await?;

    let (name, address, rtn, phone, email, web) = COMPANY;
    sqlx::query(
        "INSERT INTO `DATOS DE FACTURA` (`NOMBRE EMPRESA`, `DIRECCION`, `RTN`, `TELEFONO`, `CORREO`, `PAGINA WEB`) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(address)
    .bind(rtn)
    .bind(phone)
    .bind(email)
    .bind(web)
    .execute(&mut *tx)
    .await?;

    for (idx, (customer, address, phone)) in CUSTOMERS.iter().enumerate() {
        sqlx::query(
            "INSERT INTO CLIENTES (`ID CLIENTE`, CLIENTE, DIRECCION, TELEFONO) VALUES (?, ?, ?, ?)",
        )
        .bind(idx as i64 + 1)
        .bind(*customer)
        .bind(*address)
        .bind(*phone)
        .execute(&mut *tx)
        .await?;
    }

    for (idx, seller) in SELLERS.iter().enumerate() {
        sqlx::query("INSERT INTO VENDEDORES (`ID VENDEDOR`, `NOMBRE VENDEDOR`) VALUES (?, ?)")
            .bind(idx as i64 + 1)
            .bind(*seller)
            .execute(&mut *tx)
            .await?;
    }

    for (idx, (product, _)) in PRODUCTS.iter().enumerate() {
        sqlx::query("INSERT INTO PRODUCTO (`ID PRODUCTO`, `NOMBRE PRODUCTO`) VALUES (?, ?)")
            .bind(idx as i64 + 1)
            .bind(*product)
            .execute(&mut *tx)
            .await?;
    }

    println!(
        "✓ Company, {} customers, {} sellers, {} products",
        CUSTOMERS.len(),
        SELLERS.len(),
        PRODUCTS.len()
    );

    let start = Local::now();

    for sale in 0..sales {
        let sale_id = sale as i64 + 1;
        let at = start - Duration::minutes(sale as i64 * 7);

        let customer = (sale % 3 != 2).then(|| (sale % CUSTOMERS.len()) as i64 + 1);
        let seller = (sale % SELLERS.len()) as i64 + 1;
        let global_discount = if sale % 4 == 3 { 10.0 } else { 0.0 };

        // (product id, quantity, unit price, line discount)
        let lines: Vec<(i64, f64, f64, f64)> = (0..1 + sale % 4)
            .map(|line| {
                let product_idx = (sale * 3 + line) % PRODUCTS.len();
                let quantity = (1 + (sale + line) % 3) as f64;
                let discount = if line == 0 && sale % 2 == 1 { 5.0 } else { 0.0 };
                (product_idx as i64 + 1, quantity, PRODUCTS[product_idx].1, discount)
            })
            .collect();

        let total: f64 = lines
            .iter()
            .map(|(_, quantity, price, discount)| quantity * price - discount)
            .sum::<f64>()
            - global_discount;

        sqlx::query(
            "INSERT INTO VENTA (`ID VENTA`, `ID CLIENTE`, `ID VENDEDOR`, `FECHA DE VENTA`, `HORA VENTA`, DESCUENTO, TOTAL) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(sale_id)
        .bind(customer)
        .bind(seller)
        .bind(at.format("%Y-%m-%d").to_string())
        .bind(at.format("%H:%M:%S").to_string())
        .bind(global_discount)
        .bind(total)
        .execute(&mut *tx)
        .await?;

        for &(product_id, quantity, price, discount) in &lines {
            sqlx::query(
                "INSERT INTO `DETALLE VENTA` (`ID VENTA`, ID_PRODUCTO, CANTIDAD, `PRECIO UNITARIO`, DESCUENTO) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(sale_id)
            .bind(product_id)
            .bind(quantity)
            .bind(price)
            .bind(discount)
            .execute(&mut *tx)
            .await?;
        }

        println!("  Sale #{} with {} line(s)", sale_id, lines.len());
    }

    tx.commit().await?;

    println!();
    println!("✓ Seed complete! Try /api/factura-ticket?id=1");

    db.close().await;
    Ok(())
}
