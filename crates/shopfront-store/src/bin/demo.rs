//! # Store Walkthrough Demo
//!
//! Drives the Store the way a UI would and prints the resulting state.
//!
//! ## Usage
//! ```bash
//! # Run the walkthrough
//! cargo run -p shopfront-store --bin demo
//!
//! # Also dump the final snapshot as JSON
//! cargo run -p shopfront-store --bin demo -- --json
//!
//! # See per-operation logs
//! RUST_LOG=debug cargo run -p shopfront-store --bin demo
//! ```

use std::env;

use shopfront_store::{catalog, StoreHandle, StoreSnapshot};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let mut dump_json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" | "-j" => dump_json = true,
            "--help" | "-h" => {
                println!("Shopfront Store Walkthrough");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -j, --json    Dump the final snapshot as JSON");
                println!("  -h, --help    Show this help message");
                return Ok(());
            }
            _ => {}
        }
    }

    println!("Shopfront Store Walkthrough");
    println!("===========================");

    let store = StoreHandle::new(&catalog::seed());

    let snapshot = store.snapshot();
    println!("Catalog loaded: {} products", snapshot.products.len());
    if let Some(detail) = &snapshot.detail_product {
        println!("Default detail product: {} ({})", detail.title, detail.price());
    }
    println!();

    // A typical browsing session: inspect, add, adjust, remove, clear.
    let snapshot = store.open_modal(2)?;
    if let Some(modal) = &snapshot.modal_product {
        println!("Quick view: {} - {}", modal.title, modal.description);
    }
    store.close_modal();

    let snapshot = store.add_to_cart(1)?;
    print_cart("after add_to_cart(1)", &snapshot);

    let snapshot = store.add_to_cart(2)?;
    print_cart("after add_to_cart(2)", &snapshot);

    let snapshot = store.increment(1)?;
    print_cart("after increment(1)", &snapshot);

    let snapshot = store.decrement(2)?;
    print_cart("after decrement(2) (removes the line)", &snapshot);

    let snapshot = store.remove_item(1)?;
    print_cart("after remove_item(1)", &snapshot);

    store.add_to_cart(7)?;
    let snapshot = store.clear_cart();
    print_cart("after clear_cart()", &snapshot);

    if dump_json {
        println!();
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    }

    Ok(())
}

/// Prints the cart lines and totals of a snapshot.
fn print_cart(label: &str, snapshot: &StoreSnapshot) {
    println!("Cart {}:", label);
    if snapshot.cart_is_empty() {
        println!("  (empty)");
    }
    for entry in &snapshot.cart {
        println!(
            "  {} x{}  {}",
            entry.title,
            entry.count,
            entry.line_total()
        );
    }
    println!(
        "  subtotal {}  tax {}  total {}",
        snapshot.totals.subtotal, snapshot.totals.tax, snapshot.totals.total
    );
    println!();
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show every store operation
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
