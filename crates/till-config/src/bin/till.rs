//! # Till Checkout CLI
//!
//! Scans SKUs against the configured catalog and prints the total.
//!
//! ## Usage
//! ```bash
//! # Replay the two reference baskets with the built-in catalog
//! cargo run -p till-config --bin till
//!
//! # Scan specific SKUs and show the itemised receipt
//! cargo run -p till-config --bin till -- --receipt atv atv atv vga
//!
//! # Use a pricing document
//! cargo run -p till-config --bin till -- --pricing ./config.json ipd ipd
//! ```
//!
//! ## Logging
//! - `RUST_LOG=debug` - Show every scan
//! - Default: warnings, plus loader summaries

use std::env;

use till_config::{create_default_checkout, Settings};
use till_core::Checkout;
use tracing_subscriber::EnvFilter;

/// Reference baskets replayed when no SKUs are given.
const SCENARIOS: &[(&str, &[&str])] = &[
    ("atv, atv, atv, vga", &["atv", "atv", "atv", "vga"]),
    (
        "atv, ipd, ipd, atv, ipd, ipd, ipd",
        &["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"],
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut settings = Settings::from_env()?;
    let mut show_receipt = false;
    let mut skus: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pricing" | "-p" => {
                if i + 1 >= args.len() {
                    return Err("--pricing requires a file path".into());
                }
                settings = settings.with_pricing_path(&args[i + 1]);
                i += 1;
            }
            "--receipt" | "-r" => show_receipt = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            option if option.starts_with('-') => {
                return Err(format!("Unknown option: {option}").into());
            }
            sku => skus.push(sku.to_string()),
        }
        i += 1;
    }

    let mut checkout = create_default_checkout(&settings)?;

    if skus.is_empty() {
        for (index, (label, basket)) in SCENARIOS.iter().enumerate() {
            if index > 0 {
                checkout.reset();
                println!();
            }
            println!("--- Scenario {}: {} ---", index + 1, label);
            scan_and_report(&mut checkout, basket.iter().copied(), show_receipt)?;
        }
    } else {
        scan_and_report(&mut checkout, skus.iter().map(String::as_str), show_receipt)?;
    }

    Ok(())
}

/// Scans every SKU in order, then prints the total (and receipt).
fn scan_and_report<'a>(
    checkout: &mut Checkout,
    skus: impl IntoIterator<Item = &'a str>,
    show_receipt: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for sku in skus {
        checkout.scan(sku)?;
    }

    if show_receipt {
        println!("{}", checkout.receipt());
    } else {
        println!("Total: {}", checkout.total());
    }

    Ok(())
}

fn print_usage() {
    println!("Till Checkout");
    println!();
    println!("Usage: till [OPTIONS] [SKU...]");
    println!();
    println!("Scans each SKU in order and prints the cheapest total.");
    println!("Without SKUs, replays the reference baskets.");
    println!();
    println!("Options:");
    println!("  -p, --pricing <PATH>  JSON pricing document (default: built-in catalog)");
    println!("  -r, --receipt         Print an itemised receipt instead of the total");
    println!("  -h, --help            Show this help message");
    println!();
    println!("Environment:");
    println!("  TILL_PRICING_PATH       Pricing document path");
    println!("  TILL_USE_DEFAULT_RULES  Use built-in promotions when the document has none");
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so totals on stdout stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till_config=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
