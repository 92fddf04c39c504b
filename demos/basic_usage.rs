// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for envlayer.
//!
//! This example demonstrates:
//! - Resolving keys from the environment with `.env` files as fallbacks
//! - Skipping fallback files that do not exist
//! - Tolerating keys nothing defines
//! - Typed conversions of resolved values
//!
//! To run this example:
//! ```bash
//! # Values set here win over anything in the files
//! export APP_NAME="MyApplication"
//!
//! # Optional fallback files, highest priority first
//! echo "DATABASE_PORT=5432" > .env.local
//! echo "ENABLE_DEBUG=true" > .env
//!
//! cargo run --example basic_usage
//! ```

use envlayer::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== envlayer: Basic Usage ===\n");

    let resolver = Resolver::new();
    let options = ResolveOptions::new()
        .skip_missing_files(true)
        .ignore_missing_keys(true);

    let resolution = resolver.resolve(
        ["APP_NAME", "DATABASE_PORT", "ENABLE_DEBUG", "LOG_LEVEL"],
        vec![".env.local", ".env"],
        options,
    )?;

    // Example 1: String values and where they came from
    println!("--- Example 1: String Values ---");
    match resolution.get("APP_NAME") {
        Some(value) => println!(
            "✓ APP_NAME = {} (from {:?})",
            value,
            resolution.origin("APP_NAME")
        ),
        None => println!("✗ APP_NAME is unresolved"),
    }

    // Example 2: Integer conversion
    println!("\n--- Example 2: Integer Values ---");
    match resolution.get("DATABASE_PORT") {
        Some(value) => match value.as_u64("DATABASE_PORT") {
            Ok(port) => println!("✓ DATABASE_PORT = {} (as u64)", port),
            Err(e) => println!("✗ DATABASE_PORT found but conversion failed: {}", e),
        },
        None => println!("✗ DATABASE_PORT is unresolved, using 3000"),
    }

    // Example 3: Boolean conversion
    println!("\n--- Example 3: Boolean Values ---");
    let debug = resolution
        .get("ENABLE_DEBUG")
        .map(|v| v.as_bool("ENABLE_DEBUG"))
        .transpose()?
        .unwrap_or(false);
    println!("ENABLE_DEBUG = {}", debug);

    // Example 4: Defaults for unresolved keys
    println!("\n--- Example 4: Defaults ---");
    let log_level = resolution.get_str("LOG_LEVEL").unwrap_or("info");
    println!("LOG_LEVEL = {}", log_level);

    println!("\nUnresolved keys: {:?}", resolution.unresolved_keys());
    println!("\n=== Example Complete ===");

    Ok(())
}
