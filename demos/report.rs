// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collecting every resolution failure instead of stopping at the first.
//!
//! Source paths are read from a small YAML manifest, so a malformed manifest entry
//! shows up as an invalid-input error.
//!
//! ```bash
//! cargo run --example report
//! ```

use envlayer::prelude::*;

const MANIFEST: &str = r#"
keys: [DATABASE_URL, PORT, API_TOKEN]
sources:
  - config/local.yaml
  - .env.local
  - .env
"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let manifest: serde_yaml::Value = serde_yaml::from_str(MANIFEST)?;
    let sources = SourceList::try_from(&manifest["sources"])?;
    let keys: Vec<String> = serde_yaml::from_value(manifest["keys"].clone())?;

    let report = Resolver::new().resolve_report(&keys, sources, ResolveOptions::new());

    for (key, value) in report.resolution.iter() {
        match value {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} is unresolved", key),
        }
    }

    if report.is_success() {
        println!("\nAll keys resolved.");
    } else {
        println!("\n{} problem(s):", report.failures.len());
        for failure in &report.failures {
            println!("  - {}", failure);
        }
    }

    Ok(())
}
