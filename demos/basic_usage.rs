// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration crate.
//!
//! This example demonstrates:
//! - Decoding literal-expression strings into typed values
//! - Loading a configuration document from an explicit path
//! - Reading section values through the namespace
//! - The soft behavior of an absent credentials file
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use litcfg::prelude::*;
use std::fs;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== litcfg: Basic Usage ===\n");

    // Example 1: Decode literal-expression strings directly
    println!("--- Example 1: Literal Decoding ---");
    for text in ["'hello'", "42", "3.14", "True", "None", "['a', 'b']"] {
        println!("decode({:<12}) -> {:?}", text, decode(text)?);
    }

    // Non-literal input is rejected, never evaluated
    match decode("__import__('os')") {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("decode(\"__import__('os')\") -> rejected: {}", e),
    }

    // Example 2: Load a configuration document
    println!("\n--- Example 2: Configuration Document ---");
    let dir = std::env::temp_dir().join("litcfg-basic-usage");
    fs::create_dir_all(&dir)?;
    let config_path = dir.join("config.json");
    fs::write(
        &config_path,
        r#"{
    "VERSION": "'1.0'",
    "API": {
        "URL": "'https://api.example.org'",
        "PORT": "8080",
        "VERIFY": "True"
    }
}"#,
    )?;

    let config = ConfigDocument::load(Some(config_path.as_path()))?;
    println!("Loaded {}", config.path().display());
    println!("VERSION   = {:?}", config.value("VERSION")?.as_str());
    let api = config.node("API")?;
    println!("API.URL   = {:?}", api.value("URL")?.as_str());
    println!("API.PORT  = {:?}", api.value("PORT")?.as_i64());
    println!("API.VERIFY= {:?}", api.value("VERIFY")?.as_bool());

    // Example 3: Absent credentials file is not an error
    println!("\n--- Example 3: Credentials Document ---");
    let credentials_path = dir.join("no-such-credentials.json");
    let credentials = CredentialsDocument::load(Some(credentials_path.as_path()))?;
    println!("credentials.exists() = {}", credentials.exists());

    Ok(())
}
