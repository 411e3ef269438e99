//! Basic logger usage example
//!
//! Demonstrates level gating, chained and formatted statements, and the
//! unknown-level fallback.
//!
//! Run with: cargo run --example basic_usage

use scope_log::prelude::*;
use scope_log::{file_log, if_debug, logd, loge, logi, logw};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== scope_log - Basic Usage Example ===\n");

    // Install a console sink that ends each line, before anything logs
    install_sink(Arc::new(ConsoleSink::new().with_newline(true)))?;

    println!("1. Logging at every level (threshold DEBUG):");
    loge!("This is an error message");
    logw!("This is a warning message");
    logi!("This is an info message");
    logd!("This is a debug message");

    println!("\n2. Chained statements:");
    let user = "alice";
    Log::info().append("user ").append(user).append(" logged in");

    println!("\n3. Raising the threshold to WARNING:");
    set_reporting_level(Severity::Warn);
    logi!("Info message (hidden)");
    logd!("Debug message (hidden)");
    logw!("Warning message (visible)");
    file_log!(Severity::Debug, "never formatted: {:?}", vec![1, 2, 3]);
    if_debug! {
        println!("not printed");
    }

    println!("\n4. Parsing a level name:");
    let level = Severity::from_name("LOUD");
    println!("   'LOUD' parsed as {}", level);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
