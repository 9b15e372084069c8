//! Version command implementation

use crate::config::NAMESPACE_PREFIX;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("shapez-mod {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Module prefix: {NAMESPACE_PREFIX}");

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
