//! Version command implementation

use crate::config::{WIDOCO_VERSION, WidocoConfig};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    let widoco = WidocoConfig::default();
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };

    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {profile}");
    println!();
    println!("WIDOCO:");
    println!("  Expected version: {WIDOCO_VERSION}");
    println!("  Default jar: {}", widoco.jar.display());
    println!("  Options: {}", widoco.options.join(" "));

    Ok(())
}
