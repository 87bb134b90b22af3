//! Built-in plugins
//!
//! These are sequencing stubs for the three capability extensions the
//! toolchain activates by default. They publish context state other plugins
//! and downstream tooling consume; the heavy lifting (compilation,
//! upgrade-safety analysis, documentation rendering) stays external.

mod docgen;
mod solc;
mod upgrades;

pub use docgen::DocgenPlugin;
pub use solc::SolcPlugin;
pub use upgrades::UpgradesPlugin;
