/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_config, load_config};
pub use types::{ManifestSection, RoutelinkConfig, ScanSection, TargetConfig, TargetsSection};
