/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RoutelinkConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub scan: ScanSection,
  #[serde(default)]
  pub targets: TargetsSection,
  #[serde(default)]
  pub manifest: ManifestSection,
}

impl RoutelinkConfig {
  pub fn validate(&self) -> Result<()> {
    if self.scan.roots.is_empty() {
      bail!("scan.roots must not be empty");
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanSection {
  #[serde(default = "default_roots")]
  pub roots: Vec<String>,
  #[serde(default = "default_exclude")]
  pub exclude: Vec<String>,
}

impl Default for ScanSection {
  fn default() -> Self {
    Self { roots: default_roots(), exclude: default_exclude() }
  }
}

fn default_roots() -> Vec<String> {
  vec!["packages".to_string(), "features".to_string()]
}

fn default_exclude() -> Vec<String> {
  ["node_modules", ".git", ".next", ".expo", "dist", "build", "coverage", "__tests__", "__mocks__"]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetsSection {
  #[serde(default = "default_expo_target")]
  pub expo: TargetConfig,
  #[serde(default = "default_next_target")]
  pub next: TargetConfig,
}

impl Default for TargetsSection {
  fn default() -> Self {
    Self { expo: default_expo_target(), next: default_next_target() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
  pub app_dir: String,
}

fn default_expo_target() -> TargetConfig {
  TargetConfig { app_dir: "apps/expo/app/(generated)".to_string() }
}

fn default_next_target() -> TargetConfig {
  TargetConfig { app_dir: "apps/next/app/(generated)".to_string() }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSection {
  #[serde(default = "default_manifest_out")]
  pub out: String,
}

impl Default for ManifestSection {
  fn default() -> Self {
    Self { out: default_manifest_out() }
  }
}

fn default_manifest_out() -> String {
  "packages/@registries/routeManifest.generated.ts".to_string()
}
