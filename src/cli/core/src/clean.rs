/* src/cli/core/src/clean.rs */

// `routelink clean`: remove every artifact a link run produced, the two
// generated app trees and the route manifest. Missing artifacts are not an
// error, so clean is safe to run twice.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::RoutelinkConfig;
use crate::ui;

fn delete_dir_if_exists(dir: &Path, label: &str) -> Result<()> {
  if dir.is_dir() {
    std::fs::remove_dir_all(dir)
      .with_context(|| format!("failed to remove {}", dir.display()))?;
    ui::detail(&format!("deleted {label}"));
  }
  Ok(())
}

fn delete_file_if_exists(file: &Path, label: &str) -> Result<()> {
  if file.is_file() {
    std::fs::remove_file(file)
      .with_context(|| format!("failed to remove {}", file.display()))?;
    ui::detail(&format!("deleted {label}"));
  }
  Ok(())
}

pub fn run_clean(config: &RoutelinkConfig, base_dir: &Path) -> Result<()> {
  ui::banner("clean");

  let expo = &config.targets.expo.app_dir;
  let next = &config.targets.next.app_dir;
  delete_dir_if_exists(&base_dir.join(expo), expo)?;
  delete_dir_if_exists(&base_dir.join(next), next)?;
  delete_file_if_exists(&base_dir.join(&config.manifest.out), &config.manifest.out)?;

  ui::ok("clean complete");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> RoutelinkConfig {
    toml::from_str("[project]\nname = \"fixture\"\n").unwrap()
  }

  #[test]
  fn clean_removes_generated_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    let next_dir = tmp.path().join("apps/next/app/(generated)/about");
    std::fs::create_dir_all(&next_dir).unwrap();
    std::fs::write(next_dir.join("page.tsx"), "generated").unwrap();
    let manifest = tmp.path().join("packages/@registries/routeManifest.generated.ts");
    std::fs::create_dir_all(manifest.parent().unwrap()).unwrap();
    std::fs::write(&manifest, "generated").unwrap();

    run_clean(&config(), tmp.path()).unwrap();

    assert!(!tmp.path().join("apps/next/app/(generated)").exists());
    assert!(!manifest.exists());
  }

  #[test]
  fn clean_tolerates_missing_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    run_clean(&config(), tmp.path()).unwrap();
    run_clean(&config(), tmp.path()).unwrap();
  }
}
