/* src/cli/core/src/workspace.rs */

// Workspace resolver: maps monorepo directory prefixes onto logical package
// import names by reading each package's package.json. Built once per run;
// a route file under an unmapped prefix is a configuration error.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::config::ScanSection;

#[derive(Debug, Default)]
pub struct WorkspaceImportMap {
  entries: BTreeMap<String, String>,
}

impl WorkspaceImportMap {
  /// Resolve a directory prefix (e.g. "features/@app-core") to the package
  /// import name. Fails fast: an unmapped prefix aborts the whole run.
  pub fn resolve(&self, prefix: &str) -> Result<&str> {
    match self.entries.get(prefix) {
      Some(name) => Ok(name),
      None => {
        let known: Vec<&str> = self.entries.keys().map(|k| k.as_str()).collect();
        bail!(
          "no workspace package found for \"{prefix}\"\nknown package directories: {}",
          if known.is_empty() { "(none)".to_string() } else { known.join(", ") }
        );
      }
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  #[cfg(test)]
  pub fn insert(&mut self, prefix: &str, name: &str) {
    self.entries.insert(prefix.to_string(), name.to_string());
  }
}

/// Render a path relative to `base` with '/' separators regardless of platform.
pub fn rel_unix(base: &Path, path: &Path) -> Result<String> {
  let rel = path
    .strip_prefix(base)
    .with_context(|| format!("{} is not under {}", path.display(), base.display()))?;
  let mut parts = Vec::new();
  for component in rel.components() {
    let Some(part) = component.as_os_str().to_str() else {
      bail!("non-UTF-8 path: {}", path.display());
    };
    parts.push(part);
  }
  Ok(parts.join("/"))
}

fn is_excluded(entry: &walkdir::DirEntry, exclude: &[String]) -> bool {
  entry.file_type().is_dir()
    && entry.file_name().to_str().is_some_and(|name| exclude.iter().any(|d| d == name))
}

/// Scan the configured roots for package.json files and build the import map.
/// Packages without a "name" field are skipped.
pub fn parse_workspaces(base_dir: &Path, scan: &ScanSection) -> Result<WorkspaceImportMap> {
  let mut map = WorkspaceImportMap::default();
  for root in &scan.roots {
    let root_dir = base_dir.join(root);
    if !root_dir.is_dir() {
      continue;
    }
    let walker = WalkDir::new(&root_dir)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|e| !is_excluded(e, &scan.exclude));
    for entry in walker {
      let entry = entry.with_context(|| format!("failed to scan {}", root_dir.display()))?;
      if !entry.file_type().is_file() || entry.file_name() != "package.json" {
        continue;
      }
      let content = std::fs::read_to_string(entry.path())
        .with_context(|| format!("failed to read {}", entry.path().display()))?;
      let parsed: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in {}", entry.path().display()))?;
      let Some(name) = parsed.get("name").and_then(|n| n.as_str()) else {
        continue;
      };
      let package_dir = entry.path().parent().unwrap_or(entry.path());
      let prefix = rel_unix(base_dir, package_dir)?;
      map.entries.insert(prefix, name.to_string());
    }
  }
  Ok(map)
}
