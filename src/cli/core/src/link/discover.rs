/* src/cli/core/src/link/discover.rs */

// Route discovery: walks the scan roots for .ts/.tsx files under a `routes`
// directory, applies the exclusion filter, and classifies each file into
// exactly one route kind. Files under a routes directory that match no
// pattern are ignored (helper modules may live there) but surfaced with a
// warning so misnamed route files do not fail silently.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use routelink_codegen::{ClassifiedRoute, classify_route};

use crate::config::ScanSection;
use crate::ui;
use crate::workspace::rel_unix;

#[derive(Debug)]
pub struct RouteFile {
  pub path: PathBuf,
  /// Base-relative path with '/' separators, e.g.
  /// "features/@app-core/routes/blog/index.tsx".
  pub rel: String,
  /// Directory prefix before the `routes` boundary, the workspace lookup key.
  pub package_prefix: String,
  pub route: ClassifiedRoute,
}

fn is_excluded(entry: &walkdir::DirEntry, exclude: &[String]) -> bool {
  entry.file_type().is_dir()
    && entry.file_name().to_str().is_some_and(|name| exclude.iter().any(|d| d == name))
}

fn is_route_source(path: &Path) -> bool {
  matches!(path.extension().and_then(|e| e.to_str()), Some("ts" | "tsx"))
}

/// Enumerate and classify all route files under the scan roots, in
/// deterministic (per-root, filename-sorted) order.
pub fn discover_routes(base_dir: &Path, scan: &ScanSection) -> Result<Vec<RouteFile>> {
  let mut routes = Vec::new();

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
      if !entry.file_type().is_file() || !is_route_source(entry.path()) {
        continue;
      }
      let rel = rel_unix(base_dir, entry.path())?;
      let Some(boundary) = rel.find("/routes/") else {
        continue;
      };
      let package_prefix = rel[..boundary].to_string();
      let route_rel = &rel[boundary + "/routes".len()..];

      match classify_route(route_rel) {
        Some(route) => routes.push(RouteFile {
          path: entry.path().to_path_buf(),
          rel,
          package_prefix,
          route,
        }),
        None => ui::warn(&format!("{rel} matches no route kind, skipping")),
      }
    }
  }

  Ok(routes)
}
