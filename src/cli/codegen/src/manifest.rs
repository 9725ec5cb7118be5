/* src/cli/codegen/src/manifest.rs */

// Route manifest accumulator and rendering. Entries keep discovery order;
// inserting an existing key replaces the value in place, matching the
// JS-object semantics of the consuming renderer.

use indexmap::IndexMap;

use super::shim::GENERATED_HEADER;

/// Normalize a route segment path into a manifest key: the trailing separator
/// is stripped except for the root route.
pub fn normalize_route_path(segments: &str) -> String {
  if segments == "/" {
    segments.to_string()
  } else {
    segments.trim_end_matches('/').to_string()
  }
}

/// Ordered mapping from route path to screen component name.
#[derive(Debug, Default)]
pub struct RouteManifest {
  entries: IndexMap<String, String>,
}

impl RouteManifest {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a route's screen component. Returns the replaced component name
  /// when the route path was already present (last write wins).
  pub fn insert(&mut self, segments: &str, screen_component: &str) -> Option<String> {
    self.entries.insert(normalize_route_path(segments), screen_component.to_string())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Render the generated manifest module: the mapping literal in insertion
  /// order, plus the known-route type widened to accept any string.
  pub fn render(&self) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    out.push_str("export const routeManifest = {\n");
    for (route_path, component) in &self.entries {
      out.push_str(&format!("  ['{route_path}']: '{component}',\n"));
    }
    out.push_str("} as const\n\n");
    out.push_str("// eslint-disable-next-line @typescript-eslint/ban-types\n");
    out.push_str("export type KnownRoutes = keyof typeof routeManifest | (string & {})\n");
    out
  }
}
