/* src/cli/codegen/src/route.rs */

// Route classification: maps a route source filename onto exactly one RouteKind
// and derives the route segments, param token, and source module stem that the
// emitters and the manifest need.

/// Role of a route source file in the file-system routing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
  Index,
  Param,
  Layout,
  Template,
  Head,
  Error,
  Loading,
  NotFound,
  OpengraphImage,
  TwitterImage,
  Api,
}

impl RouteKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Index => "index",
      Self::Param => "param",
      Self::Layout => "layout",
      Self::Template => "template",
      Self::Head => "head",
      Self::Error => "error",
      Self::Loading => "loading",
      Self::NotFound => "not-found",
      Self::OpengraphImage => "opengraph-image",
      Self::TwitterImage => "twitter-image",
      Self::Api => "api",
    }
  }
}

// Checked in this exact order; the first matching pattern wins and the file is
// never reconsidered for a later one. Filenames can satisfy several patterns
// textually, so the order is load-bearing.
const PATTERNS: &[(&str, RouteKind)] = &[
  ("layout.ts", RouteKind::Layout),
  ("template.ts", RouteKind::Template),
  ("error.ts", RouteKind::Error),
  ("loading.ts", RouteKind::Loading),
  ("not-found.ts", RouteKind::NotFound),
  ("opengraph-image.ts", RouteKind::OpengraphImage),
  ("twitter-image.ts", RouteKind::TwitterImage),
  ("route.ts", RouteKind::Api),
  ("index.ts", RouteKind::Index),
  ("head.ts", RouteKind::Head),
  ("].ts", RouteKind::Param),
];

/// Classify a route filename by substring matching against the fixed pattern
/// table. Returns `None` for files that encode no routing role.
pub fn classify_filename(file_name: &str) -> Option<RouteKind> {
  PATTERNS.iter().find(|(pat, _)| file_name.contains(pat)).map(|&(_, kind)| kind)
}

/// A classified route, relative to its package's `routes` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRoute {
  pub kind: RouteKind,
  /// Path segments between the `routes` boundary and the file, always starting
  /// and ending with '/' ("/" for routes at the top of the directory).
  pub segments: String,
  /// Bracket token for param routes, e.g. "[slug]".
  pub param: Option<String>,
  /// Module path from `segments` to the source file, extension stripped,
  /// e.g. "index", "[slug]", "[slug]/index", "layout".
  pub source_stem: String,
}

fn is_bracket_token(segment: &str) -> bool {
  segment.len() > 2 && segment.starts_with('[') && segment.ends_with(']')
}

fn file_stem(file_name: &str) -> &str {
  match file_name.rfind(".ts") {
    Some(pos) => &file_name[..pos],
    None => file_name,
  }
}

/// Classify a routes-relative path like "/blog/[slug]/index.tsx".
///
/// An `index` file whose parent directory is a bracket token is a param route
/// authored directory-style: `[slug]/index.tsx` and `[slug].tsx` describe the
/// same route, differing only in the module the shim re-exports from.
pub fn classify_route(route_rel: &str) -> Option<ClassifiedRoute> {
  let file_name = route_rel.rsplit('/').next().unwrap_or(route_rel);
  let kind = classify_filename(file_name)?;
  let dir_part = &route_rel[..route_rel.len() - file_name.len()];
  let stem = file_stem(file_name);

  let classified = match kind {
    RouteKind::Param => ClassifiedRoute {
      kind,
      segments: dir_part.to_string(),
      param: Some(stem.to_string()),
      source_stem: stem.to_string(),
    },
    RouteKind::Index => {
      let parent = dir_part.trim_end_matches('/').rsplit('/').next().unwrap_or("");
      if is_bracket_token(parent) {
        let segments = &dir_part[..dir_part.len() - parent.len() - 1];
        ClassifiedRoute {
          kind: RouteKind::Param,
          segments: segments.to_string(),
          param: Some(parent.to_string()),
          source_stem: format!("{parent}/index"),
        }
      } else {
        ClassifiedRoute {
          kind,
          segments: dir_part.to_string(),
          param: None,
          source_stem: "index".to_string(),
        }
      }
    }
    _ => ClassifiedRoute {
      kind,
      segments: dir_part.to_string(),
      param: None,
      source_stem: stem.to_string(),
    },
  };
  Some(classified)
}

/// A fully resolved route: classification plus the owning package and the
/// export sets inferred from the source text.
#[derive(Debug, Clone)]
pub struct ParsedRoute {
  pub kind: RouteKind,
  pub package_name: String,
  pub segments: String,
  pub param: Option<String>,
  pub source_stem: String,
  pub next_exports: Vec<String>,
  pub expo_exports: Vec<String>,
  pub screen_component: Option<String>,
}

impl ParsedRoute {
  /// Logical import path the generated shim re-exports from,
  /// e.g. `@app/core/routes/blog/[slug]`.
  pub fn import_path(&self) -> String {
    format!("{}/routes{}{}", self.package_name, self.segments, self.source_stem)
  }

  /// Root layouts and templates are hand-authored, never generated.
  pub fn is_root(&self) -> bool {
    self.segments == "/"
  }
}
