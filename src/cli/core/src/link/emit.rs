/* src/cli/core/src/link/emit.rs */

// Target emitters: one per runtime, behind a shared trait that computes the
// output location and renders the shim content for a route. Each emitter owns
// one generated-output root which is cleared wholesale before regeneration,
// so stale routes from a previous run cannot linger.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use routelink_codegen::{ParsedRoute, RouteKind, render_shim};

/// A planned shim file: root-relative path plus rendered contents.
#[derive(Debug)]
pub struct ShimFile {
  pub rel_path: String,
  pub contents: String,
}

pub trait Emitter {
  /// Output-root label used in logs, as written in the config.
  fn label(&self) -> &str;
  fn app_dir(&self) -> &Path;
  /// Plan the shim for a route, or `None` when this runtime does not emit
  /// the route kind (or the route is a hand-authored root layout/template).
  fn plan(&self, route: &ParsedRoute) -> Option<ShimFile>;
}

/// Native app-directory convention: index files under mirrored route
/// directories, `_layout` files for layouts and templates.
pub struct ExpoEmitter {
  label: String,
  app_dir: PathBuf,
}

impl ExpoEmitter {
  pub fn new(base_dir: &Path, app_dir: &str) -> Self {
    Self { label: app_dir.to_string(), app_dir: base_dir.join(app_dir) }
  }
}

impl Emitter for ExpoEmitter {
  fn label(&self) -> &str {
    &self.label
  }

  fn app_dir(&self) -> &Path {
    &self.app_dir
  }

  fn plan(&self, route: &ParsedRoute) -> Option<ShimFile> {
    let segments = &route.segments;
    let import_path = route.import_path();
    match route.kind {
      RouteKind::Index => Some(ShimFile {
        rel_path: format!("{segments}index.tsx"),
        contents: render_shim(&route.expo_exports, &import_path, false),
      }),
      RouteKind::Param => {
        let param = route.param.as_deref()?;
        Some(ShimFile {
          rel_path: format!("{segments}{param}/index.tsx"),
          contents: render_shim(&route.expo_exports, &import_path, false),
        })
      }
      RouteKind::Layout | RouteKind::Template if !route.is_root() => Some(ShimFile {
        rel_path: format!("{segments}_layout.tsx"),
        contents: render_shim(&route.expo_exports, &import_path, false),
      }),
      _ => None,
    }
  }
}

/// Web app-directory convention: `page` files for index/param routes,
/// dedicated filenames for the remaining kinds, and a client-execution
/// directive on client-rendered shims.
pub struct NextEmitter {
  label: String,
  app_dir: PathBuf,
}

impl NextEmitter {
  pub fn new(base_dir: &Path, app_dir: &str) -> Self {
    Self { label: app_dir.to_string(), app_dir: base_dir.join(app_dir) }
  }
}

impl Emitter for NextEmitter {
  fn label(&self) -> &str {
    &self.label
  }

  fn app_dir(&self) -> &Path {
    &self.app_dir
  }

  fn plan(&self, route: &ParsedRoute) -> Option<ShimFile> {
    let segments = &route.segments;
    let import_path = route.import_path();

    let (rel_path, client) = match route.kind {
      RouteKind::Index => (format!("{segments}page.tsx"), true),
      RouteKind::Param => {
        let param = route.param.as_deref()?;
        (format!("{segments}{param}/page.tsx"), true)
      }
      RouteKind::Layout if !route.is_root() => (format!("{segments}layout.tsx"), true),
      RouteKind::Template if !route.is_root() => (format!("{segments}template.tsx"), true),
      RouteKind::Layout | RouteKind::Template => return None,
      RouteKind::Head => (format!("{segments}head.tsx"), false),
      RouteKind::Error => (format!("{segments}error.tsx"), true),
      RouteKind::Loading => (format!("{segments}loading.tsx"), true),
      RouteKind::NotFound => (format!("{segments}not-found.tsx"), true),
      RouteKind::OpengraphImage => (format!("{segments}opengraph-image.tsx"), false),
      RouteKind::TwitterImage => (format!("{segments}twitter-image.tsx"), false),
      RouteKind::Api => (format!("{segments}route.ts"), false),
    };
    Some(ShimFile { rel_path, contents: render_shim(&route.next_exports, &import_path, client) })
  }
}

/// Reset a generated-output root: create it if absent, then remove it
/// recursively. The tree is rebuilt directory-by-directory as shims are
/// written, so a run with zero routes leaves no empty root behind.
pub fn clear_output_root(dir: &Path) -> Result<()> {
  std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
  std::fs::remove_dir_all(dir).with_context(|| format!("failed to remove {}", dir.display()))?;
  Ok(())
}

/// Write a planned shim under the emitter's output root.
pub fn write_shim(app_dir: &Path, shim: &ShimFile) -> Result<()> {
  let path = app_dir.join(shim.rel_path.trim_start_matches('/'));
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&path, &shim.contents)
    .with_context(|| format!("failed to write {}", path.display()))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn route(kind: RouteKind, segments: &str, param: Option<&str>) -> ParsedRoute {
    let source_stem = match kind {
      RouteKind::Index => "index".to_string(),
      RouteKind::Param => param.unwrap().to_string(),
      other => other.as_str().to_string(),
    };
    ParsedRoute {
      kind,
      package_name: "@app/core".to_string(),
      segments: segments.to_string(),
      param: param.map(str::to_string),
      source_stem: if kind == RouteKind::Api { "route".to_string() } else { source_stem },
      next_exports: vec!["default".to_string()],
      expo_exports: vec!["default".to_string()],
      screen_component: None,
    }
  }

  #[test]
  fn expo_index_and_param_paths() {
    let expo = ExpoEmitter::new(Path::new("/repo"), "apps/expo/app/(generated)");
    let shim = expo.plan(&route(RouteKind::Index, "/about/", None)).unwrap();
    assert_eq!(shim.rel_path, "/about/index.tsx");

    let shim = expo.plan(&route(RouteKind::Param, "/blog/", Some("[slug]"))).unwrap();
    assert_eq!(shim.rel_path, "/blog/[slug]/index.tsx");
    assert!(shim.contents.contains("from '@app/core/routes/blog/[slug]'"));
  }

  #[test]
  fn expo_layout_uses_underscore_name() {
    let expo = ExpoEmitter::new(Path::new("/repo"), "apps/expo/app/(generated)");
    let shim = expo.plan(&route(RouteKind::Layout, "/settings/", None)).unwrap();
    assert_eq!(shim.rel_path, "/settings/_layout.tsx");
    let shim = expo.plan(&route(RouteKind::Template, "/settings/", None)).unwrap();
    assert_eq!(shim.rel_path, "/settings/_layout.tsx");
  }

  #[test]
  fn expo_skips_web_only_kinds() {
    let expo = ExpoEmitter::new(Path::new("/repo"), "apps/expo/app/(generated)");
    for kind in [
      RouteKind::Head,
      RouteKind::Error,
      RouteKind::Loading,
      RouteKind::NotFound,
      RouteKind::OpengraphImage,
      RouteKind::TwitterImage,
      RouteKind::Api,
    ] {
      assert!(expo.plan(&route(kind, "/x/", None)).is_none(), "{kind:?}");
    }
  }

  #[test]
  fn next_kind_filenames() {
    let next = NextEmitter::new(Path::new("/repo"), "apps/next/app/(generated)");
    let cases = [
      (RouteKind::Index, "/about/", "/about/page.tsx"),
      (RouteKind::Layout, "/about/", "/about/layout.tsx"),
      (RouteKind::Template, "/about/", "/about/template.tsx"),
      (RouteKind::Head, "/about/", "/about/head.tsx"),
      (RouteKind::Error, "/about/", "/about/error.tsx"),
      (RouteKind::Loading, "/about/", "/about/loading.tsx"),
      (RouteKind::NotFound, "/about/", "/about/not-found.tsx"),
      (RouteKind::OpengraphImage, "/about/", "/about/opengraph-image.tsx"),
      (RouteKind::TwitterImage, "/about/", "/about/twitter-image.tsx"),
      (RouteKind::Api, "/about/", "/about/route.ts"),
    ];
    for (kind, segments, expected) in cases {
      let shim = next.plan(&route(kind, segments, None)).unwrap();
      assert_eq!(shim.rel_path, expected, "{kind:?}");
    }
  }

  #[test]
  fn next_client_directive_per_kind() {
    let next = NextEmitter::new(Path::new("/repo"), "apps/next/app/(generated)");
    let client = [RouteKind::Index, RouteKind::Layout, RouteKind::Error, RouteKind::NotFound];
    for kind in client {
      let shim = next.plan(&route(kind, "/x/", None)).unwrap();
      assert!(shim.contents.starts_with("'use client'\n"), "{kind:?}");
    }
    let server = [RouteKind::Head, RouteKind::OpengraphImage, RouteKind::Api];
    for kind in server {
      let shim = next.plan(&route(kind, "/x/", None)).unwrap();
      assert!(shim.contents.starts_with("// Auto-generated"), "{kind:?}");
    }
  }

  #[test]
  fn root_layout_and_template_skipped_by_both() {
    let expo = ExpoEmitter::new(Path::new("/repo"), "apps/expo/app/(generated)");
    let next = NextEmitter::new(Path::new("/repo"), "apps/next/app/(generated)");
    for kind in [RouteKind::Layout, RouteKind::Template] {
      assert!(expo.plan(&route(kind, "/", None)).is_none());
      assert!(next.plan(&route(kind, "/", None)).is_none());
    }
  }

  #[test]
  fn clear_output_root_removes_everything() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("app/(generated)");
    std::fs::create_dir_all(root.join("stale")).unwrap();
    std::fs::write(root.join("stale/page.tsx"), "old").unwrap();

    clear_output_root(&root).unwrap();
    assert!(!root.exists());

    // Also fine when the root did not exist at all.
    clear_output_root(&tmp.path().join("app/other")).unwrap();
  }

  #[test]
  fn write_shim_creates_parent_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let shim = ShimFile {
      rel_path: "/blog/[slug]/page.tsx".to_string(),
      contents: "content\n".to_string(),
    };
    write_shim(tmp.path(), &shim).unwrap();
    let written = std::fs::read_to_string(tmp.path().join("blog/[slug]/page.tsx")).unwrap();
    assert_eq!(written, "content\n");
  }
}
