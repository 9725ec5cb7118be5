/* src/cli/core/src/link/mod.rs */

// The link pipeline: resolve workspace packages, discover and classify route
// files, infer each route's exports, then regenerate both target app trees
// and the route manifest. All parsing happens before the first destructive
// step, so a bad route or unmapped package aborts with the previous output
// intact.

mod discover;
mod emit;
mod infer;

use std::path::Path;

use anyhow::{Context, Result};

use routelink_codegen::{ParsedRoute, RouteKind, RouteManifest, normalize_route_path};

use crate::config::RoutelinkConfig;
use crate::ui;
use crate::workspace::parse_workspaces;

use discover::discover_routes;
use emit::{Emitter, ExpoEmitter, NextEmitter, clear_output_root, write_shim};
use infer::{InferredExports, extract_screen_component, infer_exports, requires_inspection};

// Shims are written kind-by-kind in this order, so layouts land before the
// pages they wrap and the manifest accumulates index/param routes first.
const EMIT_ORDER: &[RouteKind] = &[
  RouteKind::Index,
  RouteKind::Param,
  RouteKind::Layout,
  RouteKind::Template,
  RouteKind::Head,
  RouteKind::Error,
  RouteKind::Loading,
  RouteKind::NotFound,
  RouteKind::OpengraphImage,
  RouteKind::TwitterImage,
  RouteKind::Api,
];

pub fn run_link(config: &RoutelinkConfig, base_dir: &Path) -> Result<()> {
  ui::banner("link");

  let workspaces = parse_workspaces(base_dir, &config.scan)?;
  ui::arrow(&format!("{} workspace package(s)", workspaces.len()));

  let files = discover_routes(base_dir, &config.scan)?;
  ui::arrow(&format!("{} route file(s)", files.len()));

  let mut parsed: Vec<(String, ParsedRoute)> = Vec::with_capacity(files.len());
  for file in &files {
    let package_name = workspaces
      .resolve(&file.package_prefix)
      .with_context(|| format!("while linking {}", file.rel))?;

    let (exports, screen_component) = if requires_inspection(file.route.kind) {
      let source = std::fs::read_to_string(&file.path)
        .with_context(|| format!("failed to read {}", file.path.display()))?;
      (infer_exports(file.route.kind, &source), extract_screen_component(&source))
    } else {
      (
        InferredExports {
          next: vec!["default".to_string()],
          expo: vec!["default".to_string()],
        },
        None,
      )
    };

    parsed.push((
      file.rel.clone(),
      ParsedRoute {
        kind: file.route.kind,
        package_name: package_name.to_string(),
        segments: file.route.segments.clone(),
        param: file.route.param.clone(),
        source_stem: file.route.source_stem.clone(),
        next_exports: exports.next,
        expo_exports: exports.expo,
        screen_component,
      },
    ));
  }

  let expo = ExpoEmitter::new(base_dir, &config.targets.expo.app_dir);
  let next = NextEmitter::new(base_dir, &config.targets.next.app_dir);
  clear_output_root(expo.app_dir())?;
  clear_output_root(next.app_dir())?;

  let emitters: [&dyn Emitter; 2] = [&expo, &next];
  let mut manifest = RouteManifest::new();
  let mut shim_count = 0usize;

  for kind in EMIT_ORDER {
    for (rel, route) in parsed.iter().filter(|(_, r)| r.kind == *kind) {
      if matches!(route.kind, RouteKind::Index | RouteKind::Param)
        && let Some(screen) = &route.screen_component
      {
        // Param routes keep their bracket token in the manifest key.
        let key_segments = match &route.param {
          Some(param) => format!("{}{param}/", route.segments),
          None => route.segments.clone(),
        };
        if let Some(previous) = manifest.insert(&key_segments, screen) {
          let key = normalize_route_path(&key_segments);
          ui::warn(&format!("{rel}: route '{key}' was '{previous}', now '{screen}'"));
        }
      }

      for emitter in emitters {
        if let Some(shim) = emitter.plan(route) {
          write_shim(emitter.app_dir(), &shim)?;
          ui::detail_ok(&format!(
            "{}{} \u{00b7} {}",
            emitter.label(),
            shim.rel_path,
            route.kind.as_str()
          ));
          shim_count += 1;
        }
      }
    }
  }

  let manifest_path = base_dir.join(&config.manifest.out);
  if let Some(parent) = manifest_path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&manifest_path, manifest.render())
    .with_context(|| format!("failed to write {}", manifest_path.display()))?;
  ui::detail_ok(&config.manifest.out);

  ui::ok(&format!(
    "{} route(s) \u{00b7} {} shim(s) \u{00b7} {} manifest entr{}",
    parsed.len(),
    shim_count,
    manifest.len(),
    if manifest.len() == 1 { "y" } else { "ies" }
  ));
  Ok(())
}
