/* src/cli/core/src/config/tests/parsing.rs */

use crate::config::{RoutelinkConfig, find_config, load_config};

#[test]
fn minimal_config_gets_defaults() {
  let config: RoutelinkConfig = toml::from_str(
    r#"
[project]
name = "my-monorepo"
"#,
  )
  .unwrap();

  assert_eq!(config.project.name, "my-monorepo");
  assert_eq!(config.scan.roots, vec!["packages", "features"]);
  assert!(config.scan.exclude.iter().any(|d| d == "node_modules"));
  assert_eq!(config.targets.expo.app_dir, "apps/expo/app/(generated)");
  assert_eq!(config.targets.next.app_dir, "apps/next/app/(generated)");
  assert_eq!(config.manifest.out, "packages/@registries/routeManifest.generated.ts");
}

#[test]
fn sections_override_defaults() {
  let config: RoutelinkConfig = toml::from_str(
    r#"
[project]
name = "my-monorepo"

[scan]
roots = ["modules"]
exclude = ["node_modules"]

[targets.expo]
app_dir = "apps/native/app/(linked)"

[targets.next]
app_dir = "apps/web/app/(linked)"

[manifest]
out = "packages/registry/routes.generated.ts"
"#,
  )
  .unwrap();

  assert_eq!(config.scan.roots, vec!["modules"]);
  assert_eq!(config.scan.exclude, vec!["node_modules"]);
  assert_eq!(config.targets.expo.app_dir, "apps/native/app/(linked)");
  assert_eq!(config.targets.next.app_dir, "apps/web/app/(linked)");
  assert_eq!(config.manifest.out, "packages/registry/routes.generated.ts");
}

#[test]
fn empty_roots_rejected() {
  let config: RoutelinkConfig = toml::from_str(
    r#"
[project]
name = "my-monorepo"

[scan]
roots = []
"#,
  )
  .unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("scan.roots"));
}

#[test]
fn missing_project_name_rejected() {
  let parsed = toml::from_str::<RoutelinkConfig>("[scan]\nroots = [\"packages\"]\n");
  assert!(parsed.is_err());
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("features/@app-core/routes");
  std::fs::create_dir_all(&nested).unwrap();
  std::fs::write(tmp.path().join("routelink.toml"), "[project]\nname = \"x\"\n").unwrap();

  let found = find_config(&nested).unwrap();
  assert!(found.ends_with("routelink.toml"));
  let config = load_config(&found).unwrap();
  assert_eq!(config.project.name, "x");
}

#[test]
fn find_config_missing_errors() {
  let tmp = tempfile::tempdir().unwrap();
  let err = find_config(tmp.path()).unwrap_err();
  assert!(err.to_string().contains("routelink.toml not found"));
}
