/* src/cli/codegen/src/shim.rs */

// Shim content rendering. Every generated file carries the marker header;
// client-rendered Next.js shims additionally get the 'use client' directive,
// which must be the first line of the file.

pub const GENERATED_HEADER: &str = "// Auto-generated by routelink. Do not edit.";

pub const CLIENT_DIRECTIVE: &str = "'use client'";

/// Render a re-export shim: optional client directive, marker header, and a
/// single export statement from the computed import path.
pub fn render_shim(exports: &[String], import_path: &str, client: bool) -> String {
  let mut out = String::new();
  if client {
    out.push_str(CLIENT_DIRECTIVE);
    out.push('\n');
  }
  out.push_str(GENERATED_HEADER);
  out.push('\n');
  let list = exports.join(", ");
  if list.is_empty() {
    out.push_str(&format!("export {{}} from '{import_path}'\n"));
  } else {
    out.push_str(&format!("export {{ {list} }} from '{import_path}'\n"));
  }
  out
}
