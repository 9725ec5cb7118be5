/* src/cli/codegen/src/lib.rs */

mod manifest;
mod route;
mod shim;

pub use manifest::{RouteManifest, normalize_route_path};
pub use route::{ClassifiedRoute, ParsedRoute, RouteKind, classify_filename, classify_route};
pub use shim::{CLIENT_DIRECTIVE, GENERATED_HEADER, render_shim};
