/* src/cli/core/src/link/infer.rs */

// Export inference: decides which named bindings a generated shim must
// re-export by inspecting the route source text. The candidate name sets are
// fixed; membership is decided by identifier-boundary token checks over the
// source with comments and string/template literals stripped, so a method
// name mentioned in a comment no longer triggers a re-export.
//
// Screen-component extraction intentionally runs over the raw text, since two
// of the three authoring conventions live inside string literals.

use routelink_codegen::RouteKind;

/// Next.js route segment config exports.
const SEGMENT_CONFIG_EXPORTS: &[&str] = &[
  "dynamic",
  "dynamicParams",
  "revalidate",
  "fetchCache",
  "runtime",
  "preferredRegion",
  "generateStaticParams",
];

/// HTTP method handlers an API route may export.
const HTTP_METHOD_EXPORTS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// Metadata exports of opengraph/twitter image routes.
const IMAGE_META_EXPORTS: &[&str] = &["alt", "contentType", "size"];

#[derive(Debug, Clone)]
pub struct InferredExports {
  pub next: Vec<String>,
  pub expo: Vec<String>,
}

/// Whether this route kind needs its source text read at all. Layouts,
/// templates and the other single-export kinds always re-export `default`.
pub fn requires_inspection(kind: RouteKind) -> bool {
  matches!(
    kind,
    RouteKind::Index
      | RouteKind::Param
      | RouteKind::Api
      | RouteKind::OpengraphImage
      | RouteKind::TwitterImage
  )
}

/// Replace comments and string/template literal contents with spaces,
/// preserving newlines so line-based constructs keep their shape.
pub fn strip_literals(source: &str) -> String {
  #[derive(PartialEq)]
  enum State {
    Code,
    LineComment,
    BlockComment,
    Str(char),
  }

  let mut out = String::with_capacity(source.len());
  let mut state = State::Code;
  let mut chars = source.chars().peekable();

  while let Some(c) = chars.next() {
    match state {
      State::Code => match c {
        '/' if chars.peek() == Some(&'/') => {
          chars.next();
          out.push_str("  ");
          state = State::LineComment;
        }
        '/' if chars.peek() == Some(&'*') => {
          chars.next();
          out.push_str("  ");
          state = State::BlockComment;
        }
        '\'' | '"' | '`' => {
          out.push(' ');
          state = State::Str(c);
        }
        _ => out.push(c),
      },
      State::LineComment => {
        if c == '\n' {
          out.push('\n');
          state = State::Code;
        } else {
          out.push(' ');
        }
      }
      State::BlockComment => {
        if c == '*' && chars.peek() == Some(&'/') {
          chars.next();
          out.push_str("  ");
          state = State::Code;
        } else {
          out.push(if c == '\n' { '\n' } else { ' ' });
        }
      }
      State::Str(quote) => {
        if c == '\\' {
          chars.next();
          out.push_str("  ");
        } else if c == quote {
          out.push(' ');
          state = State::Code;
        } else {
          out.push(if c == '\n' { '\n' } else { ' ' });
        }
      }
    }
  }
  out
}

fn is_ident_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Identifier-boundary token check: `dynamicParams` does not count as an
/// occurrence of `dynamic`.
pub fn has_token(stripped: &str, name: &str) -> bool {
  for (pos, matched) in stripped.match_indices(name) {
    let before_ok = stripped[..pos].chars().next_back().is_none_or(|c| !is_ident_char(c));
    let after_ok = stripped[pos + matched.len()..].chars().next().is_none_or(|c| !is_ident_char(c));
    if before_ok && after_ok {
      return true;
    }
  }
  false
}

/// Infer the export sets for a route from its source text. Only called for
/// kinds where `requires_inspection` is true; every other kind re-exports
/// exactly `default` on both targets.
pub fn infer_exports(kind: RouteKind, source: &str) -> InferredExports {
  let stripped = strip_literals(source);
  let mut next = Vec::new();

  match kind {
    RouteKind::Index | RouteKind::Param => {
      next.push("default".to_string());
      push_present(&mut next, &stripped, SEGMENT_CONFIG_EXPORTS);
      push_present(&mut next, &stripped, HTTP_METHOD_EXPORTS);
      // The native router only ever loads the screen itself.
      InferredExports { next, expo: vec!["default".to_string()] }
    }
    RouteKind::Api => {
      // API handlers commonly have no default export; include it only when
      // the token actually appears.
      if has_token(&stripped, "default") {
        next.push("default".to_string());
      }
      push_present(&mut next, &stripped, SEGMENT_CONFIG_EXPORTS);
      push_present(&mut next, &stripped, HTTP_METHOD_EXPORTS);
      InferredExports { next, expo: Vec::new() }
    }
    RouteKind::OpengraphImage | RouteKind::TwitterImage => {
      next.push("default".to_string());
      push_present(&mut next, &stripped, IMAGE_META_EXPORTS);
      InferredExports { next, expo: Vec::new() }
    }
    _ => InferredExports {
      next: vec!["default".to_string()],
      expo: vec!["default".to_string()],
    },
  }
}

fn push_present(out: &mut Vec<String>, stripped: &str, candidates: &[&str]) {
  for name in candidates {
    if has_token(stripped, name) {
      out.push((*name).to_string());
    }
  }
}

/// Extract the screen component a route renders, checking the three authoring
/// conventions in priority order: a `/screens/` import path, an inline
/// `screen={...}` prop, a `ScreenComponent = ...` assignment. Dotted names are
/// reduced to their final segment. Absence is not an error.
pub fn extract_screen_component(source: &str) -> Option<String> {
  let raw = if let Some(rest) = source.split_once("/screens/").map(|(_, rest)| rest) {
    rest.split(['\'', '"', '`']).next().unwrap_or(rest)
  } else if let Some(rest) = source.split_once("screen={").map(|(_, rest)| rest) {
    rest.split('}').next().unwrap_or(rest)
  } else if let Some(rest) = source.split_once("ScreenComponent").map(|(_, rest)| rest) {
    let after_eq = rest.split_once('=').map(|(_, v)| v)?;
    after_eq.split('\n').next().unwrap_or(after_eq)
  } else {
    return None;
  };

  let mut name = raw.trim();
  if let Some((_, last)) = name.rsplit_once('.') {
    name = last;
  }
  if name.is_empty() { None } else { Some(name.to_string()) }
}
