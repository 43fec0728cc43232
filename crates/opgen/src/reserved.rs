use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen", "self", "Self", "_",
  ]
  .into_iter()
  .collect()
});

// Locals and items every generated handler declares, plus prelude variants its patterns use.
static GENERATED_BINDINGS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "msg",
    "execute_query",
    "operation_params",
    "operation_query",
    "result",
    "check_api_response",
    "Some",
    "None",
    "Ok",
    "Err",
  ]
  .into_iter()
  .collect()
});

static IDENTIFIER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("bad regex"));
static NUMBERED_BINDING_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(query|response)[0-9]+$").expect("bad regex"));

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores and trims leading or trailing underscores.
fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("bad regex"));
  static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("bad regex"));

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Name of the generated handler function for an operation.
///
/// `getLocalUser` becomes `handle_get_local_user_operation`. Distinct operation names
/// may map to the same handler; the loader rejects such sets.
pub(crate) fn to_handler_name(operation: &str) -> String {
  let ident = sanitize(operation).to_snake_case();
  if ident.is_empty() {
    "handle_unnamed_operation".to_string()
  } else {
    format!("handle_{ident}_operation")
  }
}

/// Why `name` cannot be used as a binding in a generated handler, if it cannot.
pub(crate) fn binding_name_conflict(name: &str) -> Option<&'static str> {
  if !IDENTIFIER_RE.is_match(name) {
    Some("is not a valid identifier")
  } else if FORBIDDEN_IDENTIFIERS.contains(name) {
    Some("is a reserved Rust keyword")
  } else if GENERATED_BINDINGS.contains(name) || NUMBERED_BINDING_RE.is_match(name) {
    Some("collides with a name used by the generated handler")
  } else {
    None
  }
}
