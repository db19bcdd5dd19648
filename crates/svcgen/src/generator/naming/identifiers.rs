use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

// Type names that would shadow prelude items or names the generated files import.
static RESERVED_TYPE_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "Box", "BTreeMap", "Clone", "Copy", "Default", "Deserialize", "Display", "Option", "Result", "Self", "Send",
    "Serialize", "String", "Sync", "Vec",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static ACRONYM_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static CASE_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores,
/// collapses runs of underscores and trims them from both ends.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Splits `PascalCase` and `camelCase` words with underscores, keeping
/// acronyms together (`AutoMLJobName` becomes `Auto_ML_Job_Name`).
fn split_case_boundaries(input: &str) -> String {
  let acronyms = ACRONYM_BOUNDARY_RE.replace_all(input, "${1}_${2}");
  CASE_BOUNDARY_RE.replace_all(&acronyms, "${1}_${2}").into_owned()
}

/// Converts a wire member or operation name into a Rust field or method name.
///
/// Keywords become raw identifiers, except path keywords like `self` which
/// get a trailing underscore. A leading digit gets an underscore prefix and
/// an empty result becomes `_`.
pub(crate) fn to_rust_field_name(name: &str) -> String {
  let mut ident = split_case_boundaries(&sanitize(name)).to_lowercase();
  ident = MULTI_UNDERSCORE_RE.replace_all(&ident, "_").into_owned();

  if ident.is_empty() {
    return "_".to_string();
  }

  // Path keywords cannot be raw identifiers.
  if matches!(ident.as_str(), "self" | "crate" | "super") {
    ident.push('_');
    return ident;
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts a shape name or enum value into a Rust type or variant name.
///
/// Names that are already mixed case without separators (the norm for shape
/// names) keep their capitalization. Everything else is sanitized and
/// converted to `PascalCase`, so `ml.t2.medium` becomes `MlT2Medium` and
/// `IN_PROGRESS` becomes `InProgress`.
pub(crate) fn to_rust_type_name(name: &str) -> String {
  let has_separators = name.contains(|c: char| !c.is_ascii_alphanumeric());
  let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = name.chars().any(|c| c.is_ascii_lowercase());

  let mut ident = if !has_separators && has_upper && has_lower {
    let mut chars = name.chars();
    chars
      .next()
      .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
      .unwrap_or_default()
  } else {
    sanitize(name).to_lowercase().to_pascal_case()
  };

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if RESERVED_TYPE_NAMES.contains(ident.as_str()) {
    ident.push_str("Shape");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

/// Hands out field and parameter names that stay distinct once `bon` derives
/// setter state types from them: `r#type` and `type_` both map to `SetType`.
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
  used: HashSet<String>,
}

impl UniqueNames {
  pub(crate) fn reserving(names: &[&str]) -> Self {
    Self {
      used: names.iter().map(|name| collision_key(name)).collect(),
    }
  }

  /// Returns `name`, or `{name}_2`, `{name}_3`, ... when it is taken.
  pub(crate) fn claim(&mut self, name: String) -> String {
    if self.used.insert(collision_key(&name)) {
      return name;
    }

    let stem = name.trim_start_matches("r#").trim_end_matches('_').to_string();
    (2..)
      .map(|suffix| format!("{stem}_{suffix}"))
      .find(|candidate| self.used.insert(collision_key(candidate)))
      .unwrap_or(name)
  }
}

fn collision_key(name: &str) -> String {
  name.trim_start_matches("r#").replace('_', "").to_lowercase()
}
