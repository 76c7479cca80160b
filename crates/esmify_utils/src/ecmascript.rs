use std::{borrow::Cow, sync::LazyLock};

use oxc::syntax::identifier::{is_identifier_name, is_identifier_part, is_identifier_start};
use regex::Regex;

use crate::concat_string;

pub fn is_validate_identifier_name(name: &str) -> bool {
  is_identifier_name(name)
}

/// Renders `text` as a single-quoted JS string literal, falling back to JSON escaping when the
/// text contains characters a plain single-quoted literal can't hold.
pub fn to_string_literal(text: &str) -> String {
  if text.chars().any(|c| matches!(c, '\'' | '\\' | '\n' | '\r' | '\u{2028}' | '\u{2029}')) {
    serde_json::to_string(text).expect("serializing a str never fails")
  } else {
    concat_string!("'", text, "'")
  }
}

/// `obj['prop']`, always in computed form so reserved words and odd names read back unchanged.
pub fn computed_property_access_str(obj: &str, prop: &str) -> String {
  concat_string!(obj, "[", to_string_literal(prop), "]")
}

pub fn to_module_import_export_name(name: &str) -> String {
  if is_validate_identifier_name(name) {
    name.into()
  } else {
    serde_json::to_string(name).expect("serializing a str never fails")
  }
}

/// Turns arbitrary text into a legal identifier by replacing every illegal character with `_`.
pub fn legitimize_identifier_name(name: &str) -> Cow<str> {
  if is_validate_identifier_name(name) {
    return Cow::Borrowed(name);
  }

  let mut legitimized = String::with_capacity(name.len() + 1);
  let mut chars = name.chars();
  match chars.next() {
    Some(first) if is_identifier_start(first) => legitimized.push(first),
    Some(first) => {
      legitimized.push('_');
      if is_identifier_part(first) {
        legitimized.push(first);
      }
    }
    None => legitimized.push('_'),
  }
  for c in chars {
    legitimized.push(if is_identifier_part(c) { c } else { '_' });
  }
  Cow::Owned(legitimized)
}

static LEADING_NON_IDENTIFIER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^([^a-zA-Z$_])").expect("valid regex"));
static NON_ALPHA_NUMERIC_RUN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9$]+").expect("valid regex"));

/// Webpack's `Template.toIdentifier`: `_` before a leading character that can't start an
/// identifier, then every run of characters other than ASCII alphanumerics and `$` collapsed
/// into one `_`. Identifiers the bundler derives from module ids are built this way.
pub fn to_webpack_identifier(name: &str) -> String {
  let prefixed = LEADING_NON_IDENTIFIER_RE.replace(name, "_${1}");
  NON_ALPHA_NUMERIC_RUN_RE.replace_all(&prefixed, "_").into_owned()
}

#[test]
fn test_is_validate_identifier_name() {
  assert!(is_validate_identifier_name("foo"));
  assert!(is_validate_identifier_name("_LIB$Math"));
  assert!(!is_validate_identifier_name("1aaaa"));
  assert!(!is_validate_identifier_name("a-b"));
}

#[test]
fn test_computed_property_access_str() {
  assert_eq!(computed_property_access_str("LIB", "default"), "LIB['default']");
  assert_eq!(computed_property_access_str("LIB", "Math"), "LIB['Math']");
  assert_eq!(computed_property_access_str("LIB", "it's"), r#"LIB["it's"]"#);
}

#[test]
fn test_to_string_literal() {
  assert_eq!(to_string_literal("./foo-external.js"), "'./foo-external.js'");
  assert_eq!(to_string_literal(r"C:\deps\foo.js"), r#""C:\\deps\\foo.js""#);
}

#[test]
fn test_to_module_import_export_name() {
  assert_eq!(to_module_import_export_name("class"), "class");
  assert_eq!(to_module_import_export_name("a-b"), r#""a-b""#);
}

#[test]
fn test_legitimize_identifier_name() {
  assert_eq!(legitimize_identifier_name("foo"), "foo");
  assert_eq!(legitimize_identifier_name("a-b"), "a_b");
  assert_eq!(legitimize_identifier_name("1st"), "_1st");
  assert_eq!(legitimize_identifier_name("./foo.js"), "__foo_js");
  assert_eq!(legitimize_identifier_name(""), "_");
}

#[test]
fn test_to_webpack_identifier() {
  assert_eq!(to_webpack_identifier("foo"), "foo");
  assert_eq!(to_webpack_identifier("./foo-external.js"), "_foo_external_js");
  assert_eq!(to_webpack_identifier("42"), "_42");
  assert_eq!(to_webpack_identifier("@scope/pkg"), "_scope_pkg");
  assert_eq!(to_webpack_identifier("foo_bar"), "foo_bar");
  assert_eq!(to_webpack_identifier("café"), "caf_");
  assert_eq!(to_webpack_identifier(""), "");
}
