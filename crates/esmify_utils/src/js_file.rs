use std::sync::LazyLock;

use regex::Regex;

// `?query` and `#hash` suffixes show up in emitted file names (`main.js?v=3`).
static JS_FILE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\.m?js(?:[?#].*)?$").expect("valid regex"));

/// Whether an output file name refers to JavaScript that may carry ESM syntax. `.cjs` files are
/// CommonJS by definition and don't qualify.
pub fn is_javascript_file(file_name: &str) -> bool {
  JS_FILE_RE.is_match(file_name)
}

#[test]
fn test_is_javascript_file() {
  assert!(is_javascript_file("main.js"));
  assert!(is_javascript_file("dist/lib.mjs"));
  assert!(is_javascript_file("main.js?v=3"));
  assert!(is_javascript_file("MAIN.JS"));
  assert!(!is_javascript_file("main.cjs"));
  assert!(!is_javascript_file("main.js.map"));
  assert!(!is_javascript_file("style.css"));
  assert!(!is_javascript_file("js"));
}
