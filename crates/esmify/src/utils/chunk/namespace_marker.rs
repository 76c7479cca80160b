pub const NAMESPACE_HELPER_NAME: &str = "__esmify_namespace";

/// Prefix of the binding a raw external namespace is imported into before it gets wrapped.
pub const RAW_NAMESPACE_PREFIX: &str = "__esmify_ns_";

/// Renders the helper that turns an imported namespace into a read-only object tagged with
/// `__esModule`, the marker bundler interop code checks before treating a value as an ES module.
///
/// - Own property names become enumerable getters, own symbols non-enumerable ones.
/// - The result has no prototype and is non-extensible, sealed and frozen where supported.
/// - Getters keep the bindings live; there are no setters, so writes are rejected.
pub fn render_namespace_helper() -> &'static str {
  "function __esmify_namespace(ns) {
  var clone = Object.create(null);
  Object.defineProperty(clone, '__esModule', { value: true, enumerable: false, writable: false });
  Object.getOwnPropertyNames(ns).forEach(function (key) {
    if (key === '__esModule') return;
    Object.defineProperty(clone, key, { enumerable: true, get: function () { return ns[key]; } });
  });
  if (typeof Object.getOwnPropertySymbols === 'function') {
    Object.getOwnPropertySymbols(ns).forEach(function (key) {
      Object.defineProperty(clone, key, { enumerable: false, get: function () { return ns[key]; } });
    });
  }
  Object.preventExtensions(clone);
  Object.seal(clone);
  if (typeof Object.freeze === 'function') Object.freeze(clone);
  return clone;
}
"
}

#[test]
fn test_helper_name_matches_declaration() {
  let helper = render_namespace_helper();
  assert!(helper.starts_with(&format!("function {NAMESPACE_HELPER_NAME}(ns) {{")));
  assert!(helper.ends_with("}\n"));
}

#[test]
fn test_namespace_clone_is_read_only() {
  let helper = render_namespace_helper();
  let descriptors = helper
    .lines()
    .map(str::trim)
    .filter(|line| line.starts_with("Object.defineProperty(clone,"))
    .collect::<Vec<_>>();

  assert_eq!(descriptors.len(), 3);
  assert!(descriptors[0]
    .contains("'__esModule', { value: true, enumerable: false, writable: false }"));
  assert!(descriptors[1].contains("key, { enumerable: true, get: function () {"));
  assert!(descriptors[2].contains("key, { enumerable: false, get: function () {"));
  for descriptor in &descriptors {
    assert!(!descriptor.contains("set:"), "{descriptor}");
    assert!(!descriptor.contains("configurable: true"), "{descriptor}");
  }

  // Same own keys as the source namespace, minus a second marker.
  assert!(helper.contains("Object.create(null)"));
  assert!(helper.contains("Object.getOwnPropertyNames(ns).forEach"));
  assert!(helper.contains("if (key === '__esModule') return;"));
  assert!(helper.contains("Object.getOwnPropertySymbols(ns).forEach"));
  for lock in ["Object.preventExtensions(clone);", "Object.seal(clone);", "Object.freeze(clone);"] {
    assert!(helper.contains(lock), "{lock}");
  }

  let allocator = oxc::allocator::Allocator::default();
  let ret = oxc::parser::Parser::new(&allocator, helper, oxc::span::SourceType::mjs()).parse();
  assert!(ret.errors.is_empty(), "{:?}", ret.errors);
}
