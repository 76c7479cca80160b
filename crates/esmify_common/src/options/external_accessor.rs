use arcstr::ArcStr;
use esmify_utils::{concat_string, ecmascript::to_webpack_identifier};

use crate::LeafModule;

/// Maps an external module to the identifier the bundled code reads it from. Must agree with
/// what the bundler itself emits, and must be unique per external within a chunk.
pub trait ExternalAccessor: Send + Sync {
  fn accessor_for(&self, module: &LeafModule) -> ArcStr;
}

impl<F> ExternalAccessor for F
where
  F: Fn(&LeafModule) -> ArcStr + Send + Sync,
{
  fn accessor_for(&self, module: &LeafModule) -> ArcStr {
    self(module)
  }
}

/// `__WEBPACK_EXTERNAL_MODULE_<id>__`, with the id converted exactly the way webpack names the
/// variable it declares for an external.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebpackExternalAccessor;

impl ExternalAccessor for WebpackExternalAccessor {
  fn accessor_for(&self, module: &LeafModule) -> ArcStr {
    let id = module.id.as_deref().or(module.request.as_deref()).unwrap_or_default();
    concat_string!("__WEBPACK_EXTERNAL_MODULE_", to_webpack_identifier(id), "__").into()
  }
}

#[test]
fn test_webpack_external_accessor() {
  let accessor = |id: &str| WebpackExternalAccessor.accessor_for(&LeafModule::external(id, id));
  assert_eq!(accessor("foo"), "__WEBPACK_EXTERNAL_MODULE_foo__");
  assert_eq!(accessor("./foo-external.js"), "__WEBPACK_EXTERNAL_MODULE__foo_external_js__");
  assert_eq!(accessor("@scope/pkg"), "__WEBPACK_EXTERNAL_MODULE__scope_pkg__");
  assert_eq!(accessor("42"), "__WEBPACK_EXTERNAL_MODULE__42__");
}
