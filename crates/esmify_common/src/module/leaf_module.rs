use arcstr::ArcStr;
use serde::Deserialize;

use crate::{ModuleId, ProvidedExports};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafModule {
  pub id: Option<ModuleId>,
  #[serde(default)]
  pub provided_exports: ProvidedExports,
  #[serde(default)]
  pub is_external: bool,
  /// Only meaningful for externals: the specifier the module is imported with.
  pub request: Option<ArcStr>,
}

impl LeafModule {
  pub fn new(id: impl Into<ModuleId>, provided_exports: ProvidedExports) -> Self {
    Self { id: Some(id.into()), provided_exports, ..Self::default() }
  }

  /// An external module reached at runtime through `request`. Its exports are opaque to the
  /// bundler.
  pub fn external(id: impl Into<ModuleId>, request: impl Into<ArcStr>) -> Self {
    Self {
      id: Some(id.into()),
      provided_exports: ProvidedExports::Dynamic,
      is_external: true,
      request: Some(request.into()),
    }
  }

  /// The specifier to import this module with, falling back to its id.
  pub fn import_request(&self) -> Option<&str> {
    self.request.as_deref().or(self.id.as_deref())
  }
}
