use arcstr::ArcStr;
use serde::Deserialize;

use crate::{LeafModule, ModuleNode};

/// One unit of bundler output: an entry module graph and the files it was emitted to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
  #[serde(default)]
  pub name: Option<ArcStr>,
  #[serde(default)]
  pub entry_module: Option<ModuleNode>,
  /// Every module rendered into the chunk, in the bundler's order.
  #[serde(default)]
  pub modules: Vec<LeafModule>,
  #[serde(default)]
  pub files: Vec<ArcStr>,
}

impl Chunk {
  pub fn new(name: Option<ArcStr>, entry_module: Option<ModuleNode>, files: Vec<ArcStr>) -> Self {
    Self { name, entry_module, files, ..Self::default() }
  }

  #[must_use]
  pub fn with_modules(mut self, modules: Vec<LeafModule>) -> Self {
    self.modules = modules;
    self
  }

  pub fn external_modules(&self) -> impl Iterator<Item = &LeafModule> {
    self.modules.iter().filter(|module| module.is_external)
  }

  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or("<unnamed>")
  }
}
