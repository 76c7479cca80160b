use serde::Deserialize;

use crate::ModuleNode;

/// An entry point made of several modules concatenated in order, e.g. an array entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateModule {
  #[serde(default)]
  pub members: Vec<ModuleNode>,
}

impl AggregateModule {
  pub fn new(members: Vec<ModuleNode>) -> Self {
    Self { members }
  }
}
