pub mod aggregate_module;
pub mod external_module;
pub mod leaf_module;

use serde::Deserialize;

use crate::{AggregateModule, LeafModule};

/// A node of the entry module graph.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModuleNode {
  Leaf(LeafModule),
  Aggregate(AggregateModule),
}

impl ModuleNode {
  /// Whether any leaf reachable from this node knows something about its exports.
  pub fn has_export_info(&self) -> bool {
    match self {
      Self::Leaf(leaf) => leaf.provided_exports.has_export_info(),
      Self::Aggregate(aggregate) => aggregate.members.iter().any(Self::has_export_info),
    }
  }
}

impl From<LeafModule> for ModuleNode {
  fn from(value: LeafModule) -> Self {
    Self::Leaf(value)
  }
}

impl From<AggregateModule> for ModuleNode {
  fn from(value: AggregateModule) -> Self {
    Self::Aggregate(value)
  }
}

#[test]
fn test_has_export_info() {
  use crate::ProvidedExports;

  let unknown = ModuleNode::from(LeafModule::new("./runtime.js", ProvidedExports::Unknown));
  assert!(!unknown.has_export_info());

  let nested = ModuleNode::from(AggregateModule::new(vec![
    unknown.clone(),
    AggregateModule::new(vec![LeafModule::new("./index.js", ProvidedExports::Dynamic).into()])
      .into(),
  ]));
  assert!(nested.has_export_info());
}
