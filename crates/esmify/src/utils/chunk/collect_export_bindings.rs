use esmify_common::{ExportBinding, ModuleId, ModuleNode, ProvidedExports, SkipModule};
use rustc_hash::FxHashSet;

#[derive(Debug, Default)]
pub struct CollectedExports {
  /// In traversal order. Duplicate public names are kept; the renderer resolves them.
  pub bindings: Vec<ExportBinding>,
  /// Whether any leaf that wasn't skipped had export information.
  pub has_export_info: bool,
}

/// Flattens `node` into the bindings to re-export from `carrier`.
///
/// Aggregates contribute their members in declared order, recursively. A leaf contributes one
/// binding per name of a static manifest, or the whole carrier as `default` when its exports
/// are dynamic. No sorting is done: the order the bundler assigned is kept.
///
/// A module listed more than once (the same id under several aggregate members) is only
/// visited the first time. Leaves without an id can't be told apart and are always visited.
pub fn collect_export_bindings(
  node: &ModuleNode,
  skip_module: &dyn SkipModule,
  carrier: &str,
) -> anyhow::Result<CollectedExports> {
  let mut collected = CollectedExports::default();
  let mut visited = FxHashSet::default();
  collect_into(node, skip_module, carrier, &mut visited, &mut collected)?;
  Ok(collected)
}

fn collect_into<'a>(
  node: &'a ModuleNode,
  skip_module: &dyn SkipModule,
  carrier: &str,
  visited: &mut FxHashSet<&'a ModuleId>,
  collected: &mut CollectedExports,
) -> anyhow::Result<()> {
  let leaf = match node {
    ModuleNode::Aggregate(aggregate) => {
      return aggregate
        .members
        .iter()
        .try_for_each(|member| collect_into(member, skip_module, carrier, visited, collected));
    }
    ModuleNode::Leaf(leaf) => leaf,
  };

  if leaf.id.as_ref().is_some_and(|id| !visited.insert(id)) {
    return Ok(());
  }

  if skip_module.skip(leaf.id.as_deref(), leaf) {
    return Ok(());
  }

  match &leaf.provided_exports {
    ProvidedExports::Unknown => {}
    ProvidedExports::Dynamic => {
      collected.has_export_info = true;
      collected.bindings.push(ExportBinding::whole_carrier(carrier));
    }
    ProvidedExports::Static(names) => {
      collected.has_export_info = true;
      for name in names {
        let binding = match name.as_str() {
          "" => anyhow::bail!(
            r#"Module "{}" declares an empty export name"#,
            leaf.id.as_deref().unwrap_or("<anonymous>")
          ),
          "default" => ExportBinding::default_export(carrier),
          _ => ExportBinding::named(carrier, name),
        };
        collected.bindings.push(binding);
      }
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use esmify_common::{AggregateModule, LeafModule, NeverSkip};

  use super::*;

  fn leaf(id: &str, names: &[&str]) -> ModuleNode {
    LeafModule::new(id, ProvidedExports::from_names(names.iter().copied())).into()
  }

  fn public_names(collected: &CollectedExports) -> Vec<&str> {
    collected.bindings.iter().map(|binding| binding.public_name.as_str()).collect()
  }

  #[test]
  fn static_manifest_keeps_manifest_order() {
    let collected =
      collect_export_bindings(&leaf("./index.js", &["default", "x", "y"]), &NeverSkip, "LIB")
        .unwrap();

    assert!(collected.has_export_info);
    assert_eq!(public_names(&collected), ["default", "x", "y"]);
    assert_eq!(
      collected.bindings[0],
      ExportBinding {
        source_expression: "LIB['default']".to_string(),
        public_name: "default".into(),
        is_default: true,
      }
    );
    assert_eq!(collected.bindings[2].source_expression, "LIB['y']");
    assert!(!collected.bindings[2].is_default);
  }

  #[test]
  fn dynamic_exports_become_the_whole_carrier() {
    let node = ModuleNode::from(LeafModule::new("./cjs.js", ProvidedExports::Dynamic));
    let collected = collect_export_bindings(&node, &NeverSkip, "LIB").unwrap();

    assert_eq!(collected.bindings, [ExportBinding::whole_carrier("LIB")]);
    assert!(collected.bindings[0].is_whole_carrier("LIB"));
  }

  #[test]
  fn aggregates_flatten_in_member_order() {
    let node = ModuleNode::from(AggregateModule::new(vec![
      leaf("./a.js", &["a"]),
      AggregateModule::new(vec![leaf("./b.js", &["b", "a"])]).into(),
      LeafModule::new("./runtime.js", ProvidedExports::Unknown).into(),
    ]));
    let collected = collect_export_bindings(&node, &NeverSkip, "LIB").unwrap();

    assert_eq!(public_names(&collected), ["a", "b", "a"]);
  }

  #[test]
  fn repeated_modules_are_collected_once() {
    let node = ModuleNode::from(AggregateModule::new(vec![
      leaf("./index.js", &["default", "x"]),
      leaf("./other.js", &["y"]),
      AggregateModule::new(vec![leaf("./index.js", &["default", "x"])]).into(),
    ]));
    let collected = collect_export_bindings(&node, &NeverSkip, "LIB").unwrap();

    assert_eq!(public_names(&collected), ["default", "x", "y"]);
    assert_eq!(collected.bindings.iter().filter(|binding| binding.is_default).count(), 1);
  }

  #[test]
  fn leaves_without_id_are_always_visited() {
    let anonymous = || -> ModuleNode {
      LeafModule { provided_exports: ProvidedExports::from_names(["a"]), ..LeafModule::default() }
        .into()
    };
    let node = ModuleNode::from(AggregateModule::new(vec![anonymous(), anonymous()]));
    let collected = collect_export_bindings(&node, &NeverSkip, "LIB").unwrap();

    assert_eq!(public_names(&collected), ["a", "a"]);
  }

  #[test]
  fn skipped_members_contribute_nothing() {
    let node = ModuleNode::from(AggregateModule::new(vec![
      leaf("/src/skip.js", &["includeFn-absent"]),
      leaf("/src/index.js", &["includeFn", "default"]),
    ]));
    let skip = |id: Option<&str>, _: &LeafModule| id.is_some_and(|id| id.ends_with("skip.js"));
    let collected = collect_export_bindings(&node, &skip, "LIB").unwrap();

    assert_eq!(public_names(&collected), ["includeFn", "default"]);
  }

  #[test]
  fn skipping_every_informed_leaf_clears_export_info() {
    let node = leaf("/src/skip.js", &["x"]);
    let skip_all = |_: Option<&str>, _: &LeafModule| true;
    let collected = collect_export_bindings(&node, &skip_all, "LIB").unwrap();

    assert!(collected.bindings.is_empty());
    assert!(!collected.has_export_info);
  }

  #[test]
  fn empty_export_name_fails() {
    let error = collect_export_bindings(&leaf("./broken.js", &["ok", ""]), &NeverSkip, "LIB")
      .unwrap_err();
    assert_eq!(error.to_string(), r#"Module "./broken.js" declares an empty export name"#);
  }
}
