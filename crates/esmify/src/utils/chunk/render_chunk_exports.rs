use esmify_common::PLUGIN_NAME;
use esmify_utils::{concat_string, ecmascript::to_module_import_export_name};
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::utils::renamer::Renamer;

use super::collect_export_bindings::CollectedExports;

/// Renders the ESM export block appended to a chunk's file.
///
/// Named values are never exported as member expressions. Each one is first bound to a
/// generated top-level `const`, and every binding is listed in a single trailing
/// `export { ... }`, so export names that clash with globals or keywords (`Math`, `class`)
/// still work.
pub fn render_chunk_exports(
  collected: &CollectedExports,
  carrier: &str,
  chunk_name: &str,
  warnings: &mut Vec<anyhow::Error>,
) -> String {
  let mut s = concat_string!("\n\n", render_carrier_guard(carrier), "\n");

  if collected.bindings.is_empty() && !collected.has_export_info {
    s.push_str(&render_whole_carrier_exports(carrier));
    return s;
  }

  let (defaults, named): (Vec<_>, Vec<_>) =
    collected.bindings.iter().partition(|binding| binding.is_default);

  if defaults.len() > 1 {
    warnings.push(anyhow::anyhow!(
      r#"Chunk "{chunk_name}" re-exports {} default values ({}). An ES module may only contain one `export default`."#,
      defaults.len(),
      defaults.iter().map(|binding| &binding.source_expression).join(", ")
    ));
  }

  let mut exported_names = FxHashSet::default();
  let mut rendered_items = vec![];

  for binding in defaults {
    s.push_str(&concat_string!("export default ", binding.source_expression, ";\n"));
    if binding.is_whole_carrier(carrier) && exported_names.insert(carrier) {
      rendered_items.push(carrier.to_string());
    }
  }

  let mut renamer = Renamer::new([carrier]);
  for binding in named {
    // The same name from two aggregate members reads the same carrier property.
    if !exported_names.insert(binding.public_name.as_str()) {
      continue;
    }
    let local_name =
      renamer.create_conflictless_name(&concat_string!("_", carrier, "$", binding.public_name));
    s.push_str(&concat_string!("const ", local_name, " = ", binding.source_expression, ";\n"));
    rendered_items.push(concat_string!(
      local_name,
      " as ",
      to_module_import_export_name(&binding.public_name)
    ));
  }

  if !rendered_items.is_empty() {
    s.push_str(&concat_string!("export { ", rendered_items.join(", "), " };\n"));
  }

  s
}

/// Both export forms read the carrier, so a carrier that never got assigned is reported when
/// the bundle loads instead of surfacing later as a puzzling `undefined` import.
fn render_carrier_guard(carrier: &str) -> String {
  concat_string!(
    carrier,
    " === undefined && console.error(\"[",
    PLUGIN_NAME,
    "] nothing exported!\");"
  )
}

fn render_whole_carrier_exports(carrier: &str) -> String {
  concat_string!("export default ", carrier, ";\nexport { ", carrier, " };\n")
}

#[cfg(test)]
mod tests {
  use esmify_common::ExportBinding;

  use super::*;

  const GUARD: &str = "\n\nLIB === undefined && console.error(\"[esmify] nothing exported!\");\n";

  fn render(bindings: Vec<ExportBinding>) -> (String, Vec<anyhow::Error>) {
    let mut warnings = vec![];
    let collected = CollectedExports { bindings, has_export_info: true };
    (render_chunk_exports(&collected, "LIB", "main", &mut warnings), warnings)
  }

  fn named(name: &str) -> ExportBinding {
    ExportBinding::named("LIB", &name.into())
  }

  #[test]
  fn default_and_named_exports() {
    let (code, warnings) =
      render(vec![ExportBinding::default_export("LIB"), named("x"), named("y")]);

    assert!(warnings.is_empty());
    assert_eq!(
      code,
      concat_string!(
        GUARD,
        "export default LIB['default'];\n",
        "const _LIB$x = LIB['x'];\n",
        "const _LIB$y = LIB['y'];\n",
        "export { _LIB$x as x, _LIB$y as y };\n"
      )
    );
    assert_eq!(code.matches("export default").count(), 1);
    assert_eq!(code.matches("export {").count(), 1);
  }

  #[test]
  fn whole_carrier_exports() {
    let (code, _) = render(vec![ExportBinding::whole_carrier("LIB")]);
    assert_eq!(code, concat_string!(GUARD, "export default LIB;\nexport { LIB };\n"));
  }

  #[test]
  fn nothing_known_falls_back_to_the_carrier() {
    let mut warnings = vec![];
    let code = render_chunk_exports(&CollectedExports::default(), "LIB", "main", &mut warnings);
    assert_eq!(code, concat_string!(GUARD, "export default LIB;\nexport { LIB };\n"));
  }

  #[test]
  fn empty_manifest_renders_only_the_guard() {
    let (code, _) = render(vec![]);
    assert_eq!(code, GUARD);
  }

  #[test]
  fn names_clashing_with_globals_are_bound_first() {
    let (code, _) = render(vec![named("Math"), named("class")]);
    assert!(code.contains("const _LIB$Math = LIB['Math'];\n"));
    assert!(code.contains("const _LIB$class = LIB['class'];\n"));
    assert!(code.ends_with("export { _LIB$Math as Math, _LIB$class as class };\n"));
  }

  #[test]
  fn non_identifier_names_are_quoted() {
    let (code, _) = render(vec![named("a-b"), named("a_b")]);
    assert!(code.contains("const _LIB$a_b = LIB['a-b'];\n"));
    assert!(code.contains("const _LIB$a_b$1 = LIB['a_b'];\n"));
    assert!(code.ends_with("export { _LIB$a_b as \"a-b\", _LIB$a_b$1 as a_b };\n"));
  }

  #[test]
  fn duplicate_public_names_are_exported_once() {
    let (code, _) = render(vec![named("a"), named("b"), named("a")]);
    assert_eq!(code.matches("const _LIB$a ").count(), 1);
    assert!(code.ends_with("export { _LIB$a as a, _LIB$b as b };\n"));
  }

  #[test]
  fn multiple_defaults_are_all_emitted_and_reported() {
    let (code, warnings) =
      render(vec![ExportBinding::whole_carrier("LIB"), ExportBinding::default_export("LIB")]);

    assert!(code.contains("export default LIB;\nexport default LIB['default'];\n"));
    assert!(code.ends_with("export { LIB };\n"));
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().contains(r#"Chunk "main" re-exports 2 default values"#));
  }
}
