use arcstr::ArcStr;
use esmify_common::{Chunk, ExternalRef, NormalizedEsmifyOptions};
use esmify_utils::{
  concat_string,
  ecmascript::{is_validate_identifier_name, to_string_literal},
  indexmap::FxIndexMap,
};

use super::namespace_marker::{render_namespace_helper, NAMESPACE_HELPER_NAME, RAW_NAMESPACE_PREFIX};

/// Text generated for a chunk's externals.
#[derive(Debug, Default)]
pub struct ExternalImports {
  /// `import` statements and accessor bindings placed before the original content.
  pub preamble: String,
  /// The namespace helper, placed after everything else. Function declarations are hoisted, so
  /// the preamble can call it.
  pub helper: String,
}

/// The externals of `chunk` together with the accessor the bundled code has to read each one
/// from. Empty unless `module_externals` is enabled; the bundler then keeps its own global
/// references.
pub fn collect_external_refs(
  chunk: &Chunk,
  options: &NormalizedEsmifyOptions,
) -> anyhow::Result<Vec<ExternalRef>> {
  if !options.module_externals {
    return Ok(vec![]);
  }

  let mut externals = FxIndexMap::<ArcStr, ExternalRef>::default();
  for module in chunk.external_modules() {
    let Some(request) = module.import_request() else {
      anyhow::bail!(
        r#"External module of chunk "{}" has neither an id nor a request"#,
        chunk.display_name()
      );
    };
    let accessor = options.external_accessor.accessor_for(module);
    if !is_validate_identifier_name(&accessor) {
      anyhow::bail!(r#"Accessor "{accessor}" of external "{request}" is not a valid identifier"#);
    }
    externals.entry(accessor.clone()).or_insert_with(|| ExternalRef::new(request, accessor));
  }

  Ok(externals.into_values().collect())
}

pub fn render_external_imports(
  externals: &[ExternalRef],
  options: &NormalizedEsmifyOptions,
) -> ExternalImports {
  if !options.module_externals || externals.is_empty() {
    return ExternalImports::default();
  }

  let mut preamble = String::new();
  for ExternalRef { request, runtime_accessor } in externals {
    let request = to_string_literal(request);
    if options.es_module_externals {
      preamble.push_str(&concat_string!(
        "import * as ",
        runtime_accessor,
        " from ",
        request,
        ";\n"
      ));
    } else {
      let raw_namespace = concat_string!(RAW_NAMESPACE_PREFIX, runtime_accessor);
      preamble.push_str(&concat_string!("import * as ", raw_namespace, " from ", request, ";\n"));
      preamble.push_str(&concat_string!(
        "var ",
        runtime_accessor,
        " = ",
        NAMESPACE_HELPER_NAME,
        "(",
        raw_namespace,
        ");\n"
      ));
    }
  }

  let helper = if options.es_module_externals {
    String::new()
  } else {
    concat_string!("\n", render_namespace_helper())
  };

  ExternalImports { preamble, helper }
}
