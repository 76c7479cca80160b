pub mod exclude_file;
pub mod external_accessor;
pub mod normalized_esmify_options;
pub mod output_options;
pub mod skip_module;

use std::{fmt::Debug, sync::Arc};

use crate::{ExcludeFile, ExternalAccessor, SkipModule};

/// User facing options. Every field is optional; `normalize_options` fills in the defaults.
#[derive(Default, Clone)]
pub struct EsmifyOptions {
  /// Output files for which no ESM syntax is synthesized. Defaults to every file that isn't
  /// `.js`/`.mjs`.
  pub exclude: Option<Arc<dyn ExcludeFile>>,
  /// Leaves whose exports are left out of the re-exported surface.
  pub skip_module: Option<Arc<dyn SkipModule>>,
  /// Render externals as `import` statements instead of leaving them to the bundler's global
  /// references.
  pub module_externals: Option<bool>,
  /// Externals are genuine ES modules; bind their namespace as is.
  pub es_module_externals: Option<bool>,
  pub external_accessor: Option<Arc<dyn ExternalAccessor>>,
  pub warn_on_multiple_files: Option<bool>,
}

impl Debug for EsmifyOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EsmifyOptions")
      .field("exclude", &self.exclude.as_ref().map(|_| "<ExcludeFile>"))
      .field("skip_module", &self.skip_module.as_ref().map(|_| "<SkipModule>"))
      .field("module_externals", &self.module_externals)
      .field("es_module_externals", &self.es_module_externals)
      .field("external_accessor", &self.external_accessor.as_ref().map(|_| "<ExternalAccessor>"))
      .field("warn_on_multiple_files", &self.warn_on_multiple_files)
      .finish()
  }
}
