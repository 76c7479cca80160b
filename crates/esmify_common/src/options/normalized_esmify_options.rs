use std::{fmt::Debug, sync::Arc};

use crate::{ExcludeFile, ExternalAccessor, SkipModule};

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
pub struct NormalizedEsmifyOptions {
  pub exclude: Arc<dyn ExcludeFile>,
  pub skip_module: Arc<dyn SkipModule>,
  pub external_accessor: Arc<dyn ExternalAccessor>,
  pub module_externals: bool,
  pub es_module_externals: bool,
  pub warn_on_multiple_files: bool,
}

impl Debug for NormalizedEsmifyOptions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("NormalizedEsmifyOptions")
      .field("module_externals", &self.module_externals)
      .field("es_module_externals", &self.es_module_externals)
      .field("warn_on_multiple_files", &self.warn_on_multiple_files)
      .finish_non_exhaustive()
  }
}
