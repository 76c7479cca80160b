use std::sync::Arc;

use esmify_common::{
  EsmifyOptions, NeverSkip, NonJavaScriptFiles, NormalizedEsmifyOptions, WebpackExternalAccessor,
};

pub fn normalize_options(raw_options: EsmifyOptions) -> NormalizedEsmifyOptions {
  NormalizedEsmifyOptions {
    exclude: raw_options.exclude.unwrap_or_else(|| Arc::new(NonJavaScriptFiles)),
    skip_module: raw_options.skip_module.unwrap_or_else(|| Arc::new(NeverSkip)),
    external_accessor: raw_options
      .external_accessor
      .unwrap_or_else(|| Arc::new(WebpackExternalAccessor)),
    module_externals: raw_options.module_externals.unwrap_or(false),
    es_module_externals: raw_options.es_module_externals.unwrap_or(false),
    warn_on_multiple_files: raw_options.warn_on_multiple_files.unwrap_or(false),
  }
}
