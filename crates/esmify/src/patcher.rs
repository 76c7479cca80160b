use std::sync::Arc;

use esmify_common::{Chunk, Compilation, EsmifyOptions, ExternalRef};
use esmify_error::BuildResult;

use crate::{
  patch_stage::PatchStage,
  types::{patch_output::PatchOutput, SharedOptions},
  utils::{
    chunk::render_external_imports::collect_external_refs, normalize_options::normalize_options,
  },
};

/// Adds ES module syntax to bundles that expose their value through a global carrier variable.
///
/// A patcher holds only normalized options and can be reused for any number of compilations.
pub struct EsmifyPatcher {
  pub(crate) options: SharedOptions,
}

impl EsmifyPatcher {
  pub fn new(options: EsmifyOptions) -> Self {
    EsmifyPatcher { options: Arc::new(normalize_options(options)) }
  }

  /// Rewrites the assets of every library chunk in `compilation`.
  ///
  /// The asset store is only touched once every chunk has been processed successfully. On error
  /// it is left exactly as it was.
  pub async fn patch(&self, compilation: &mut Compilation) -> BuildResult<PatchOutput> {
    PatchStage::new(compilation, &self.options).patch().await
  }

  /// The externals of `chunk` with the accessor identifiers the generated imports bind. Must
  /// run before the bundler renders the chunk so both sides agree on the names.
  pub fn tag_external_modules(&self, chunk: &Chunk) -> BuildResult<Vec<ExternalRef>> {
    Ok(collect_external_refs(chunk, &self.options)?)
  }
}
