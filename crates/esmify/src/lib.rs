mod patch_stage;
mod patcher;
mod types;
mod utils;

pub use crate::{
  patcher::EsmifyPatcher,
  types::patch_output::{FileState, PatchOutput},
  utils::chunk::{
    collect_export_bindings::{collect_export_bindings, CollectedExports},
    render_chunk_exports::render_chunk_exports,
    render_external_imports::{collect_external_refs, render_external_imports, ExternalImports},
  },
};
pub use esmify_common::*;
pub use esmify_error::{BuildError, BuildResult};
