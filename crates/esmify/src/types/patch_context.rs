use arcstr::ArcStr;
use esmify_common::{Chunk, ModuleNode, NormalizedEsmifyOptions};
use esmify_utils::indexmap::FxIndexMap;

use super::patch_output::FileState;

pub struct PatchContext<'a> {
  pub chunk: &'a Chunk,
  pub entry_module: &'a ModuleNode,
  /// Files of this chunk that it doesn't exclude and no earlier chunk claimed.
  pub files: Vec<ArcStr>,
  pub carrier: &'a str,
  pub options: &'a NormalizedEsmifyOptions,
  pub assets: &'a FxIndexMap<ArcStr, String>,
  pub warnings: Vec<anyhow::Error>,
}

/// What one chunk contributes back to the compilation.
#[derive(Default)]
pub struct ChunkPatch {
  pub assets: Vec<(ArcStr, String)>,
  pub states: Vec<(ArcStr, FileState)>,
  pub warnings: Vec<anyhow::Error>,
}
