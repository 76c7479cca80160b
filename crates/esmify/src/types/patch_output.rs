use arcstr::ArcStr;
use esmify_utils::indexmap::FxIndexMap;

/// Where an output file ended up after one patch invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
  /// Generated text was added around the original content.
  Patched,
  /// The `exclude` option matched; the bytes are unchanged.
  Excluded,
  /// The chunk has no entry module, or nothing in its entry closure knows its exports.
  SkippedNoEntry,
  /// No carrier is configured, so there is nothing to export from.
  SkippedNoCarrier,
}

#[derive(Debug, Default)]
pub struct PatchOutput {
  pub files: FxIndexMap<ArcStr, FileState>,
  pub warnings: Vec<anyhow::Error>,
}

impl PatchOutput {
  pub fn state_of(&self, filename: &str) -> Option<FileState> {
    self.files.get(filename).copied()
  }

  pub fn patched_files(&self) -> impl Iterator<Item = &ArcStr> {
    self.files.iter().filter(|(_, state)| **state == FileState::Patched).map(|(name, _)| name)
  }
}
