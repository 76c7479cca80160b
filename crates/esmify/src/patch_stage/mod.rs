mod patch_chunk_assets;

use arcstr::ArcStr;
use esmify_common::{Chunk, Compilation, ModuleNode, PLUGIN_NAME};
use esmify_error::BuildResult;
use rustc_hash::FxHashMap;

use crate::{
  types::{
    patch_output::{FileState, PatchOutput},
    SharedOptions,
  },
  utils::chunk::validate_output_options::validate_output_options,
};

/// A chunk that will be patched, with the files it claimed.
struct ClaimedChunk<'a> {
  chunk: &'a Chunk,
  entry_module: &'a ModuleNode,
  files: Vec<ArcStr>,
}

pub struct PatchStage<'a> {
  compilation: &'a mut Compilation,
  options: &'a SharedOptions,
}

impl<'a> PatchStage<'a> {
  pub fn new(compilation: &'a mut Compilation, options: &'a SharedOptions) -> Self {
    Self { compilation, options }
  }

  pub async fn patch(&mut self) -> BuildResult<PatchOutput> {
    let mut output = PatchOutput::default();
    validate_output_options(&self.compilation.output, &mut output.warnings);

    let Some(carrier) = self.compilation.output.carrier().cloned() else {
      for file in self.compilation.chunks.iter().flat_map(|chunk| &chunk.files) {
        output.files.insert(file.clone(), FileState::SkippedNoCarrier);
      }
      log_warnings(&output.warnings);
      return Ok(output);
    };

    let claimed = self.claim_files(&mut output);
    let patches = self.patch_chunk_assets(&carrier, claimed).await?;

    for patch in patches {
      output.files.extend(patch.states);
      output.warnings.extend(patch.warnings);
      for (filename, content) in patch.assets {
        self.compilation.assets.insert(filename, content);
      }
    }

    log_warnings(&output.warnings);
    Ok(output)
  }

  /// Assigns every output file to the first chunk that will patch it, so a file listed by
  /// several chunks gets exactly one export block. A chunk excluding a file doesn't claim it.
  fn claim_files(&self, output: &mut PatchOutput) -> Vec<ClaimedChunk<'_>> {
    let mut owners = FxHashMap::<&str, &Chunk>::default();
    let mut claimed = vec![];

    for chunk in &self.compilation.chunks {
      // Runtime and split vendor chunks have no entry, or an entry nothing knows the exports of.
      let Some(entry_module) = chunk.entry_module.as_ref().filter(|entry| entry.has_export_info())
      else {
        for file in &chunk.files {
          output.files.entry(file.clone()).or_insert(FileState::SkippedNoEntry);
        }
        log::debug!("[{PLUGIN_NAME}] chunk \"{}\" exposes no exports", chunk.display_name());
        continue;
      };

      let mut files = Vec::with_capacity(chunk.files.len());
      for file in &chunk.files {
        if self.options.exclude.exclude(file.as_str(), chunk) {
          log::debug!("[{PLUGIN_NAME}] {file}: excluded for chunk \"{}\"", chunk.display_name());
          output.files.entry(file.clone()).or_insert(FileState::Excluded);
          continue;
        }
        if let Some(owner) = owners.get(file.as_str()) {
          output.warnings.push(anyhow::anyhow!(
            r#"File "{file}" of chunk "{}" is already patched for chunk "{}"!"#,
            chunk.display_name(),
            owner.display_name()
          ));
          continue;
        }
        owners.insert(file.as_str(), chunk);
        files.push(file.clone());
      }

      claimed.push(ClaimedChunk { chunk, entry_module, files });
    }

    claimed
  }
}

fn log_warnings(warnings: &[anyhow::Error]) {
  for warning in warnings {
    log::warn!("[{PLUGIN_NAME}] {warning}");
  }
}
