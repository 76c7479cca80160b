use esmify_common::{SourceJoiner, PLUGIN_NAME};
use esmify_error::{BuildError, BuildResult};
use esmify_utils::rayon::{IntoParallelRefIterator, ParallelIterator};
use futures::future::join_all;

use crate::{
  types::{
    patch_context::{ChunkPatch, PatchContext},
    patch_output::FileState,
  },
  utils::chunk::{
    collect_export_bindings::collect_export_bindings,
    render_chunk_exports::render_chunk_exports,
    render_external_imports::{collect_external_refs, render_external_imports},
  },
};

use super::{ClaimedChunk, PatchStage};

impl PatchStage<'_> {
  /// Patches every claimed chunk concurrently. Nothing is written here: either every chunk
  /// succeeds and the caller applies all patches, or the errors of every failing chunk are
  /// returned together.
  pub(super) async fn patch_chunk_assets(
    &self,
    carrier: &str,
    claimed: Vec<ClaimedChunk<'_>>,
  ) -> BuildResult<Vec<ChunkPatch>> {
    let tasks = claimed.into_iter().map(|ClaimedChunk { chunk, entry_module, files }| async move {
      let mut ctx = PatchContext {
        chunk,
        entry_module,
        files,
        carrier,
        options: self.options,
        assets: &self.compilation.assets,
        warnings: vec![],
      };
      patch_chunk(&mut ctx)
    });

    let mut patches = vec![];
    let mut errors = vec![];
    for result in join_all(tasks).await {
      match result {
        Ok(patch) => patches.push(patch),
        Err(err) => errors.extend(err.into_vec()),
      }
    }

    if errors.is_empty() {
      Ok(patches)
    } else {
      Err(errors.into())
    }
  }
}

fn patch_chunk(ctx: &mut PatchContext<'_>) -> BuildResult<ChunkPatch> {
  let chunk = ctx.chunk;
  let chunk_name = chunk.display_name();

  if ctx.options.warn_on_multiple_files && chunk.files.len() > 1 {
    ctx.warnings.push(anyhow::anyhow!(
      r#"Was expecting only 1 file for chunk "{chunk_name}" (found: {})!"#,
      chunk.files.len()
    ));
  }

  let collected =
    collect_export_bindings(ctx.entry_module, &*ctx.options.skip_module, ctx.carrier).map_err(
      |err| err.context(format!(r#"Failed to collect the exports of chunk "{chunk_name}""#)),
    )?;
  let postamble = render_chunk_exports(&collected, ctx.carrier, chunk_name, &mut ctx.warnings);
  let externals = collect_external_refs(chunk, ctx.options)?;
  let imports = render_external_imports(&externals, ctx.options);

  let mut patch = ChunkPatch::default();
  let assets = ctx.assets;
  let results = ctx
    .files
    .par_iter()
    .map(|file| {
      let Some(original) = assets.get(file.as_str()) else {
        return Err(anyhow::anyhow!(
          r#"File "{file}" of chunk "{chunk_name}" is missing from the compilation assets"#
        ));
      };

      let mut joiner = SourceJoiner::default();
      joiner.prepend_source(imports.preamble.as_str());
      joiner.append_source(original);
      joiner.append_source(postamble.as_str());
      joiner.append_source(imports.helper.as_str());

      Ok((file.clone(), joiner.join()))
    })
    .collect::<Vec<_>>();

  let mut errors = vec![];
  for result in results {
    match result {
      Ok((file, content)) => {
        log::debug!("[{PLUGIN_NAME}] {file}: patched");
        patch.states.push((file.clone(), FileState::Patched));
        patch.assets.push((file, content));
      }
      Err(err) => errors.push(err),
    }
  }

  if !errors.is_empty() {
    return Err(BuildError::from(errors));
  }

  patch.warnings = std::mem::take(&mut ctx.warnings);
  Ok(patch)
}
