use esmify_common::OutputOptions;

/// Reports output settings the generated exports can't work with. Nothing here is fatal: a
/// missing carrier only means there is nothing to patch.
pub fn validate_output_options(output: &OutputOptions, warnings: &mut Vec<anyhow::Error>) {
  if output.carrier().is_none() {
    warnings.push(anyhow::anyhow!("output.library is expected to be set!"));
  }

  if let Some(target) =
    output.library_target.as_ref().filter(|target| !target.is_direct_assignment())
  {
    warnings
      .push(anyhow::anyhow!("output.libraryTarget ({target}) expected to be 'var' or 'assign'!"));
  }
}
