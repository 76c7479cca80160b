use esmify_utils::js_file::is_javascript_file;

use crate::Chunk;

pub trait ExcludeFile: Send + Sync {
  fn exclude(&self, file_name: &str, chunk: &Chunk) -> bool;
}

impl<F> ExcludeFile for F
where
  F: Fn(&str, &Chunk) -> bool + Send + Sync,
{
  fn exclude(&self, file_name: &str, chunk: &Chunk) -> bool {
    self(file_name, chunk)
  }
}

/// Excludes everything that isn't a `.js`/`.mjs` file: source maps, css, assets.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonJavaScriptFiles;

impl ExcludeFile for NonJavaScriptFiles {
  fn exclude(&self, file_name: &str, _chunk: &Chunk) -> bool {
    !is_javascript_file(file_name)
  }
}
