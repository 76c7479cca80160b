use anyhow::Context;
use arcstr::ArcStr;
use esmify_utils::indexmap::FxIndexMap;
use serde::Deserialize;

use crate::{Chunk, OutputOptions};

/// Everything the bundler hands over once its chunks are final: global output options, the
/// chunk list and the asset store the patched text is written back to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
  #[serde(default)]
  pub output: OutputOptions,
  #[serde(default)]
  pub chunks: Vec<Chunk>,
  #[serde(default)]
  pub assets: FxIndexMap<ArcStr, String>,
}

impl Compilation {
  /// Decodes a compilation described as JSON by a bundler running outside this process.
  pub fn from_json(json: &str) -> anyhow::Result<Self> {
    serde_json::from_str(json).context("Failed to decode the compilation description")
  }
}

#[test]
fn test_compilation_from_json() {
  let compilation = Compilation::from_json(
    r#"{
      "output": { "library": "LIB", "libraryTarget": "var" },
      "chunks": [{
        "name": "main",
        "entryModule": { "kind": "leaf", "id": "./index.js", "providedExports": ["default", "x"] },
        "modules": [{ "id": "foo", "isExternal": true, "request": "./foo-external.js" }],
        "files": ["main.js"]
      }],
      "assets": { "main.js": "var LIB = 1;" }
    }"#,
  )
  .unwrap();

  assert_eq!(compilation.output.library.as_deref(), Some("LIB"));
  assert_eq!(compilation.chunks[0].external_modules().count(), 1);
  assert_eq!(compilation.assets["main.js"], "var LIB = 1;");

  let error = Compilation::from_json(
    r#"{ "chunks": [{ "entryModule": { "kind": "leaf", "providedExports": 42 } }] }"#,
  )
  .unwrap_err();
  assert!(format!("{error:#}").contains("Malformed export manifest"));
}
