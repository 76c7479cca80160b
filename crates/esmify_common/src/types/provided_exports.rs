use arcstr::ArcStr;
use esmify_utils::indexmap::FxIndexSet;
use serde::Deserialize;
use serde_json::Value;

/// What the bundler knows about the names a module exports.
///
/// Mirrors the three states a bundler's `providedExports` build meta can be in:
/// an ordered list of names, `true` for "exports exist but can't be determined statically"
/// (plain CommonJS), and nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ProvidedExports {
  /// No export information. The module contributes nothing to the re-exported surface.
  #[default]
  Unknown,
  /// The module's whole runtime value is exposed as an opaque `default` export.
  Dynamic,
  /// Statically known names in the order the bundler assigned them. `"default"` is the
  /// CommonJS-style default value.
  Static(FxIndexSet<ArcStr>),
}

impl ProvidedExports {
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<ArcStr>,
  {
    Self::Static(names.into_iter().map(Into::into).collect())
  }

  pub fn has_export_info(&self) -> bool {
    !matches!(self, Self::Unknown)
  }
}

impl TryFrom<Value> for ProvidedExports {
  type Error = anyhow::Error;

  fn try_from(value: Value) -> anyhow::Result<Self> {
    match value {
      Value::Null => Ok(Self::Unknown),
      Value::Bool(true) => Ok(Self::Dynamic),
      Value::Array(items) => items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
          Value::String(name) => Ok(ArcStr::from(name)),
          other => Err(anyhow::anyhow!(
            "Malformed export manifest: expected the export name at index {idx} to be a string, found `{other}`"
          )),
        })
        .collect::<anyhow::Result<FxIndexSet<_>>>()
        .map(Self::Static),
      other => Err(anyhow::anyhow!(
        "Malformed export manifest: expected an ordered list of export names, `true` or `null`, found `{other}`"
      )),
    }
  }
}

#[test]
fn test_decode_provided_exports() {
  let decode = |json: &str| serde_json::from_str::<ProvidedExports>(json);

  assert_eq!(decode("null").unwrap(), ProvidedExports::Unknown);
  assert_eq!(decode("true").unwrap(), ProvidedExports::Dynamic);

  let ProvidedExports::Static(names) = decode(r#"["default", "x", "y", "x"]"#).unwrap() else {
    panic!("expected a static manifest");
  };
  assert_eq!(names.iter().map(ArcStr::as_str).collect::<Vec<_>>(), ["default", "x", "y"]);

  assert!(decode("false").is_err());
  assert!(decode(r#""default""#).is_err());
  assert!(decode(r#"["a", 1]"#).unwrap_err().to_string().contains("index 1"));
}
