use arcstr::ArcStr;
use esmify_utils::ecmascript::computed_property_access_str;

/// One name to re-export from the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBinding {
  /// How the value is read at runtime, e.g. `LIB['name']`.
  pub source_expression: String,
  pub public_name: ArcStr,
  pub is_default: bool,
}

impl ExportBinding {
  pub fn named(carrier: &str, name: &ArcStr) -> Self {
    Self {
      source_expression: computed_property_access_str(carrier, name),
      public_name: name.clone(),
      is_default: false,
    }
  }

  pub fn default_export(carrier: &str) -> Self {
    Self {
      source_expression: computed_property_access_str(carrier, "default"),
      public_name: arcstr::literal!("default"),
      is_default: true,
    }
  }

  /// The carrier itself as the default export, used for modules whose exports can't be
  /// determined statically.
  pub fn whole_carrier(carrier: &str) -> Self {
    Self {
      source_expression: carrier.to_string(),
      public_name: arcstr::literal!("default"),
      is_default: true,
    }
  }

  pub fn is_whole_carrier(&self, carrier: &str) -> bool {
    self.is_default && self.source_expression == carrier
  }
}

#[test]
fn test_export_binding_source_expressions() {
  let binding = ExportBinding::named("LIB", &arcstr::literal!("Math"));
  assert_eq!(binding.source_expression, "LIB['Math']");
  assert!(!binding.is_default);

  assert_eq!(ExportBinding::default_export("LIB").source_expression, "LIB['default']");
  assert!(!ExportBinding::default_export("LIB").is_whole_carrier("LIB"));
  assert!(ExportBinding::whole_carrier("LIB").is_whole_carrier("LIB"));
}
