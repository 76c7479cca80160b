use std::fmt::Display;

use arcstr::ArcStr;
use serde::Deserialize;

/// How the bundler exposes the bundle's value. Export synthesis assumes the carrier is a plain
/// variable (`var`) or an assignment to one (`assign`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LibraryTarget {
  Var,
  Assign,
  Other(ArcStr),
}

impl LibraryTarget {
  pub fn is_direct_assignment(&self) -> bool {
    matches!(self, Self::Var | Self::Assign)
  }
}

impl From<&str> for LibraryTarget {
  fn from(value: &str) -> Self {
    match value {
      "var" => Self::Var,
      "assign" => Self::Assign,
      other => Self::Other(other.into()),
    }
  }
}

impl From<String> for LibraryTarget {
  fn from(value: String) -> Self {
    Self::from(value.as_str())
  }
}

impl Display for LibraryTarget {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Var => write!(f, "var"),
      Self::Assign => write!(f, "assign"),
      Self::Other(target) => write!(f, "{target}"),
    }
  }
}

/// Compilation wide output settings read from the bundler configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  /// The carrier: the single global the bundle assigns its public value to.
  pub library: Option<ArcStr>,
  pub library_target: Option<LibraryTarget>,
}

impl OutputOptions {
  /// The carrier name, if one is configured. An empty name counts as missing.
  pub fn carrier(&self) -> Option<&ArcStr> {
    self.library.as_ref().filter(|library| !library.is_empty())
  }
}

#[test]
fn test_library_target() {
  assert_eq!(LibraryTarget::from("var"), LibraryTarget::Var);
  assert!(LibraryTarget::from("assign").is_direct_assignment());
  let umd = LibraryTarget::from("umd");
  assert!(!umd.is_direct_assignment());
  assert_eq!(umd.to_string(), "umd");
}
