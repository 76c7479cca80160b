use arcstr::ArcStr;

/// An external dependency as the generated `import` sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalRef {
  pub request: ArcStr,
  /// The identifier the bundled code reads the external's value from. Unique per external
  /// within a chunk.
  pub runtime_accessor: ArcStr,
}

impl ExternalRef {
  pub fn new(request: impl Into<ArcStr>, runtime_accessor: impl Into<ArcStr>) -> Self {
    Self { request: request.into(), runtime_accessor: runtime_accessor.into() }
  }
}
