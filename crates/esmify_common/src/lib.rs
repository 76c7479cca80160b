mod chunk;
mod module;
mod options;
mod types;

/// Tag prefixed to every diagnostic this engine reports.
pub const PLUGIN_NAME: &str = "esmify";

pub use crate::{
  chunk::Chunk,
  module::{
    aggregate_module::AggregateModule, external_module::ExternalRef, leaf_module::LeafModule,
    ModuleNode,
  },
  options::{
    exclude_file::{ExcludeFile, NonJavaScriptFiles},
    external_accessor::{ExternalAccessor, WebpackExternalAccessor},
    normalized_esmify_options::NormalizedEsmifyOptions,
    output_options::{LibraryTarget, OutputOptions},
    skip_module::{NeverSkip, SkipModule},
    EsmifyOptions,
  },
  types::{
    compilation::Compilation, export_binding::ExportBinding, module_id::ModuleId,
    provided_exports::ProvidedExports, source::Source, source_joiner::SourceJoiner,
  },
};
