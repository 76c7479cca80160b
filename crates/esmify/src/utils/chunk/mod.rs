pub mod collect_export_bindings;
pub mod namespace_marker;
pub mod render_chunk_exports;
pub mod render_external_imports;
pub mod validate_output_options;
