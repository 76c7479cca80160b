pub mod compilation;
pub mod export_binding;
pub mod module_id;
pub mod provided_exports;
pub mod source;
pub mod source_joiner;
