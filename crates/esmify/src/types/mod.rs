pub mod patch_context;
pub mod patch_output;

use std::sync::Arc;

use esmify_common::NormalizedEsmifyOptions;

pub type SharedOptions = Arc<NormalizedEsmifyOptions>;
