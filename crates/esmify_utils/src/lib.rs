pub mod concat_string;
pub mod ecmascript;
pub mod indexmap;
pub mod js_file;
pub mod rayon;
