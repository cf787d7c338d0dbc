pub mod json;
pub mod path;
pub mod validate;
