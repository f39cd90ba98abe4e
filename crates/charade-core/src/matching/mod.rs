//! URL template matching utilities.

mod query;
mod template;

pub use query::extract_query_params;
pub use template::{compile_match, extract_path_params, is_match};
