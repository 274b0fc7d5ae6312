pub mod text;

pub use text::{clean_description, truncate_chars, truncate_description};
pub(crate) use text::{doc_lines, rust_string_literal};
