mod document;
mod methods;
pub mod source;

#[cfg(test)]
mod tests;

pub use document::{
  Annotations, Document, MediaUpload, Method, Parameter, Protocol, Resource, Schema, SchemaKind, SchemaRef,
};
pub use methods::MethodIndex;
pub use source::{ApiDirectoryEntry, DocumentSource};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
  #[error("failed to parse discovery document at '{path}': {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },
}
