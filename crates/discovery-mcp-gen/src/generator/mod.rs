pub(crate) mod codegen;
pub mod error;
pub(crate) mod fields;
pub mod metrics;
pub(crate) mod operations;
pub mod orchestrator;
pub(crate) mod ordering;
pub(crate) mod schema_registry;
pub(crate) mod schemas;
pub mod type_resolver;

#[cfg(test)]
mod tests;

pub use error::GenerateError;
pub use metrics::{GenerationStats, GenerationWarning};
pub use orchestrator::{
  CodeMetadata, GenerateOptions, GeneratedOutput, Orchestrator, ResolvedOptions, generate_mcp_tools,
};
pub use schema_registry::{CollectedSchemas, SchemaOrder};
