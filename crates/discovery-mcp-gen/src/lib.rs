//! Generates MCP tool argument types from Google API Discovery Documents.
//!
//! A [`discovery::Document`] is flattened into operations, the schemas their request and response
//! bodies depend on are collected, and everything is rendered into a single Rust module of
//! `serde` + `schemars` types plus a tool name table.

pub mod discovery;
pub mod generator;
pub mod naming;
pub mod utils;

pub use discovery::{Document, DocumentError};
pub use generator::{
  GenerateError, GenerateOptions, GeneratedOutput, GenerationStats, GenerationWarning, Orchestrator, SchemaOrder,
  generate_mcp_tools,
};
