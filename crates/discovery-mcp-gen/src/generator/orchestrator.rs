//! Orchestration for the Discovery Document to MCP tool bindings pipeline.
//!
//! ```no_run
//! use discovery_mcp_gen::{
//!   discovery::Document,
//!   generator::orchestrator::{GenerateOptions, Orchestrator},
//! };
//!
//! # fn example() -> anyhow::Result<()> {
//! let json = std::fs::read_to_string("youtube.v3.json")?;
//! let document = Document::from_json(&json)?;
//!
//! let options = GenerateOptions::builder().methods(vec!["videos.list".to_string()]).build();
//! let output = Orchestrator::new(document, options)?.generate()?;
//!
//! println!("{} tools, {} warnings", output.stats.operations_converted, output.stats.warnings.len());
//! std::fs::write("tools.rs", output.code)?;
//! # Ok(())
//! # }
//! ```

use itertools::Itertools;

use crate::{
  discovery::Document,
  generator::{
    codegen::{RenderInput, TemplateRenderer, format_source},
    error::GenerateError,
    metrics::{GenerationStats, GenerationWarning},
    operations::MethodInfo,
    schema_registry::{CollectedSchemas, SchemaOrder, SchemaRegistry},
    schemas::{SchemaConverter, SchemaDef, StructDef},
    type_resolver::TypeResolver,
  },
  naming::identifiers::is_valid_identifier,
};

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
const DEFAULT_MODULE_NAME: &str = "tools";
const DEFAULT_TYPE_PREFIX: &str = "API";

/// Generation settings. Unset or empty names fall back to defaults derived from the document.
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct GenerateOptions {
  /// Name of the generated `pub mod`. Defaults to `tools`.
  #[builder(into)]
  pub module_name: Option<String>,
  /// Prefix of every tool name. Defaults to `<document name>_`.
  #[builder(into)]
  pub tool_prefix: Option<String>,
  /// Prefix of every argument type name. Defaults to `API`.
  #[builder(into)]
  pub type_prefix: Option<String>,
  /// Operations to generate, by dotted name. Empty selects every operation.
  #[builder(default)]
  pub methods: Vec<String>,
  /// Also generate types for request and response bodies.
  #[builder(default)]
  pub generate_schema: bool,
  #[builder(default)]
  pub schema_order: SchemaOrder,
  /// Treat references to undefined schemas as errors instead of warnings.
  #[builder(default)]
  pub strict_references: bool,
}

/// [`GenerateOptions`] with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
  pub module_name: String,
  pub tool_prefix: String,
  pub type_prefix: String,
  pub methods: Vec<String>,
  pub generate_schema: bool,
  pub schema_order: SchemaOrder,
  pub strict_references: bool,
}

fn non_empty(value: Option<&String>) -> Option<String> {
  value.filter(|value| !value.is_empty()).cloned()
}

impl GenerateOptions {
  pub fn resolve(&self, document: &Document) -> ResolvedOptions {
    ResolvedOptions {
      module_name: non_empty(self.module_name.as_ref()).unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string()),
      tool_prefix: non_empty(self.tool_prefix.as_ref()).unwrap_or_else(|| format!("{}_", document.name)),
      type_prefix: non_empty(self.type_prefix.as_ref()).unwrap_or_else(|| DEFAULT_TYPE_PREFIX.to_string()),
      methods: self.methods.iter().unique().cloned().collect(),
      generate_schema: self.generate_schema,
      schema_order: self.schema_order,
      strict_references: self.strict_references,
    }
  }
}

/// Metadata about the source document for the generated file header.
#[derive(Debug, Clone)]
pub struct CodeMetadata {
  pub name: String,
  pub version: String,
  pub title: String,
}

/// Generated source and the statistics collected while producing it.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

/// Runs the full pipeline for one document.
#[derive(Debug)]
pub struct Orchestrator {
  document: Document,
  options: ResolvedOptions,
  renderer: TemplateRenderer,
}

impl Orchestrator {
  /// Resolves defaults and compiles the output template.
  ///
  /// # Errors
  ///
  /// Fails when the module name is not a Rust identifier or the template does not compile.
  pub fn new(document: Document, options: GenerateOptions) -> Result<Self, GenerateError> {
    let options = options.resolve(&document);
    if !is_valid_identifier(&options.module_name) {
      return Err(GenerateError::InvalidModuleName {
        name: options.module_name,
      });
    }

    Ok(Self {
      document,
      options,
      renderer: TemplateRenderer::new()?,
    })
  }

  pub fn options(&self) -> &ResolvedOptions {
    &self.options
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      name: self.document.name.clone(),
      version: self.document.version.clone(),
      title: self.document.title.clone(),
    }
  }

  /// Selects the requested operations in request order, or every operation in name order.
  /// Any unknown name fails the whole selection before anything is generated.
  fn select_methods(&self) -> Result<Vec<MethodInfo<'_>>, GenerateError> {
    let all_methods = self.document.all_methods();
    let names: Vec<&str> = if self.options.methods.is_empty() {
      all_methods.keys().map(String::as_str).collect()
    } else {
      self.options.methods.iter().map(String::as_str).collect()
    };

    names
      .into_iter()
      .map(|name| {
        let method = all_methods
          .get(name)
          .copied()
          .ok_or_else(|| GenerateError::MethodNotFound { name: name.to_string() })?;
        Ok(MethodInfo::new(
          name,
          method,
          &self.options.tool_prefix,
          &self.options.type_prefix,
        ))
      })
      .collect()
  }

  fn check_references(&self, collected: &CollectedSchemas, stats: &mut GenerationStats) -> Result<(), GenerateError> {
    for (schema, referrers) in &collected.unresolved {
      let referenced_by = referrers.iter().join(", ");
      if self.options.strict_references {
        return Err(GenerateError::UnresolvedReference {
          schema: schema.clone(),
          referenced_by,
        });
      }
      stats.record_warning(GenerationWarning::UnresolvedReference {
        schema: schema.clone(),
        referenced_by,
      });
    }
    Ok(())
  }

  fn convert_schemas(
    &self,
    methods: &[MethodInfo<'_>],
    stats: &mut GenerationStats,
  ) -> Result<Vec<SchemaDef>, GenerateError> {
    if !self.options.generate_schema {
      return Ok(vec![]);
    }

    let registry = SchemaRegistry::new(&self.document.schemas);
    let collected = registry.collect(methods.iter().flat_map(MethodInfo::body_refs));
    self.check_references(&collected, stats)?;

    stats.record_orphaned_schemas(registry.len() - collected.names.len());
    stats.record_cycles(registry.cycles(&collected.names));

    let converter = SchemaConverter::new(TypeResolver::new(&self.document.schemas));
    let mut defs = vec![];
    for name in registry.ordered(&collected.names, self.options.schema_order) {
      let Some(schema) = registry.get(&name) else {
        continue;
      };
      let Some((def, warnings)) = converter.convert(&name, schema) else {
        continue;
      };
      stats.record_schema(match &def {
        SchemaDef::Struct(def) => def.fields.len(),
        SchemaDef::Alias(_) => 0,
      });
      stats.record_warnings(warnings);
      defs.push(def);
    }

    Ok(defs)
  }

  fn convert_operations(methods: &[MethodInfo<'_>], stats: &mut GenerationStats) -> Vec<StructDef> {
    methods
      .iter()
      .map(|method| {
        let (def, warnings) = method.args_struct();
        stats.record_operation(def.fields.len());
        stats.record_warnings(warnings);
        def
      })
      .collect()
  }

  fn header(&self) -> Vec<String> {
    let metadata = self.metadata();
    vec![
      format!("Code generated by {GENERATOR_NAME}. DO NOT EDIT."),
      format!("Source: {} {}", metadata.name, metadata.version),
      format!("API: {}", metadata.title),
    ]
  }

  /// Generates the formatted module.
  ///
  /// # Errors
  ///
  /// - [`GenerateError::MethodNotFound`] before any work when a requested operation is unknown.
  /// - [`GenerateError::UnresolvedReference`] with strict references.
  /// - [`GenerateError::Syntax`] when the rendered text does not parse; the unformatted text is
  ///   available through [`GenerateError::unformatted`].
  pub fn generate(&self) -> Result<GeneratedOutput, GenerateError> {
    let methods = self.select_methods()?;
    let mut stats = GenerationStats::default();

    let schemas = self.convert_schemas(&methods, &mut stats)?;
    let args = Self::convert_operations(&methods, &mut stats);

    let input = RenderInput {
      header: self.header(),
      module_name: &self.options.module_name,
      schemas: &schemas,
      args: &args,
      methods: &methods,
    };
    let code = format_source(self.renderer.render(&input)?)?;

    Ok(GeneratedOutput { code, stats })
  }
}

/// Generates tool bindings for `document` in one call.
///
/// # Errors
///
/// See [`Orchestrator::new`] and [`Orchestrator::generate`].
pub fn generate_mcp_tools(document: Document, options: GenerateOptions) -> Result<GeneratedOutput, GenerateError> {
  Orchestrator::new(document, options)?.generate()
}
