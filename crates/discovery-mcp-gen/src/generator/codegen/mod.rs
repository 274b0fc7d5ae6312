//! Template rendering and formatting of the generated module.
//!
//! The domain model ([`SchemaDef`], [`StructDef`], [`MethodInfo`]) is flattened into serializable
//! views whose strings are already valid Rust tokens, so the template never escapes anything itself.

use serde::Serialize;
use tera::{Context, Tera};

use crate::{
  generator::{
    error::GenerateError,
    fields::FieldDef,
    operations::MethodInfo,
    schemas::{SchemaDef, StructDef},
  },
  utils::{doc_lines, rust_string_literal},
};

const TEMPLATE_NAME: &str = "tools.rs";
const TEMPLATE: &str = include_str!("../../../templates/tools.rs.tera");

/// Everything that goes into one generated file.
#[derive(Debug)]
pub(crate) struct RenderInput<'a> {
  pub header: Vec<String>,
  pub module_name: &'a str,
  pub schemas: &'a [SchemaDef],
  pub args: &'a [StructDef],
  pub methods: &'a [MethodInfo<'a>],
}

#[derive(Debug, Serialize)]
struct FileView {
  header: Vec<String>,
  module_name: String,
  uses_map: bool,
  uses_zero_check: bool,
  schemas: Vec<ItemView>,
  args: Vec<ItemView>,
  tools: Vec<ToolView>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum ItemView {
  Struct {
    name: String,
    docs: Vec<String>,
    fields: Vec<FieldView>,
  },
  Alias {
    name: String,
    docs: Vec<String>,
    target: String,
  },
}

#[derive(Debug, Serialize)]
struct FieldView {
  ident: String,
  rust_type: String,
  serde: String,
  description: Option<String>,
}

#[derive(Debug, Serialize)]
struct ToolView {
  name: String,
  description: String,
}

/// Doc attribute literals; the leading space keeps `/// text` spacing once pretty-printed.
fn doc_literals(text: &str) -> Vec<String> {
  doc_lines(text)
    .iter()
    .map(|line| {
      if line.is_empty() {
        rust_string_literal("")
      } else {
        rust_string_literal(&format!(" {line}"))
      }
    })
    .collect()
}

fn serde_attr(field: &FieldDef) -> String {
  let mut parts = vec![format!("rename = {}", rust_string_literal(&field.wire_name))];
  if !field.required {
    parts.push("default".to_string());
    if let Some(predicate) = field.skip_predicate() {
      parts.push(format!("skip_serializing_if = {}", rust_string_literal(predicate)));
    }
  }
  parts.join(", ")
}

impl From<&FieldDef> for FieldView {
  fn from(field: &FieldDef) -> Self {
    Self {
      ident: field.ident.clone(),
      rust_type: field.rust_type(),
      serde: serde_attr(field),
      description: (!field.description.is_empty()).then(|| rust_string_literal(&field.description)),
    }
  }
}

impl From<&StructDef> for ItemView {
  fn from(def: &StructDef) -> Self {
    Self::Struct {
      name: def.name.clone(),
      docs: doc_literals(&def.description),
      fields: def.fields.iter().map(FieldView::from).collect(),
    }
  }
}

impl From<&SchemaDef> for ItemView {
  fn from(def: &SchemaDef) -> Self {
    match def {
      SchemaDef::Struct(def) => Self::from(def),
      SchemaDef::Alias(def) => Self::Alias {
        name: def.name.clone(),
        docs: doc_literals(&def.description),
        target: def.target.to_rust_type(),
      },
    }
  }
}

impl From<&RenderInput<'_>> for FileView {
  fn from(input: &RenderInput<'_>) -> Self {
    let uses_map =
      input.schemas.iter().any(SchemaDef::uses_map) || input.args.iter().any(StructDef::uses_map);
    let uses_zero_check =
      input.schemas.iter().any(SchemaDef::uses_zero_check) || input.args.iter().any(StructDef::uses_zero_check);

    Self {
      header: input.header.iter().flat_map(|line| doc_literals(line)).collect(),
      module_name: input.module_name.to_string(),
      uses_map,
      uses_zero_check,
      schemas: input.schemas.iter().map(ItemView::from).collect(),
      args: input.args.iter().map(ItemView::from).collect(),
      tools: input
        .methods
        .iter()
        .map(|method| ToolView {
          name: rust_string_literal(&method.tool_name),
          description: rust_string_literal(&method.description),
        })
        .collect(),
    }
  }
}

/// Compiled output template. Built once and reused for every render.
#[derive(Debug)]
pub(crate) struct TemplateRenderer {
  tera: Tera,
}

impl TemplateRenderer {
  pub(crate) fn new() -> Result<Self, GenerateError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(Self { tera })
  }

  /// Renders unformatted Rust source.
  pub(crate) fn render(&self, input: &RenderInput<'_>) -> Result<String, GenerateError> {
    let context = Context::from_serialize(FileView::from(input))?;
    Ok(self.tera.render(TEMPLATE_NAME, &context)?)
  }
}

/// Parses `code` as a Rust file and pretty-prints it. On a syntax error the input is handed back
/// inside the error.
pub(crate) fn format_source(code: String) -> Result<String, GenerateError> {
  match syn::parse_file(&code) {
    Ok(file) => Ok(prettyplease::unparse(&file)),
    Err(error) => {
      let start = error.span().start();
      Err(GenerateError::Syntax {
        message: error.to_string(),
        line: start.line,
        column: start.column + 1,
        unformatted: code,
      })
    }
  }
}
