use crate::{
  discovery::Method,
  generator::{
    fields::{FieldDef, dedupe_idents, describe_field},
    metrics::GenerationWarning,
    ordering::sort_fields,
    schemas::StructDef,
    type_resolver::TypeResolver,
  },
  naming::identifiers::{args_type_name, tool_name},
  utils::{clean_description, truncate_description},
};

/// A selected operation with its derived names.
#[derive(Debug, Clone)]
pub struct MethodInfo<'a> {
  /// Dotted name, e.g. `videos.list`.
  pub full_name: String,
  pub method: &'a Method,
  pub tool_name: String,
  pub args_type_name: String,
  /// Cleaned and capped description for the tool table.
  pub description: String,
}

impl<'a> MethodInfo<'a> {
  pub(crate) fn new(full_name: &str, method: &'a Method, tool_prefix: &str, type_prefix: &str) -> Self {
    Self {
      full_name: full_name.to_string(),
      method,
      tool_name: tool_name(tool_prefix, full_name),
      args_type_name: args_type_name(type_prefix, full_name),
      description: truncate_description(&method.description),
    }
  }

  /// `(operation, schema)` pairs for the request and response bodies.
  pub(crate) fn body_refs(&self) -> impl Iterator<Item = (&str, &str)> {
    self.method.body_refs().map(move |schema| (self.full_name.as_str(), schema))
  }

  /// Argument struct built from the method's parameters, required ones first.
  pub(crate) fn args_struct(&self) -> (StructDef, Vec<GenerationWarning>) {
    let mut fields: Vec<FieldDef> = self
      .method
      .parameters
      .iter()
      .map(|(name, param)| {
        FieldDef::new(
          name,
          TypeResolver::resolve_parameter(param),
          param.required,
          describe_field(&param.description, &param.enum_values, &param.default, false),
        )
        .with_position(self.method.parameter_position(name))
      })
      .collect();

    sort_fields(&mut fields);
    let warnings = dedupe_idents(&self.args_type_name, &mut fields);

    let mut description = format!("Arguments for `{}`.", self.tool_name);
    let summary = clean_description(&self.method.description);
    if !summary.is_empty() {
      description.push_str("\n\n");
      description.push_str(&summary);
    }

    let def = StructDef {
      name: self.args_type_name.clone(),
      description,
      fields,
    };
    (def, warnings)
  }
}
