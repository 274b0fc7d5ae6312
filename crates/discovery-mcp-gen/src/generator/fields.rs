use std::collections::HashSet;

use crate::{
  generator::{metrics::GenerationWarning, ordering::FieldOrder, type_resolver::TypeRef},
  naming::identifiers::to_rust_field_name,
  utils::clean_description,
};

/// A field of a generated struct, either a schema property or an operation parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
  /// Name on the wire, kept through `#[serde(rename)]`.
  pub wire_name: String,
  pub ident: String,
  pub type_ref: TypeRef,
  pub required: bool,
  pub position: Option<usize>,
  pub description: String,
}

impl FieldDef {
  pub fn new(wire_name: &str, type_ref: TypeRef, required: bool, description: String) -> Self {
    Self {
      wire_name: wire_name.to_string(),
      ident: to_rust_field_name(wire_name),
      type_ref,
      required,
      position: None,
      description,
    }
  }

  #[must_use]
  pub fn with_position(mut self, position: Option<usize>) -> Self {
    self.position = position;
    self
  }

  pub fn rust_type(&self) -> String {
    self.type_ref.to_rust_type()
  }

  /// Optional fields are defaulted when absent and skipped when empty.
  pub fn skip_predicate(&self) -> Option<&'static str> {
    if self.required {
      None
    } else {
      self.type_ref.skip_predicate()
    }
  }
}

impl FieldOrder for FieldDef {
  fn wire_name(&self) -> &str {
    &self.wire_name
  }

  fn is_required(&self) -> bool {
    self.required
  }

  fn declared_position(&self) -> Option<usize> {
    self.position
  }
}

/// Field description with enum values, default and read-only marker appended.
pub(crate) fn describe_field(description: &str, enum_values: &[String], default: &str, read_only: bool) -> String {
  let mut text = clean_description(description);

  if !enum_values.is_empty() {
    if !text.is_empty() {
      text.push(' ');
    }
    text.push_str("Values: ");
    text.push_str(&enum_values.join(", "));
  }

  if !default.is_empty() {
    text.push_str(&format!(" (default: {default})"));
  }

  if read_only {
    text.push_str(" (read-only)");
  }

  text.trim_start().to_string()
}

/// Gives every field of `type_name` a distinct identifier, suffixing later duplicates with `_2`,
/// `_3` and so on. Runs after ordering so the first field in emission order keeps its name.
pub(crate) fn dedupe_idents(type_name: &str, fields: &mut [FieldDef]) -> Vec<GenerationWarning> {
  let mut seen = HashSet::new();
  let mut warnings = Vec::new();

  for field in fields {
    if seen.insert(field.ident.clone()) {
      continue;
    }

    let base = field.ident.trim_start_matches("r#");
    let mut suffix = 2;
    let mut unique = format!("{base}_{suffix}");
    while seen.contains(&unique) {
      suffix += 1;
      unique = format!("{base}_{suffix}");
    }

    warnings.push(GenerationWarning::DuplicateFieldName {
      type_name: type_name.to_string(),
      wire_name: field.wire_name.clone(),
      field: unique.clone(),
    });
    seen.insert(unique.clone());
    field.ident = unique;
  }

  warnings
}
