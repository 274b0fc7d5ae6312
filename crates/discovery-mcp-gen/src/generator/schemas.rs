use std::collections::BTreeSet;

use crate::{
  discovery::{Schema, SchemaKind},
  generator::{
    fields::{FieldDef, dedupe_idents, describe_field},
    metrics::GenerationWarning,
    ordering::sort_fields,
    type_resolver::{Presence, TypeRef, TypeResolver, ZERO_PREDICATE},
  },
  naming::identifiers::schema_type_name,
  utils::clean_description,
};

/// A struct emitted for an object schema or an operation's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
  pub name: String,
  pub description: String,
  pub fields: Vec<FieldDef>,
}

impl StructDef {
  pub fn uses_map(&self) -> bool {
    self.fields.iter().any(|field| field.type_ref.contains_map())
  }

  /// Whether any field is skipped through the generated zero check.
  pub fn uses_zero_check(&self) -> bool {
    self
      .fields
      .iter()
      .any(|field| field.skip_predicate() == Some(ZERO_PREDICATE))
  }
}

/// `pub type Name = Target;` for a named array, map or alias schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasDef {
  pub name: String,
  pub description: String,
  pub target: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDef {
  Struct(StructDef),
  Alias(AliasDef),
}

impl SchemaDef {
  pub fn uses_map(&self) -> bool {
    match self {
      Self::Struct(def) => def.uses_map(),
      Self::Alias(def) => def.target.contains_map(),
    }
  }

  pub fn uses_zero_check(&self) -> bool {
    match self {
      Self::Struct(def) => def.uses_zero_check(),
      Self::Alias(_) => false,
    }
  }
}

pub(crate) struct SchemaConverter<'a> {
  resolver: TypeResolver<'a>,
}

impl<'a> SchemaConverter<'a> {
  pub(crate) fn new(resolver: TypeResolver<'a>) -> Self {
    Self { resolver }
  }

  /// Converts a named schema. Wrapper schemas produce nothing: references to them resolve to the
  /// underlying scalar. An object without declared properties accepts any keys, so it becomes an
  /// alias of a free-form map rather than a struct that would drop them.
  pub(crate) fn convert(&self, name: &str, schema: &Schema) -> Option<(SchemaDef, Vec<GenerationWarning>)> {
    if schema.is_wrapper() {
      return None;
    }

    let type_name = schema_type_name(name);
    let description = clean_description(&schema.description);

    let properties = match schema.kind() {
      SchemaKind::Object(properties) if !properties.is_empty() => properties,
      _ => {
        let alias = AliasDef {
          name: type_name,
          description,
          target: self.resolver.resolve_schema(schema, Presence::Element),
        };
        return Some((SchemaDef::Alias(alias), vec![]));
      }
    };

    let required: BTreeSet<&str> = schema.annotated_required().iter().map(String::as_str).collect();

    let mut fields: Vec<FieldDef> = properties
      .iter()
      .map(|(property_name, property)| {
        let is_required = property.required || required.contains(property_name.as_str());
        FieldDef::new(
          property_name,
          self
            .resolver
            .resolve_schema(property, Presence::from_required(is_required)),
          is_required,
          describe_field(
            &property.description,
            &property.enum_values,
            &property.default,
            property.read_only,
          ),
        )
      })
      .collect();

    sort_fields(&mut fields);
    let warnings = dedupe_idents(&type_name, &mut fields);

    let def = StructDef {
      name: type_name,
      description,
      fields,
    };
    Some((SchemaDef::Struct(def), warnings))
  }
}
