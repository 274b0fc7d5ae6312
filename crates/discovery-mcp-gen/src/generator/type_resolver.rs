//! Maps Discovery schemas and parameters to Rust types.
//!
//! Resolution is a pure function of the node, its [`Presence`] and the document's schema table.
//! References never embed pointers: a `$ref` is looked up by name each time it is resolved.

use std::{collections::BTreeMap, fmt};

use crate::{
  discovery::{Parameter, Schema, SchemaKind},
  naming::identifiers::schema_type_name,
};

/// Whether a value must be present where it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  Required,
  Optional,
  /// A sequence item or map value. Never independently optional.
  Element,
}

impl Presence {
  pub fn from_required(required: bool) -> Self {
    if required { Self::Required } else { Self::Optional }
  }
}

/// Name of the `value == T::default()` helper emitted into modules with optional numeric fields.
pub const ZERO_PREDICATE: &str = "is_zero";

/// Scalar Rust types produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RustPrimitive {
  #[strum(to_string = "i32")]
  I32,
  #[strum(to_string = "u32")]
  U32,
  #[strum(to_string = "i64")]
  I64,
  #[strum(to_string = "u64")]
  U64,
  #[strum(to_string = "f32")]
  F32,
  #[strum(to_string = "f64")]
  F64,
  #[strum(to_string = "bool")]
  Bool,
  #[strum(to_string = "String")]
  String,
  #[strum(to_string = "serde_json::Value")]
  Value,
}

/// Resolved Rust type of a field, parameter or element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
  Primitive(RustPrimitive),
  /// A named generated type held by value (inside a container).
  Named(String),
  /// An owning reference to a named generated type: `Box<T>`.
  Boxed(String),
  Optional(Box<TypeRef>),
  Seq(Box<TypeRef>),
  Map(Box<TypeRef>),
}

impl TypeRef {
  pub fn optional(self) -> Self {
    Self::Optional(Box::new(self))
  }

  pub fn seq(self) -> Self {
    Self::Seq(Box::new(self))
  }

  pub fn map(self) -> Self {
    Self::Map(Box::new(self))
  }

  pub const fn value() -> Self {
    Self::Primitive(RustPrimitive::Value)
  }

  /// Full Rust type text, e.g. `Option<Box<VideoStatus>>` or `HashMap<String, Vec<i64>>`.
  pub fn to_rust_type(&self) -> String {
    match self {
      Self::Primitive(primitive) => primitive.to_string(),
      Self::Named(name) => name.clone(),
      Self::Boxed(name) => format!("Box<{name}>"),
      Self::Optional(inner) => format!("Option<{}>", inner.to_rust_type()),
      Self::Seq(inner) => format!("Vec<{}>", inner.to_rust_type()),
      Self::Map(inner) => format!("HashMap<String, {}>", inner.to_rust_type()),
    }
  }

  /// Predicate used to omit an unset optional field when serializing, if the type has one.
  pub fn skip_predicate(&self) -> Option<&'static str> {
    match self {
      Self::Optional(_) => Some("Option::is_none"),
      Self::Seq(_) => Some("Vec::is_empty"),
      Self::Map(_) => Some("HashMap::is_empty"),
      Self::Primitive(RustPrimitive::String) => Some("String::is_empty"),
      Self::Primitive(RustPrimitive::Value) => Some("serde_json::Value::is_null"),
      Self::Primitive(
        RustPrimitive::I32
        | RustPrimitive::U32
        | RustPrimitive::I64
        | RustPrimitive::U64
        | RustPrimitive::F32
        | RustPrimitive::F64,
      ) => Some(ZERO_PREDICATE),
      Self::Primitive(RustPrimitive::Bool) | Self::Named(_) | Self::Boxed(_) => None,
    }
  }

  pub fn contains_map(&self) -> bool {
    match self {
      Self::Map(_) => true,
      Self::Optional(inner) | Self::Seq(inner) => inner.contains_map(),
      Self::Primitive(_) | Self::Named(_) | Self::Boxed(_) => false,
    }
  }
}

impl fmt::Display for TypeRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_rust_type())
  }
}

/// Resolves schema nodes against the document's schema table.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
  schemas: &'a BTreeMap<String, Schema>,
}

impl<'a> TypeResolver<'a> {
  pub fn new(schemas: &'a BTreeMap<String, Schema>) -> Self {
    Self { schemas }
  }

  pub fn resolve_schema(&self, schema: &Schema, presence: Presence) -> TypeRef {
    match schema.kind() {
      SchemaKind::Reference(name) => self.resolve_reference(name, presence),
      SchemaKind::Array(items) => items
        .map_or_else(TypeRef::value, |items| self.resolve_schema(items, Presence::Element))
        .seq(),
      SchemaKind::Map(values) => self.resolve_schema(values, Presence::Element).map(),
      SchemaKind::Object(_) => TypeRef::value().map(),
      SchemaKind::Scalar { schema_type, format } => scalar_type(schema_type, format, presence),
    }
  }

  fn resolve_reference(&self, name: &str, presence: Presence) -> TypeRef {
    let Some(target) = self.schemas.get(name) else {
      return TypeRef::value();
    };

    if target.is_wrapper() {
      return scalar_type(&target.schema_type, &target.format, presence);
    }

    let type_name = schema_type_name(name);
    match presence {
      Presence::Element => TypeRef::Named(type_name),
      Presence::Required => TypeRef::Boxed(type_name),
      Presence::Optional => TypeRef::Boxed(type_name).optional(),
    }
  }

  /// Repeated parameters become a sequence of the scalar type; items are never nullable.
  pub fn resolve_parameter(param: &Parameter) -> TypeRef {
    if param.repeated {
      return scalar_type(&param.param_type, &param.format, Presence::Element).seq();
    }
    scalar_type(&param.param_type, &param.format, Presence::from_required(param.required))
  }
}

/// Maps a Discovery scalar type name and format hint to a Rust type.
///
/// An optional boolean stays `Option<bool>` so that "explicitly false" and "not specified"
/// remain distinguishable on the wire.
pub fn scalar_type(schema_type: &str, format: &str, presence: Presence) -> TypeRef {
  let primitive = match schema_type {
    "string" => RustPrimitive::String,
    "integer" => match format {
      "int32" => RustPrimitive::I32,
      "uint32" => RustPrimitive::U32,
      "uint64" => RustPrimitive::U64,
      _ => RustPrimitive::I64,
    },
    "number" => match format {
      "float" => RustPrimitive::F32,
      _ => RustPrimitive::F64,
    },
    "boolean" => {
      return match presence {
        Presence::Optional => TypeRef::Primitive(RustPrimitive::Bool).optional(),
        Presence::Required | Presence::Element => TypeRef::Primitive(RustPrimitive::Bool),
      };
    }
    _ => RustPrimitive::Value,
  };
  TypeRef::Primitive(primitive)
}
