//! Typed representation of a Google API Discovery Document.
//!
//! See <https://developers.google.com/discovery/v1/reference/apis>. Everything here is deserialized
//! once and only borrowed afterwards. Nested schemas are owned by value, while references between
//! named schemas are kept as plain names and resolved through [`Document::schemas`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::discovery::DocumentError;

/// Root of a Discovery Document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
  pub id: String,
  pub name: String,
  pub version: String,
  pub title: String,
  pub description: String,
  pub root_url: String,
  pub service_path: String,
  pub documentation_link: String,
  pub schemas: BTreeMap<String, Schema>,
  pub resources: BTreeMap<String, Resource>,
  /// Top-level methods. Rare, but some APIs declare them.
  pub methods: BTreeMap<String, Method>,
  /// Parameters shared by every method (`alt`, `fields`, `key`, ...).
  pub parameters: BTreeMap<String, Parameter>,
}

impl Document {
  /// Parses a document from raw JSON bytes, reporting the JSON path of the first mismatch.
  pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(data);
    serde_path_to_error::deserialize(deserializer).map_err(|error| DocumentError::Parse {
      path: error.path().to_string(),
      source: error.into_inner(),
    })
  }

  pub fn from_json(json: &str) -> Result<Self, DocumentError> {
    Self::from_slice(json.as_bytes())
  }
}

/// An API resource (`videos`, `playlists`), possibly holding nested resources.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
  pub methods: BTreeMap<String, Method>,
  pub resources: BTreeMap<String, Resource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Method {
  pub id: String,
  pub path: String,
  pub http_method: String,
  pub description: String,
  pub parameters: BTreeMap<String, Parameter>,
  /// Canonical order of the required parameters.
  pub parameter_order: Vec<String>,
  pub request: Option<SchemaRef>,
  pub response: Option<SchemaRef>,
  pub scopes: Vec<String>,
  pub media_upload: Option<MediaUpload>,
  pub supports_media_download: bool,
}

impl Method {
  /// Position of `name` in the declared parameter order.
  pub fn parameter_position(&self, name: &str) -> Option<usize> {
    self.parameter_order.iter().position(|candidate| candidate == name)
  }

  /// Names of the request and response body schemas, in that order.
  pub fn body_refs(&self) -> impl Iterator<Item = &str> {
    self
      .request
      .iter()
      .chain(self.response.iter())
      .map(|schema_ref| schema_ref.reference.as_str())
      .filter(|name| !name.is_empty())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
  #[serde(rename = "type")]
  pub param_type: String,
  pub format: String,
  pub description: String,
  pub required: bool,
  /// `path` or `query`.
  pub location: String,
  pub repeated: bool,
  pub default: String,
  #[serde(rename = "enum")]
  pub enum_values: Vec<String>,
  pub enum_descriptions: Vec<String>,
  pub minimum: String,
  pub maximum: String,
  pub pattern: String,
}

/// A JSON Schema node as used by Discovery Documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Schema {
  pub id: String,
  #[serde(rename = "type")]
  pub schema_type: String,
  pub format: String,
  pub description: String,
  pub properties: BTreeMap<String, Schema>,
  pub items: Option<Box<Schema>>,
  pub additional_properties: Option<Box<Schema>>,
  #[serde(rename = "$ref")]
  pub reference: String,
  pub default: String,
  #[serde(rename = "enum")]
  pub enum_values: Vec<String>,
  pub enum_descriptions: Vec<String>,
  /// Set when the schema is used as a property.
  pub required: bool,
  pub read_only: bool,
  pub annotations: Option<Annotations>,
}

/// Read-only classification of a [`Schema`], in type resolution priority order.
#[derive(Debug, Clone, Copy)]
pub enum SchemaKind<'a> {
  Reference(&'a str),
  Array(Option<&'a Schema>),
  Map(&'a Schema),
  Object(&'a BTreeMap<String, Schema>),
  Scalar { schema_type: &'a str, format: &'a str },
}

impl Schema {
  pub fn kind(&self) -> SchemaKind<'_> {
    if !self.reference.is_empty() {
      return SchemaKind::Reference(&self.reference);
    }

    match self.schema_type.as_str() {
      "array" => SchemaKind::Array(self.items.as_deref()),
      "object" => match self.additional_properties.as_deref() {
        Some(values) => SchemaKind::Map(values),
        None => SchemaKind::Object(&self.properties),
      },
      "" if !self.properties.is_empty() => SchemaKind::Object(&self.properties),
      schema_type => SchemaKind::Scalar {
        schema_type,
        format: &self.format,
      },
    }
  }

  /// A named schema whose underlying type is a scalar rather than an object or array.
  pub fn is_wrapper(&self) -> bool {
    self.reference.is_empty() && !self.schema_type.is_empty() && !matches!(self.schema_type.as_str(), "object" | "array")
  }

  /// Property names listed under `annotations.required`.
  pub fn annotated_required(&self) -> &[String] {
    self
      .annotations
      .as_ref()
      .map(|annotations| annotations.required.as_slice())
      .unwrap_or_default()
  }

  /// Sub-schemas nested directly under this node.
  pub fn children(&self) -> impl Iterator<Item = &Schema> {
    self
      .properties
      .values()
      .chain(self.items.as_deref())
      .chain(self.additional_properties.as_deref())
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotations {
  pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaRef {
  #[serde(rename = "$ref", default)]
  pub reference: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaUpload {
  pub accept: Vec<String>,
  pub max_size: String,
  pub protocols: BTreeMap<String, Protocol>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Protocol {
  pub multipart: bool,
  pub path: String,
}
