use serde_json::json;

use super::support::{parse_schema, schema_table};
use crate::{
  discovery::Parameter,
  generator::type_resolver::{Presence, RustPrimitive, TypeRef, TypeResolver, ZERO_PREDICATE, scalar_type},
};

fn resolve(schemas: &serde_json::Value, node: serde_json::Value, presence: Presence) -> String {
  let table = schema_table(schemas.clone());
  TypeResolver::new(&table)
    .resolve_schema(&parse_schema(node), presence)
    .to_rust_type()
}

fn parameter(value: serde_json::Value) -> Parameter {
  serde_json::from_value(value).unwrap()
}

#[test]
fn test_scalar_types() {
  let cases = [
    ("string", "", "String"),
    ("string", "byte", "String"),
    ("integer", "", "i64"),
    ("integer", "int32", "i32"),
    ("integer", "uint32", "u32"),
    ("integer", "int64", "i64"),
    ("integer", "uint64", "u64"),
    ("number", "", "f64"),
    ("number", "float", "f32"),
    ("number", "double", "f64"),
    ("any", "", "serde_json::Value"),
    ("mystery", "", "serde_json::Value"),
  ];
  for (schema_type, format, expected) in cases {
    assert_eq!(
      scalar_type(schema_type, format, Presence::Optional).to_rust_type(),
      expected,
      "failed for {schema_type}/{format}"
    );
  }
}

#[test]
fn test_boolean_presence() {
  assert_eq!(
    scalar_type("boolean", "", Presence::Required),
    TypeRef::Primitive(RustPrimitive::Bool)
  );
  assert_eq!(
    scalar_type("boolean", "", Presence::Element),
    TypeRef::Primitive(RustPrimitive::Bool)
  );
  assert_eq!(
    scalar_type("boolean", "", Presence::Optional).to_rust_type(),
    "Option<bool>"
  );
}

#[test]
fn test_same_boolean_property_required_and_optional() {
  let schemas = json!({});
  let node = json!({ "type": "boolean" });
  assert_eq!(resolve(&schemas, node.clone(), Presence::Required), "bool");
  assert_eq!(resolve(&schemas, node, Presence::Optional), "Option<bool>");
}

#[test]
fn test_reference_to_wrapper_resolves_to_scalar() {
  let schemas = json!({
    "ChannelName": { "type": "string" },
    "Flag": { "type": "boolean" }
  });

  for presence in [Presence::Required, Presence::Optional, Presence::Element] {
    assert_eq!(resolve(&schemas, json!({ "$ref": "ChannelName" }), presence), "String");
  }
  assert_eq!(
    resolve(&schemas, json!({ "$ref": "Flag" }), Presence::Optional),
    "Option<bool>"
  );
  assert_eq!(resolve(&schemas, json!({ "$ref": "Flag" }), Presence::Required), "bool");
}

#[test]
fn test_reference_to_composite_by_presence() {
  let schemas = json!({ "videoStatus": { "type": "object", "properties": {} } });
  let node = json!({ "$ref": "videoStatus" });

  assert_eq!(resolve(&schemas, node.clone(), Presence::Required), "Box<VideoStatus>");
  assert_eq!(
    resolve(&schemas, node.clone(), Presence::Optional),
    "Option<Box<VideoStatus>>"
  );
  assert_eq!(resolve(&schemas, node, Presence::Element), "VideoStatus");
}

#[test]
fn test_reference_to_shadowing_name_is_renamed() {
  let schemas = json!({ "Option": { "type": "object", "properties": { "value": { "type": "string" } } } });
  let node = json!({ "$ref": "Option" });

  assert_eq!(
    resolve(&schemas, node.clone(), Presence::Optional),
    "Option<Box<Option_>>"
  );
  assert_eq!(resolve(&schemas, node, Presence::Element), "Option_");
}

#[test]
fn test_unresolved_reference_is_dynamic() {
  assert_eq!(
    resolve(&json!({}), json!({ "$ref": "Missing" }), Presence::Required),
    "serde_json::Value"
  );
}

#[test]
fn test_arrays() {
  let schemas = json!({ "Video": { "type": "object" } });

  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "array", "items": { "$ref": "Video" } }),
      Presence::Optional
    ),
    "Vec<Video>"
  );
  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "array", "items": { "type": "boolean" } }),
      Presence::Optional
    ),
    "Vec<bool>"
  );
  assert_eq!(
    resolve(&schemas, json!({ "type": "array" }), Presence::Required),
    "Vec<serde_json::Value>"
  );
  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "array", "items": { "type": "array", "items": { "type": "integer", "format": "int32" } } }),
      Presence::Required
    ),
    "Vec<Vec<i32>>"
  );
}

#[test]
fn test_maps_and_objects() {
  let schemas = json!({ "Loan": { "type": "object" } });

  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "object", "additionalProperties": { "$ref": "Loan" } }),
      Presence::Optional
    ),
    "HashMap<String, Loan>"
  );
  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "object", "additionalProperties": { "type": "boolean" } }),
      Presence::Optional
    ),
    "HashMap<String, bool>"
  );
  assert_eq!(
    resolve(
      &schemas,
      json!({ "type": "object", "properties": { "a": { "type": "string" } } }),
      Presence::Required
    ),
    "HashMap<String, serde_json::Value>"
  );
}

#[test]
fn test_parameters() {
  let repeated = parameter(json!({ "type": "string", "repeated": true }));
  assert_eq!(TypeResolver::resolve_parameter(&repeated).to_rust_type(), "Vec<String>");

  let repeated_flag = parameter(json!({ "type": "boolean", "repeated": true }));
  assert_eq!(TypeResolver::resolve_parameter(&repeated_flag).to_rust_type(), "Vec<bool>");

  let optional_flag = parameter(json!({ "type": "boolean" }));
  assert_eq!(
    TypeResolver::resolve_parameter(&optional_flag).to_rust_type(),
    "Option<bool>"
  );

  let required_flag = parameter(json!({ "type": "boolean", "required": true }));
  assert_eq!(TypeResolver::resolve_parameter(&required_flag).to_rust_type(), "bool");

  let page_size = parameter(json!({ "type": "integer", "format": "uint32" }));
  assert_eq!(TypeResolver::resolve_parameter(&page_size).to_rust_type(), "u32");
}

#[test]
fn test_skip_predicates() {
  assert_eq!(
    TypeRef::Primitive(RustPrimitive::Bool).optional().skip_predicate(),
    Some("Option::is_none")
  );
  assert_eq!(
    TypeRef::Primitive(RustPrimitive::String).skip_predicate(),
    Some("String::is_empty")
  );
  assert_eq!(TypeRef::value().seq().skip_predicate(), Some("Vec::is_empty"));
  assert_eq!(TypeRef::value().map().skip_predicate(), Some("HashMap::is_empty"));
  assert_eq!(TypeRef::value().skip_predicate(), Some("serde_json::Value::is_null"));
  assert_eq!(TypeRef::Primitive(RustPrimitive::I64).skip_predicate(), Some(ZERO_PREDICATE));
  assert_eq!(TypeRef::Primitive(RustPrimitive::F32).skip_predicate(), Some(ZERO_PREDICATE));
  assert_eq!(TypeRef::Primitive(RustPrimitive::Bool).skip_predicate(), None);
  assert_eq!(TypeRef::Boxed("Video".to_string()).skip_predicate(), None);
}

#[test]
fn test_contains_map() {
  assert!(TypeRef::value().map().contains_map());
  assert!(TypeRef::value().map().seq().optional().contains_map());
  assert!(!TypeRef::Named("Video".to_string()).seq().contains_map());
}
