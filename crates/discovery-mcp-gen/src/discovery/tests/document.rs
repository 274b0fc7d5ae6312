use serde_json::json;

use crate::discovery::{Document, DocumentError, Schema, SchemaKind};

const LIBRARY_API: &str = include_str!("../../../fixtures/library_api.json");

fn schema(value: serde_json::Value) -> Schema {
  serde_json::from_value(value).unwrap()
}

#[test]
fn test_parse_document_metadata() {
  let document = Document::from_json(LIBRARY_API).unwrap();

  assert_eq!(document.id, "library:v1");
  assert_eq!(document.name, "library");
  assert_eq!(document.version, "v1");
  assert_eq!(document.title, "Library API");
  assert_eq!(document.root_url, "https://library.googleapis.com/");
  assert_eq!(document.schemas.len(), 8);
  assert!(document.parameters.contains_key("prettyPrint"));
}

#[test]
fn test_parse_schema_fields() {
  let document = Document::from_json(LIBRARY_API).unwrap();
  let book = &document.schemas["Book"];

  assert_eq!(book.annotated_required().to_vec(), vec!["title".to_string()]);
  assert!(book.properties["id"].read_only);
  assert!(book.properties["isbn"].required);
  assert_eq!(book.properties["author"].reference, "Author");
  assert_eq!(book.properties["status"].enum_values, vec!["AVAILABLE", "ON_LOAN"]);
  assert_eq!(book.properties["status"].default, "AVAILABLE");
}

#[test]
fn test_parse_method_fields() {
  let document = Document::from_json(LIBRARY_API).unwrap();
  let borrow = &document.resources["shelves"].resources["books"].methods["borrow"];

  assert_eq!(borrow.http_method, "POST");
  assert_eq!(borrow.parameter_order, vec!["shelf", "name"]);
  assert_eq!(borrow.parameter_position("name"), Some(1));
  assert_eq!(borrow.parameter_position("notify"), None);
  assert_eq!(borrow.body_refs().collect::<Vec<_>>(), vec!["BorrowRequest", "Book"]);

  let fields = &document.resources["shelves"].resources["books"].methods["list"].parameters["fields"];
  assert!(fields.repeated);
  assert_eq!(fields.location, "query");
}

#[test]
fn test_parse_error_reports_json_path() {
  let json = r#"{"name": "broken", "schemas": {"Book": {"properties": {"title": {"required": "yes"}}}}}"#;
  let error = Document::from_json(json).unwrap_err();

  let DocumentError::Parse { path, .. } = &error;
  assert_eq!(path, "schemas.Book.properties.title.required");
  assert!(error.to_string().contains("schemas.Book.properties.title.required"));
}

#[test]
fn test_parse_invalid_json() {
  assert!(Document::from_json("{not json").is_err());
}

#[test]
fn test_schema_kind_priority() {
  let reference = schema(json!({ "$ref": "Book", "type": "object" }));
  assert!(matches!(reference.kind(), SchemaKind::Reference("Book")));

  let array = schema(json!({ "type": "array", "items": { "type": "string" } }));
  assert!(matches!(array.kind(), SchemaKind::Array(Some(_))));

  let bare_array = schema(json!({ "type": "array" }));
  assert!(matches!(bare_array.kind(), SchemaKind::Array(None)));

  let map = schema(json!({ "type": "object", "additionalProperties": { "type": "integer" } }));
  assert!(matches!(map.kind(), SchemaKind::Map(_)));

  let object = schema(json!({ "type": "object", "properties": { "a": { "type": "string" } } }));
  assert!(matches!(object.kind(), SchemaKind::Object(properties) if properties.len() == 1));

  let untyped_object = schema(json!({ "properties": { "a": { "type": "string" } } }));
  assert!(matches!(untyped_object.kind(), SchemaKind::Object(_)));

  let scalar = schema(json!({ "type": "integer", "format": "int64" }));
  assert!(matches!(
    scalar.kind(),
    SchemaKind::Scalar {
      schema_type: "integer",
      format: "int64"
    }
  ));
}

#[test]
fn test_wrapper_schema_detection() {
  assert!(schema(json!({ "type": "string" })).is_wrapper());
  assert!(schema(json!({ "type": "boolean" })).is_wrapper());
  assert!(!schema(json!({ "type": "object" })).is_wrapper());
  assert!(!schema(json!({ "type": "array" })).is_wrapper());
  assert!(!schema(json!({ "$ref": "Other" })).is_wrapper());
  assert!(!schema(json!({})).is_wrapper());
}

#[test]
fn test_schema_children() {
  let node = schema(json!({
    "type": "object",
    "properties": {
      "list": { "type": "array", "items": { "$ref": "Item" } },
      "name": { "type": "string" }
    },
    "additionalProperties": { "$ref": "Extra" }
  }));

  assert_eq!(node.children().count(), 3);
}
