use std::collections::BTreeMap;

use serde_json::json;

use crate::discovery::{Document, Schema};

pub(super) const LIBRARY_API: &str = include_str!("../../../fixtures/library_api.json");

pub(super) fn library_document() -> Document {
  Document::from_json(LIBRARY_API).expect("fixture must parse")
}

pub(super) fn parse_schema(value: serde_json::Value) -> Schema {
  serde_json::from_value(value).expect("failed to parse test schema")
}

pub(super) fn schema_table(value: serde_json::Value) -> BTreeMap<String, Schema> {
  serde_json::from_value(value).expect("failed to parse test schema table")
}

/// A document with one `items.get` method whose response is `response`.
pub(super) fn document_with_response(response: &str, schemas: serde_json::Value) -> Document {
  serde_json::from_value(json!({
    "name": "test",
    "version": "v1",
    "title": "Test API",
    "schemas": schemas,
    "resources": {
      "items": {
        "methods": {
          "get": {
            "httpMethod": "GET",
            "path": "v1/items",
            "description": "Gets items.",
            "response": { "$ref": response }
          }
        }
      }
    }
  }))
  .expect("failed to build test document")
}

pub(super) fn names(values: &[&str]) -> Vec<String> {
  values.iter().map(|value| (*value).to_string()).collect()
}
