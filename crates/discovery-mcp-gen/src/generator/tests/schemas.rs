use serde_json::json;

use super::support::{parse_schema, schema_table};
use crate::generator::{
  metrics::GenerationWarning,
  schemas::{SchemaConverter, SchemaDef, StructDef},
  type_resolver::TypeResolver,
};

fn convert(table: &serde_json::Value, name: &str) -> Option<(SchemaDef, Vec<GenerationWarning>)> {
  let table = schema_table(table.clone());
  let converter = SchemaConverter::new(TypeResolver::new(&table));
  converter.convert(name, &table[name])
}

fn convert_struct(table: &serde_json::Value, name: &str) -> StructDef {
  match convert(table, name) {
    Some((SchemaDef::Struct(def), _)) => def,
    other => panic!("expected a struct for {name}, got {other:?}"),
  }
}

#[test]
fn test_struct_field_order() {
  let table = json!({
    "Animal": {
      "type": "object",
      "properties": {
        "zebra": { "type": "string" },
        "alpha": { "type": "string" },
        "required": { "type": "string", "required": true },
        "beta": { "type": "string" }
      }
    }
  });

  let def = convert_struct(&table, "Animal");
  let order: Vec<&str> = def.fields.iter().map(|field| field.wire_name.as_str()).collect();
  assert_eq!(order, vec!["required", "alpha", "beta", "zebra"]);
}

#[test]
fn test_annotated_required_properties() {
  let table = json!({
    "Playlist": {
      "type": "object",
      "description": "A \"playlist\"\nof videos.",
      "properties": {
        "title": { "type": "string" },
        "public": { "type": "boolean" },
        "featured": { "type": "boolean" },
        "etag": { "type": "string", "readOnly": true, "description": "Etag." }
      },
      "annotations": { "required": ["title", "public"] }
    }
  });

  let def = convert_struct(&table, "Playlist");
  assert_eq!(def.name, "Playlist");
  assert_eq!(def.description, "A 'playlist' of videos.");

  let fields: Vec<(&str, bool, String)> = def
    .fields
    .iter()
    .map(|field| (field.wire_name.as_str(), field.required, field.rust_type()))
    .collect();
  assert_eq!(
    fields,
    vec![
      ("public", true, "bool".to_string()),
      ("title", true, "String".to_string()),
      ("etag", false, "String".to_string()),
      ("featured", false, "Option<bool>".to_string()),
    ]
  );
  assert_eq!(def.fields[2].description, "Etag. (read-only)");
}

#[test]
fn test_struct_uses_map() {
  let table = json!({
    "Tagged": {
      "type": "object",
      "properties": { "labels": { "type": "object", "additionalProperties": { "type": "string" } } }
    },
    "Plain": { "type": "object", "properties": { "name": { "type": "string" } } }
  });

  assert!(convert_struct(&table, "Tagged").uses_map());
  assert!(!convert_struct(&table, "Plain").uses_map());
}

#[test]
fn test_wrapper_schema_is_not_emitted() {
  let table = json!({ "ChannelName": { "type": "string" } });
  assert!(convert(&table, "ChannelName").is_none());
}

#[test]
fn test_array_schema_becomes_alias() {
  let table = json!({
    "VideoList": { "type": "array", "description": "Videos.", "items": { "$ref": "Video" } },
    "Video": { "type": "object" }
  });

  let Some((SchemaDef::Alias(alias), warnings)) = convert(&table, "VideoList") else {
    panic!("expected an alias");
  };
  assert_eq!(alias.name, "VideoList");
  assert_eq!(alias.target.to_rust_type(), "Vec<Video>");
  assert_eq!(alias.description, "Videos.");
  assert!(warnings.is_empty());
}

#[test]
fn test_object_without_properties_is_free_form_alias() {
  let table = json!({
    "Empty": { "type": "object", "description": "A generic empty message." },
    "Labels": { "type": "object", "properties": {} }
  });

  for name in ["Empty", "Labels"] {
    let Some((SchemaDef::Alias(alias), _)) = convert(&table, name) else {
      panic!("expected an alias for {name}");
    };
    assert_eq!(alias.target.to_rust_type(), "HashMap<String, serde_json::Value>");
  }
}

#[test]
fn test_shadowing_schema_name_is_renamed() {
  let table = json!({
    "Option": { "type": "object", "properties": { "value": { "type": "string" } } },
    "vec": { "type": "array", "items": { "type": "string" } }
  });

  assert_eq!(convert_struct(&table, "Option").name, "Option_");
  let Some((SchemaDef::Alias(alias), _)) = convert(&table, "vec") else {
    panic!("expected an alias");
  };
  assert_eq!(alias.name, "Vec_");
}

#[test]
fn test_unnamed_properties_get_distinct_fields() {
  let table = json!({
    "Odd": {
      "type": "object",
      "properties": { "_": { "type": "string" }, "$": { "type": "string" } }
    }
  });

  let def = convert_struct(&table, "Odd");
  let idents: Vec<&str> = def.fields.iter().map(|field| field.ident.as_str()).collect();
  assert_eq!(idents, vec!["field", "field_2"]);
}

#[test]
fn test_duplicate_field_names_warn() {
  let table = json!({
    "Clash": {
      "type": "object",
      "properties": {
        "itemId": { "type": "string" },
        "item_id": { "type": "string" }
      }
    }
  });

  let Some((SchemaDef::Struct(def), warnings)) = convert(&table, "Clash") else {
    panic!("expected a struct");
  };
  let idents: Vec<&str> = def.fields.iter().map(|field| field.ident.as_str()).collect();
  assert_eq!(idents, vec!["item_id", "item_id_2"]);
  assert_eq!(warnings.len(), 1);
}

#[test]
fn test_parse_schema_helper_keeps_description() {
  let schema = parse_schema(json!({ "type": "string", "description": "text" }));
  assert_eq!(schema.description, "text");
}
