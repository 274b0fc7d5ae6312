use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

// Keywords that cannot be raw identifiers.
static UNRAWABLE_IDENTIFIERS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["crate", "self", "Self", "super"].into_iter().collect());

// Types the generated module names without a path; a schema of the same name would shadow them.
static SHADOWED_TYPE_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "Box",
    "Deserialize",
    "HashMap",
    "JsonSchema",
    "Option",
    "Result",
    "Serialize",
    "String",
    "Vec",
  ]
  .into_iter()
  .collect()
});

/// Acronyms canonicalized after capitalization, applied in this order.
const ACRONYMS: &[(&str, &str)] = &[("Id", "ID"), ("Url", "URL"), ("Http", "HTTP"), ("Api", "API")];

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());
static WORD_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Transliterates to ASCII, replaces invalid identifier characters with underscores, collapses
/// consecutive underscores and trims them from both ends.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Derives an exported (`PascalCase`) identifier from a schema, property or parameter name.
///
/// # Rules:
/// 1. Splits on any run of non-alphanumeric characters (`_`, `-`, `.`, spaces, ...).
/// 2. Uppercases the first letter of every word, leaving the rest of the word untouched.
/// 3. Replaces the substrings `Id`, `Url`, `Http` and `Api` with their uppercase acronyms.
/// 4. Prefixes a leading digit with `T`; `Self` becomes `Self_` and an empty result becomes `Unnamed`.
///
/// `videoId` becomes `VideoID`, `http_method` becomes `HTTPMethod`, `kebab-case` becomes `KebabCase`.
pub fn exported_name(name: &str) -> String {
  let ascii = any_ascii(name);
  let mut ident: String = WORD_BOUNDARY_RE
    .split(&ascii)
    .filter(|word| !word.is_empty())
    .map(capitalize_first)
    .collect();

  for (from, to) in ACRONYMS {
    ident = ident.replace(from, to);
  }

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident == "Self" {
    ident.push('_');
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

fn capitalize_first(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Converts a wire name into a valid Rust field name (`snake_case`).
///
/// # Rules:
/// 1. Sanitizes the name and converts it to `snake_case`.
/// 2. `self`, `Self`, `crate` and `super` get a trailing `_`.
/// 3. Any other keyword gets a raw identifier prefix (`r#`).
/// 4. A leading digit is prefixed with `_`; an empty result becomes `field`.
pub fn to_rust_field_name(name: &str) -> String {
  let mut ident = sanitize(name).to_snake_case();

  if ident.is_empty() {
    return "field".to_string();
  }

  if UNRAWABLE_IDENTIFIERS.contains(ident.as_str()) {
    ident.push('_');
    return ident;
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Type name of a generated schema. Names that would shadow a type used by the generated module
/// get a trailing `_`, so `Option` becomes `Option_`.
pub fn schema_type_name(name: &str) -> String {
  let mut ident = exported_name(name);
  if SHADOWED_TYPE_NAMES.contains(ident.as_str()) {
    ident.push('_');
  }
  ident
}

/// Tool identifier registered with the MCP server: `youtube_` + `videos.list` -> `youtube_videos_list`.
pub fn tool_name(prefix: &str, full_name: &str) -> String {
  format!("{prefix}{}", full_name.replace('.', "_"))
}

/// Argument type for an operation: `API` + `videos.list` -> `APIVideosListArgs`.
pub fn args_type_name(prefix: &str, full_name: &str) -> String {
  let body: String = full_name.split('.').map(exported_name).collect();
  format!("{prefix}{body}Args")
}

/// Whether `name` can be used verbatim as a Rust module or item name.
pub fn is_valid_identifier(name: &str) -> bool {
  syn::parse_str::<syn::Ident>(name).is_ok()
}
