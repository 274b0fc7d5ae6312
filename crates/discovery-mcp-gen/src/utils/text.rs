use itertools::Itertools;

/// Longest operation description kept in the tool table, in characters.
pub const MAX_TOOL_DESCRIPTION_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

/// Flattens a description to a single line: newlines become spaces, double quotes and backticks
/// become single quotes, and runs of whitespace collapse to one space.
#[must_use]
pub fn clean_description(input: &str) -> String {
  input
    .replace(['\n', '\r', '\t'], " ")
    .replace(['"', '`'], "'")
    .split(' ')
    .filter(|word| !word.is_empty())
    .join(" ")
}

/// Cleans and caps a description at [`MAX_TOOL_DESCRIPTION_CHARS`], ending truncated text with `...`.
#[must_use]
pub fn truncate_description(input: &str) -> String {
  truncate_chars(input, MAX_TOOL_DESCRIPTION_CHARS)
}

/// Cleans `input` and caps it at `max_chars` characters, ending truncated text with `...`.
#[must_use]
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
  let cleaned = clean_description(input);
  if cleaned.chars().count() <= max_chars {
    return cleaned;
  }

  let keep = max_chars.saturating_sub(ELLIPSIS.len());
  let mut truncated: String = cleaned.chars().take(keep).collect();
  truncated.push_str(ELLIPSIS);
  truncated
}

/// Quotes `input` as a Rust string literal.
#[must_use]
pub(crate) fn rust_string_literal(input: &str) -> String {
  format!("{input:?}")
}

/// Splits text into doc comment lines, dropping trailing blank lines.
#[must_use]
pub(crate) fn doc_lines(input: &str) -> Vec<String> {
  let mut lines: Vec<String> = input.lines().map(|line| line.trim_end().to_string()).collect();
  while lines.last().is_some_and(String::is_empty) {
    lines.pop();
  }
  lines
}
