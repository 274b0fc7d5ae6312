#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
  #[error("method '{name}' not found in discovery document")]
  MethodNotFound { name: String },

  #[error("module name '{name}' is not a valid Rust identifier")]
  InvalidModuleName { name: String },

  #[error("schema '{schema}' is not defined (referenced by {referenced_by})")]
  UnresolvedReference { schema: String, referenced_by: String },

  #[error("failed to render template: {0}")]
  Template(#[from] tera::Error),

  /// The rendered text is not valid Rust. The unformatted text is kept for inspection.
  #[error("generated code is not valid Rust at {line}:{column}: {message}")]
  Syntax {
    message: String,
    line: usize,
    column: usize,
    unformatted: String,
  },
}

impl GenerateError {
  /// Unformatted generated text, when generation got as far as rendering.
  pub fn unformatted(&self) -> Option<&str> {
    match self {
      Self::Syntax { unformatted, .. } => Some(unformatted),
      _ => None,
    }
  }
}
