use std::path::PathBuf;

/// Errors that abort generation. No output is produced once one of these is raised.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
  /// A schema document is malformed or violates a naming rule.
  #[error("invalid schema document {}: {message}", document.display())]
  Schema { document: PathBuf, message: String },

  /// A value-kind token outside the closed set of supported kinds.
  #[error("unsupported value kind \"{0}\"")]
  UnsupportedKind(String),

  /// A construct the emitters cannot express.
  #[error("operation \"{operation}\": {construct} is not supported")]
  Unsupported { operation: String, construct: String },

  /// Literal text that does not parse as the Rust syntax it is embedded as.
  #[error("operation \"{operation}\": `{text}` is not a valid Rust {expected}")]
  InvalidExpression {
    operation: String,
    text: String,
    expected: &'static str,
  },

  /// An `--import` entry that is not a valid `use` tree.
  #[error("`{0}` is not a valid import path")]
  InvalidImport(String),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("generated code failed to parse: {0}")]
  Syntax(#[from] syn::Error),
}

impl GenerationError {
  pub(crate) fn schema(document: impl Into<PathBuf>, message: impl Into<String>) -> Self {
    Self::Schema {
      document: document.into(),
      message: message.into(),
    }
  }
}
