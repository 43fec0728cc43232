use proc_macro2::TokenStream;
use quote::quote;

use super::errors::GenerationError;

/// The closed set of value kinds a parameter or dependency result may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
pub enum ValueKind {
  #[strum(to_string = "string")]
  String,
  #[strum(to_string = "number")]
  Number,
  #[strum(to_string = "number_integer", serialize = "integer")]
  Integer,
  #[strum(to_string = "number_unsigned", serialize = "unsigned-integer")]
  UnsignedInteger,
  #[strum(to_string = "number_float", serialize = "float")]
  Float,
  #[strum(to_string = "boolean")]
  Boolean,
}

impl ValueKind {
  /// Parses a kind token from a schema document.
  ///
  /// This is the only place unknown tokens are rejected.
  pub fn from_token(token: &str) -> Result<Self, GenerationError> {
    token
      .parse()
      .map_err(|_| GenerationError::UnsupportedKind(token.to_string()))
  }

  /// The Rust type a value of this kind is bound as.
  pub(crate) fn rust_type(self) -> TokenStream {
    match self {
      Self::String => quote! { String },
      Self::Number | Self::Float => quote! { f64 },
      Self::Integer => quote! { i64 },
      Self::UnsignedInteger => quote! { u64 },
      Self::Boolean => quote! { bool },
    }
  }

  /// Adapter chain turning an `Option<&Value>` into an `Option` of [`Self::rust_type`].
  ///
  /// `None` means the value is absent or not of this kind.
  pub(crate) fn extractor(self) -> TokenStream {
    match self {
      Self::String => quote! { .and_then(Value::as_str).map(str::to_owned) },
      Self::Number => quote! { .and_then(Value::as_f64) },
      Self::Integer => quote! { .and_then(Value::as_i64) },
      Self::UnsignedInteger => quote! { .and_then(Value::as_u64) },
      Self::Float => quote! { .filter(|value| value.is_f64()).and_then(Value::as_f64) },
      Self::Boolean => quote! { .and_then(Value::as_bool) },
    }
  }

  /// Human readable name used in generated error messages.
  pub(crate) const fn description(self) -> &'static str {
    match self {
      Self::String => "string",
      Self::Number => "number",
      Self::Integer => "integer",
      Self::UnsignedInteger => "unsigned integer",
      Self::Float => "float",
      Self::Boolean => "boolean",
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn test_from_token_accepts_all_spellings() {
    let cases = [
      ("string", ValueKind::String),
      ("number", ValueKind::Number),
      ("number_integer", ValueKind::Integer),
      ("integer", ValueKind::Integer),
      ("number_unsigned", ValueKind::UnsignedInteger),
      ("unsigned-integer", ValueKind::UnsignedInteger),
      ("number_float", ValueKind::Float),
      ("float", ValueKind::Float),
      ("boolean", ValueKind::Boolean),
    ];

    for (token, expected) in cases {
      assert_eq!(ValueKind::from_token(token).unwrap(), expected, "token: {token}");
    }
  }

  #[test]
  fn test_from_token_rejects_unknown() {
    for token in ["object", "array", "String", "", "int"] {
      let err = ValueKind::from_token(token).unwrap_err();
      assert!(
        matches!(&err, GenerationError::UnsupportedKind(t) if t == token),
        "token: {token}"
      );
      assert_eq!(err.to_string(), format!("unsupported value kind \"{token}\""));
    }
  }

  #[test]
  fn test_display_round_trips_through_from_token() {
    for kind in ValueKind::iter() {
      assert_eq!(ValueKind::from_token(&kind.to_string()).unwrap(), kind);
    }
  }

  #[test]
  fn test_rust_type_mapping() {
    let cases = [
      (ValueKind::String, "String"),
      (ValueKind::Number, "f64"),
      (ValueKind::Integer, "i64"),
      (ValueKind::UnsignedInteger, "u64"),
      (ValueKind::Float, "f64"),
      (ValueKind::Boolean, "bool"),
    ];

    for (kind, expected) in cases {
      assert_eq!(kind.rust_type().to_string(), expected);
    }
  }

  #[test]
  fn test_every_kind_has_an_extractor() {
    for kind in ValueKind::iter() {
      let extractor = kind.extractor().to_string();
      assert!(extractor.starts_with('.'), "{kind}: {extractor}");
    }
  }
}
