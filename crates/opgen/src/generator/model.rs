//! In-memory representation of loaded operation specifications.
//!
//! Instances are built once by the loader and only read afterwards.

use super::kinds::ValueKind;

/// A request parameter the operation expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
  pub name: String,
  pub kind: ValueKind,
}

impl ParameterSpec {
  pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
    Self {
      name: name.into(),
      kind,
    }
  }
}

/// Literal argument value as written in the schema, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentLiteral {
  /// Absent, null or empty value.
  Empty,
  Boolean(bool),
  /// Rust expression text, copied into the generated code as is.
  Expression(String),
}

impl ArgumentLiteral {
  pub fn expression(text: impl Into<String>) -> Self {
    let text = text.into();
    if text.is_empty() {
      Self::Empty
    } else {
      Self::Expression(text)
    }
  }
}

/// A named argument passed to a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
  pub name: String,
  pub literal: ArgumentLiteral,
}

impl ArgumentSpec {
  pub fn new(name: impl Into<String>, literal: ArgumentLiteral) -> Self {
    Self {
      name: name.into(),
      literal,
    }
  }
}

/// A call that produces a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionCallSpec {
  /// Round trip through the query-execution callback.
  Api { name: String, arguments: Vec<ArgumentSpec> },
  /// Direct in-process call built from the argument literals.
  Regular { name: String, arguments: Vec<ArgumentSpec> },
}

impl FunctionCallSpec {
  pub fn api(name: impl Into<String>, arguments: Vec<ArgumentSpec>) -> Self {
    Self::Api {
      name: name.into(),
      arguments,
    }
  }

  pub fn regular(name: impl Into<String>, arguments: Vec<ArgumentSpec>) -> Self {
    Self::Regular {
      name: name.into(),
      arguments,
    }
  }

  pub fn name(&self) -> &str {
    match self {
      Self::Api { name, .. } | Self::Regular { name, .. } => name,
    }
  }

  pub fn arguments(&self) -> &[ArgumentSpec] {
    match self {
      Self::Api { arguments, .. } | Self::Regular { arguments, .. } => arguments,
    }
  }

  /// Schema spelling of the call type.
  pub const fn type_label(&self) -> &'static str {
    match self {
      Self::Api { .. } => "api",
      Self::Regular { .. } => "regular",
    }
  }
}

/// A value that must exist before the operation's own call runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
  pub result_name: String,
  pub result_kind: ValueKind,
  pub call: FunctionCallSpec,
}

impl DependencySpec {
  pub fn new(result_name: impl Into<String>, result_kind: ValueKind, call: FunctionCallSpec) -> Self {
    Self {
      result_name: result_name.into(),
      result_kind,
      call,
    }
  }
}

/// The operation's final action. Only API calls can be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteSpec {
  pub call: FunctionCallSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct OperationSpec {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub parameters: Vec<ParameterSpec>,
  #[builder(default)]
  pub dependencies: Vec<DependencySpec>,
  pub execute: ExecuteSpec,
}

impl OperationSpec {
  pub fn api_call_count(&self) -> usize {
    let dependency_calls = self
      .dependencies
      .iter()
      .filter(|dependency| matches!(dependency.call, FunctionCallSpec::Api { .. }))
      .count();
    dependency_calls + usize::from(matches!(self.execute.call, FunctionCallSpec::Api { .. }))
  }
}
