use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::UseTree;

use super::{errors::GenerationError, model::OperationSpec};

pub mod api_call;
pub mod dependencies;
pub mod dispatcher;
pub mod execute;
pub mod handler;
pub mod lints;
pub mod parameters;
pub mod response_check;

use dispatcher::DispatcherFragment;
use handler::HandlerFragment;
use lints::LintConfig;
use response_check::ResponseCheckFragment;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

/// Options that change the emitted code.
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct CodegenConfig {
  #[builder(default)]
  pub visibility: Visibility,
  /// Run the operation's own response through `check_api_response` before returning it.
  #[builder(default)]
  pub validate_execute_response: bool,
  /// Extra `use` trees, typically bringing `regular` functions into scope.
  #[builder(default)]
  pub imports: Vec<String>,
}

impl CodegenConfig {
  fn import_tokens(&self) -> Result<TokenStream, GenerationError> {
    let trees = self
      .imports
      .iter()
      .map(|import| syn::parse_str::<UseTree>(import).map_err(|_| GenerationError::InvalidImport(import.clone())))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! { #(use #trees;)* })
  }
}

/// Emits the complete dispatch unit for `operations`.
///
/// Fails on the first operation that cannot be emitted; nothing is returned in that case.
pub(crate) fn generate(operations: &[OperationSpec], config: &CodegenConfig) -> Result<TokenStream, GenerationError> {
  let handlers = operations
    .iter()
    .map(|operation| HandlerFragment::new(operation, config))
    .collect::<Result<Vec<_>, _>>()?;

  let imports = config.import_tokens()?;
  let lints = LintConfig::default();
  let response_check = ResponseCheckFragment;
  let dispatcher = DispatcherFragment::new(&handlers, config.visibility);

  let mut tokens = quote! {
    #lints

    use opgen_support::OperationError;
    use serde_json::{Value, json};
    #imports

    #response_check
  };
  for handler in &handlers {
    handler.to_tokens(&mut tokens);
  }
  dispatcher.to_tokens(&mut tokens);

  Ok(tokens)
}

/// Parses and pretty-prints a generated unit.
pub(crate) fn format_source(code: TokenStream) -> Result<String, GenerationError> {
  let syntax_tree = syn::parse2::<syn::File>(code)?;
  Ok(prettyplease::unparse(&syntax_tree))
}

/// Prefixes the generated-file banner.
///
/// The banner holds no timestamp so identical inputs give identical files.
pub(crate) fn with_header(formatted: &str, operation_count: usize, source_path: &str, gen_version: &str) -> String {
  format!(
    r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Operation dispatcher for {operation_count} operation(s)
//! Source: {source_path}
//! Generated by `opgen` {gen_version}

{formatted}"
  )
}
