use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::Ident;

use super::{
  CodegenConfig, Visibility, dependencies::DependencyResolutionFragment, execute::ExecuteFragment,
  parameters::ParameterValidationFragment,
};
use crate::{
  generator::{errors::GenerationError, model::OperationSpec},
  reserved::to_handler_name,
};

/// One `handle_<operation>_operation` function: parameter validation, then dependency
/// resolution, then the execute call.
#[derive(Clone, Debug)]
pub(crate) struct HandlerFragment {
  vis: Visibility,
  operation: String,
  name: Ident,
  parameters: ParameterValidationFragment,
  dependencies: DependencyResolutionFragment,
  execute: ExecuteFragment,
}

impl HandlerFragment {
  pub(crate) fn new(operation: &OperationSpec, config: &CodegenConfig) -> Result<Self, GenerationError> {
    Ok(Self {
      vis: config.visibility,
      operation: operation.name.clone(),
      name: format_ident!("{}", to_handler_name(&operation.name)),
      parameters: ParameterValidationFragment::new(&operation.name, &operation.parameters),
      dependencies: DependencyResolutionFragment::new(&operation.name, &operation.dependencies)?,
      execute: ExecuteFragment::new(&operation.name, &operation.execute, config.validate_execute_response)?,
    })
  }

  pub(crate) fn operation(&self) -> &str {
    &self.operation
  }

  pub(crate) fn name(&self) -> &Ident {
    &self.name
  }
}

impl ToTokens for HandlerFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let vis = self.vis.to_tokens();
    let name = &self.name;
    let doc = format!(" Handles the `{}` operation.", self.operation);
    let parameters = &self.parameters;
    let dependencies = &self.dependencies;
    let execute = &self.execute;

    tokens.extend(quote! {
      #[doc = #doc]
      #vis fn #name<F>(msg: &Value, execute_query: &mut F) -> Result<Value, OperationError>
      where
        F: FnMut(&Value) -> Value,
      {
        #parameters
        #dependencies
        #execute
      }
    });
  }
}
