use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use super::api_call::ApiCallFragment;
use crate::generator::{
  errors::GenerationError,
  model::{ExecuteSpec, FunctionCallSpec},
};

/// The operation's own API call, whose response is the handler's result.
#[derive(Clone, Debug)]
pub(crate) struct ExecuteFragment {
  call: ApiCallFragment,
  validate_response: bool,
}

impl ExecuteFragment {
  /// Fails for a `regular` execute call, which cannot produce a bridge response.
  pub(crate) fn new(operation: &str, execute: &ExecuteSpec, validate_response: bool) -> Result<Self, GenerationError> {
    let FunctionCallSpec::Api { name, arguments } = &execute.call else {
      return Err(GenerationError::Unsupported {
        operation: operation.to_string(),
        construct: format!("a \"{}\" function call as executes statement", execute.call.type_label()),
      });
    };

    let call = ApiCallFragment::new(
      operation,
      name,
      arguments,
      format_ident!("operation_query"),
      format_ident!("result"),
    )?;

    Ok(Self {
      call,
      validate_response,
    })
  }
}

impl ToTokens for ExecuteFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let call = &self.call;
    let result = self.call.response();
    let check = self
      .validate_response
      .then(|| quote! { check_api_response(&#result)?; });

    tokens.extend(quote! {
      #call
      #check
      Ok(#result)
    });
  }
}
