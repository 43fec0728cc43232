use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Ident, Path};

use super::api_call::{ApiCallFragment, literal_expr};
use crate::generator::{
  errors::GenerationError,
  kinds::ValueKind,
  model::{DependencySpec, FunctionCallSpec},
};

/// Resolves an operation's dependencies strictly in declaration order.
///
/// API calls are numbered from 1 within the handler (`query1`/`response1`, ...) and
/// every response is checked before its return value is bound.
#[derive(Clone, Debug, Default)]
pub(crate) struct DependencyResolutionFragment {
  steps: Vec<DependencyStep>,
}

impl DependencyResolutionFragment {
  pub(crate) fn new(operation: &str, dependencies: &[DependencySpec]) -> Result<Self, GenerationError> {
    let steps = dependencies
      .iter()
      .enumerate()
      .map(|(index, dependency)| DependencyStep::new(operation, index + 1, dependency))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Self { steps })
  }
}

impl ToTokens for DependencyResolutionFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    for step in &self.steps {
      step.to_tokens(tokens);
    }
  }
}

#[derive(Clone, Debug)]
enum DependencyStep {
  Api {
    binding: Ident,
    kind: ValueKind,
    function: String,
    call: ApiCallFragment,
  },
  Regular {
    binding: Ident,
    kind: ValueKind,
    function: TokenStream,
    arguments: Vec<TokenStream>,
  },
}

impl DependencyStep {
  fn new(operation: &str, counter: usize, dependency: &DependencySpec) -> Result<Self, GenerationError> {
    let binding = format_ident!("{}", dependency.result_name);
    let kind = dependency.result_kind;

    match &dependency.call {
      FunctionCallSpec::Api { name, arguments } => Ok(Self::Api {
        binding,
        kind,
        function: name.clone(),
        call: ApiCallFragment::new(
          operation,
          name,
          arguments,
          format_ident!("query{counter}"),
          format_ident!("response{counter}"),
        )?,
      }),
      FunctionCallSpec::Regular { name, arguments } => {
        let function = syn::parse_str::<Path>(name).map_err(|_| GenerationError::InvalidExpression {
          operation: operation.to_string(),
          text: name.clone(),
          expected: "function path",
        })?;
        let arguments = arguments
          .iter()
          .map(|argument| literal_expr(operation, &argument.literal).map(ToTokens::into_token_stream))
          .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::Regular {
          binding,
          kind,
          function: function.into_token_stream(),
          arguments,
        })
      }
    }
  }
}

impl ToTokens for DependencyStep {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let ts = match self {
      Self::Api {
        binding,
        kind,
        function,
        call,
      } => {
        let response = call.response();
        let ty = kind.rust_type();
        let extractor = kind.extractor();
        let message = format!(
          "Return value of \"{function}\" is missing or not of type {}",
          kind.description()
        );

        quote! {
          #call
          check_api_response(&#response)?;
          let Some(#binding): Option<#ty> = #response
            .get("response")
            .and_then(|body| body.get("return_value"))
            #extractor
          else {
            return Err(OperationError::bridge_protocol(#message));
          };
        }
      }
      Self::Regular {
        binding,
        kind,
        function,
        arguments,
      } => {
        let ty = kind.rust_type();
        quote! {
          let #binding: #ty = #function(#(#arguments),*);
        }
      }
    };

    tokens.extend(ts);
  }
}
