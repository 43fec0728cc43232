use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Expr, Ident};

use crate::generator::{
  errors::GenerationError,
  model::{ArgumentLiteral, ArgumentSpec},
};

/// Parses an argument literal into the expression embedded in the generated code.
///
/// Empty values become `""` and booleans the `true`/`false` keywords.
pub(crate) fn literal_expr(operation: &str, literal: &ArgumentLiteral) -> Result<Expr, GenerationError> {
  match literal {
    ArgumentLiteral::Empty => Ok(syn::parse_quote! { "" }),
    ArgumentLiteral::Boolean(value) => Ok(syn::parse_quote! { #value }),
    ArgumentLiteral::Expression(text) => syn::parse_str(text).map_err(|_| GenerationError::InvalidExpression {
      operation: operation.to_string(),
      text: text.clone(),
      expected: "expression",
    }),
  }
}

/// Issues one API call through the query-execution callback.
///
/// Binds the request envelope to `query` and the raw response to `response`.
#[derive(Clone, Debug)]
pub(crate) struct ApiCallFragment {
  function: String,
  arguments: Vec<(String, TokenStream)>,
  query: Ident,
  response: Ident,
}

impl ApiCallFragment {
  pub(crate) fn new(
    operation: &str,
    function: &str,
    arguments: &[ArgumentSpec],
    query: Ident,
    response: Ident,
  ) -> Result<Self, GenerationError> {
    let arguments = arguments
      .iter()
      .map(|argument| {
        let value = literal_expr(operation, &argument.literal)?;
        Ok((argument.name.clone(), value.into_token_stream()))
      })
      .collect::<Result<Vec<_>, GenerationError>>()?;

    Ok(Self {
      function: function.to_string(),
      arguments,
      query,
      response,
    })
  }

  pub(crate) fn response(&self) -> &Ident {
    &self.response
  }

  fn envelope(&self) -> TokenStream {
    let function = &self.function;

    if self.arguments.is_empty() {
      return quote! {
        json!({
          "message_type": "api_call",
          "message": {
            "function": #function
          }
        })
      };
    }

    let names = self.arguments.iter().map(|(name, _)| name);
    let values = self.arguments.iter().map(|(_, value)| value);

    quote! {
      json!({
        "message_type": "api_call",
        "message": {
          "function": #function,
          "parameter": {
            #(#names: #values),*
          }
        }
      })
    }
  }
}

impl ToTokens for ApiCallFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let query = &self.query;
    let response = &self.response;
    let envelope = self.envelope();

    tokens.extend(quote! {
      let #query = #envelope;
      let #response = execute_query(&#query);
    });
  }
}
