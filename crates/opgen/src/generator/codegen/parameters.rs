use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, format_ident, quote};

use crate::generator::model::ParameterSpec;

/// Validates the request's `parameter` object and binds each declared parameter.
///
/// The object must hold exactly as many entries as there are declared parameters.
/// Without declared parameters the request must not carry a `parameter` field at all.
#[derive(Clone, Debug)]
pub(crate) struct ParameterValidationFragment {
  operation: String,
  parameters: Vec<ParameterSpec>,
}

impl ParameterValidationFragment {
  pub(crate) fn new(operation: &str, parameters: &[ParameterSpec]) -> Self {
    Self {
      operation: operation.to_string(),
      parameters: parameters.to_vec(),
    }
  }

  fn no_parameters(&self) -> TokenStream {
    let message = format!("Operation \"{}\" does not take any parameter", self.operation);

    quote! {
      if msg.get("parameter").is_some() {
        return Err(OperationError::request_validation(#message));
      }
    }
  }

  fn extract(&self, parameter: &ParameterSpec) -> TokenStream {
    let key = &parameter.name;
    let binding = format_ident!("{}", parameter.name);
    let ty = parameter.kind.rust_type();
    let extractor = parameter.kind.extractor();
    let message = format!(
      "Parameter \"{}\" of operation \"{}\" is missing or not of type {}",
      parameter.name,
      self.operation,
      parameter.kind.description()
    );

    quote! {
      let Some(#binding): Option<#ty> = operation_params.get(#key) #extractor else {
        return Err(OperationError::request_validation(#message));
      };
    }
  }
}

impl ToTokens for ParameterValidationFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    if self.parameters.is_empty() {
      tokens.extend(self.no_parameters());
      return;
    }

    let count = Literal::usize_unsuffixed(self.parameters.len());
    let missing_message = format!("Operation \"{}\" requires a \"parameter\" object", self.operation);
    let arity_message = format!(
      "Operation \"{}\" expects {} parameter, but was provided with {{}}",
      self.operation.replace('{', "{{").replace('}', "}}"),
      self.parameters.len()
    );
    let extractions = self.parameters.iter().map(|parameter| self.extract(parameter));

    tokens.extend(quote! {
      let Some(operation_params) = msg.get("parameter").and_then(Value::as_object) else {
        return Err(OperationError::request_validation(#missing_message));
      };

      if operation_params.len() != #count {
        return Err(OperationError::request_validation(format!(#arity_message, operation_params.len())));
      }

      #(#extractions)*
    });
  }
}
