use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// The `check_api_response` helper shared by every handler of one generated unit.
///
/// Accepts `api_call` responses, turns `api_error`, `api_error_optional` and `error`
/// into `BridgeApplication` errors carrying the remote message, and everything else
/// into `BridgeProtocol` errors.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ResponseCheckFragment;

impl ToTokens for ResponseCheckFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    tokens.extend(quote! {
      fn check_api_response(response: &Value) -> Result<(), OperationError> {
        let response_type = response.get("response_type");
        if response_type.and_then(Value::as_str) == Some("api_call") {
          return Ok(());
        }

        let (Some(response_type), Some(body)) = (response_type, response.get("response")) else {
          return Err(OperationError::bridge_protocol("Got invalid response from the JSON bridge"));
        };

        match response_type.as_str() {
          Some("api_error" | "api_error_optional" | "error") => Err(OperationError::bridge_application(
            body.get("error_message").and_then(Value::as_str).unwrap_or_default(),
          )),
          _ => Err(OperationError::bridge_protocol("Generic API error encountered")),
        }
      }
    });
  }
}
