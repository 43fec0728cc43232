use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::Ident;

use super::{Visibility, handler::HandlerFragment};

/// The `handle_operation` entry point routing a request to its handler by name.
///
/// Names are matched in load order and the first match wins. Also emits
/// `OPERATION_NAMES` listing every routable operation in the same order.
#[derive(Clone, Debug)]
pub(crate) struct DispatcherFragment {
  vis: Visibility,
  routes: Vec<(String, Ident)>,
}

impl DispatcherFragment {
  pub(crate) fn new(handlers: &[HandlerFragment], vis: Visibility) -> Self {
    let routes = handlers
      .iter()
      .map(|handler| (handler.operation().to_string(), handler.name().clone()))
      .collect();

    Self { vis, routes }
  }
}

impl ToTokens for DispatcherFragment {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let vis = self.vis.to_tokens();
    let names = self.routes.iter().map(|(operation, _)| operation).collect::<Vec<_>>();
    let handlers = self.routes.iter().map(|(_, handler)| handler);

    tokens.extend(quote! {
      /// Every operation `handle_operation` can route, in dispatch order.
      #vis const OPERATION_NAMES: &[&str] = &[#(#names),*];

      /// Routes a request to the handler named by its `operation` field.
      #vis fn handle_operation<F>(msg: &Value, execute_query: &mut F) -> Result<Value, OperationError>
      where
        F: FnMut(&Value) -> Value,
      {
        let Some(operation) = msg.get("operation").and_then(Value::as_str) else {
          return Err(OperationError::request_validation(
            "Missing \"operation\" field (required to be of type string)"
          ));
        };

        match operation {
          #(#names => #handlers(msg, execute_query),)*
          unknown => Err(OperationError::Dispatch(unknown.to_string())),
        }
      }
    });
  }
}
