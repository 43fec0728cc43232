mod api_call_tests;
mod dispatcher_tests;

use quote::ToTokens;

use crate::generator::{
  kinds::ValueKind,
  model::{ArgumentLiteral, ArgumentSpec, ExecuteSpec, FunctionCallSpec, OperationSpec, ParameterSpec},
};

/// Token text with all whitespace removed, so assertions don't depend on token spacing.
pub(super) fn compact(text: &str) -> String {
  text.split_whitespace().collect()
}

pub(super) fn code(tokens: impl ToTokens) -> String {
  compact(&tokens.into_token_stream().to_string())
}

pub(super) fn assert_contains(haystack: &str, needle: &str) {
  let needle = compact(needle);
  assert!(haystack.contains(&needle), "expected `{needle}` in:\n{haystack}");
}

pub(super) fn argument(name: &str, value: &str) -> ArgumentSpec {
  ArgumentSpec::new(name, ArgumentLiteral::expression(value))
}

pub(super) fn ping() -> OperationSpec {
  OperationSpec::builder()
    .name("ping")
    .execute(ExecuteSpec {
      call: FunctionCallSpec::api("ping", vec![]),
    })
    .build()
}

pub(super) fn move_window() -> OperationSpec {
  OperationSpec::builder()
    .name("moveWindow")
    .parameters(vec![
      ParameterSpec::new("x", ValueKind::Integer),
      ParameterSpec::new("y", ValueKind::Integer),
      ParameterSpec::new("animate", ValueKind::Boolean),
    ])
    .execute(ExecuteSpec {
      call: FunctionCallSpec::api(
        "setWindowPosition",
        vec![argument("x", "x"), argument("y", "y"), argument("animate", "animate")],
      ),
    })
    .build()
}
