use quote::{ToTokens, format_ident};

use super::{argument, assert_contains, code};
use crate::generator::{
  codegen::api_call::{ApiCallFragment, literal_expr},
  errors::GenerationError,
  model::{ArgumentLiteral, ArgumentSpec},
};

#[test]
fn test_literal_expr_normalization() {
  let cases = [
    (ArgumentLiteral::Empty, r#""""#),
    (ArgumentLiteral::expression(""), r#""""#),
    (ArgumentLiteral::Boolean(true), "true"),
    (ArgumentLiteral::Boolean(false), "false"),
    (ArgumentLiteral::expression("42"), "42"),
    (ArgumentLiteral::expression("-1.5"), "-1.5"),
    (ArgumentLiteral::expression(r#""text""#), r#""text""#),
    (ArgumentLiteral::expression("userName"), "userName"),
    (ArgumentLiteral::expression("userName.len()"), "userName.len()"),
  ];

  for (literal, expected) in cases {
    let expr = literal_expr("op", &literal).unwrap();
    assert_eq!(
      code(expr.to_token_stream()),
      super::compact(expected),
      "literal: {literal:?}"
    );
  }
}

#[test]
fn test_literal_expr_rejects_invalid_expression() {
  let Err(err) = literal_expr("muteUser", &ArgumentLiteral::expression("1 +")) else {
    panic!("expected an invalid expression error");
  };
  assert!(
    matches!(
      &err,
      GenerationError::InvalidExpression { operation, text, expected: "expression" }
        if operation == "muteUser" && text == "1 +"
    ),
    "unexpected error: {err:?}"
  );
}

#[test]
fn test_envelope_without_arguments_omits_parameter() {
  let fragment = ApiCallFragment::new(
    "ping",
    "ping",
    &[],
    format_ident!("operation_query"),
    format_ident!("result"),
  )
  .unwrap();
  let code = code(&fragment);

  assert_contains(
    &code,
    r#"let operation_query = json!({
      "message_type": "api_call",
      "message": { "function": "ping" }
    });
    let result = execute_query(&operation_query);"#,
  );
  assert!(!code.contains("\"parameter\""), "got: {code}");
}

#[test]
fn test_envelope_with_arguments_keeps_order() {
  let fragment = ApiCallFragment::new(
    "muteUser",
    "requestLocalMute",
    &[
      argument("userID", "userID"),
      ArgumentSpec::new("muted", ArgumentLiteral::Boolean(false)),
      ArgumentSpec::new("reason", ArgumentLiteral::Empty),
    ],
    format_ident!("query1"),
    format_ident!("response1"),
  )
  .unwrap();
  let code = code(&fragment);

  assert_contains(
    &code,
    r#""message": {
      "function": "requestLocalMute",
      "parameter": { "userID": userID, "muted": false, "reason": "" }
    }"#,
  );
  assert_contains(&code, "let response1 = execute_query(&query1);");
  assert_eq!(fragment.response(), &format_ident!("response1"));
}
