use super::{assert_contains, code, move_window, ping};
use crate::generator::codegen::{CodegenConfig, Visibility, dispatcher::DispatcherFragment, handler::HandlerFragment};

fn handlers(config: &CodegenConfig) -> Vec<HandlerFragment> {
  [ping(), move_window()]
    .iter()
    .map(|operation| HandlerFragment::new(operation, config).unwrap())
    .collect()
}

#[test]
fn test_dispatcher_routes_in_load_order() {
  let config = CodegenConfig::default();
  let code = code(DispatcherFragment::new(&handlers(&config), config.visibility));

  assert_contains(&code, r#"pub const OPERATION_NAMES: &[&str] = &["ping", "moveWindow"];"#);
  assert_contains(
    &code,
    r#"match operation {
      "ping" => handle_ping_operation(msg, execute_query),
      "moveWindow" => handle_move_window_operation(msg, execute_query),
      unknown => Err(OperationError::Dispatch(unknown.to_string())),
    }"#,
  );
}

#[test]
fn test_dispatcher_requires_string_operation_field() {
  let config = CodegenConfig::default();
  let code = code(DispatcherFragment::new(&handlers(&config), config.visibility));

  assert_contains(
    &code,
    r#"let Some(operation) = msg.get("operation").and_then(Value::as_str) else {
      return Err(OperationError::request_validation("Missing \"operation\" field (required to be of type string)"));
    };"#,
  );
}

#[test]
fn test_empty_dispatcher_rejects_everything() {
  let code = code(DispatcherFragment::new(&[], Visibility::Crate));

  assert_contains(&code, "pub(crate) const OPERATION_NAMES: &[&str] = &[];");
  assert_contains(
    &code,
    "match operation { unknown => Err(OperationError::Dispatch(unknown.to_string())), }",
  );
}
