//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Operation dispatcher for 6 operation(s)
//! Source: fixtures/schemas
//! Generated by `opgen` 0.1.0

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::needless_pass_by_ref_mut)]
#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_variables)]
use opgen_support::OperationError;
use serde_json::{Value, json};
fn check_api_response(response: &Value) -> Result<(), OperationError> {
    let response_type = response.get("response_type");
    if response_type.and_then(Value::as_str) == Some("api_call") {
        return Ok(());
    }
    let (Some(response_type), Some(body)) = (response_type, response.get("response")) else {
        return Err(
            OperationError::bridge_protocol("Got invalid response from the JSON bridge"),
        );
    };
    match response_type.as_str() {
        Some("api_error" | "api_error_optional" | "error") => {
            Err(
                OperationError::bridge_application(
                    body.get("error_message").and_then(Value::as_str).unwrap_or_default(),
                ),
            )
        }
        _ => Err(OperationError::bridge_protocol("Generic API error encountered")),
    }
}
/// Handles the `ping` operation.
pub fn handle_ping_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    if msg.get("parameter").is_some() {
        return Err(
            OperationError::request_validation(
                "Operation \"ping\" does not take any parameter",
            ),
        );
    }
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" : "ping" } }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Handles the `getLocalUserName` operation.
pub fn handle_get_local_user_name_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    if msg.get("parameter").is_some() {
        return Err(
            OperationError::request_validation(
                "Operation \"getLocalUserName\" does not take any parameter",
            ),
        );
    }
    let query1 = json!(
        { "message_type" : "api_call", "message" : { "function" :
        "getActiveServerConnection" } }
    );
    let response1 = execute_query(&query1);
    check_api_response(&response1)?;
    let Some(connection): Option<i64> = response1
        .get("response")
        .and_then(|body| body.get("return_value"))
        .and_then(Value::as_i64) else {
        return Err(
            OperationError::bridge_protocol(
                "Return value of \"getActiveServerConnection\" is missing or not of type integer",
            ),
        );
    };
    let query2 = json!(
        { "message_type" : "api_call", "message" : { "function" : "getLocalUserID",
        "parameter" : { "connection" : connection } } }
    );
    let response2 = execute_query(&query2);
    check_api_response(&response2)?;
    let Some(userID): Option<u64> = response2
        .get("response")
        .and_then(|body| body.get("return_value"))
        .and_then(Value::as_u64) else {
        return Err(
            OperationError::bridge_protocol(
                "Return value of \"getLocalUserID\" is missing or not of type unsigned integer",
            ),
        );
    };
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" : "getUserName",
        "parameter" : { "connection" : connection, "userID" : userID } } }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Handles the `muteUser` operation.
pub fn handle_mute_user_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    let Some(operation_params) = msg.get("parameter").and_then(Value::as_object) else {
        return Err(
            OperationError::request_validation(
                "Operation \"muteUser\" requires a \"parameter\" object",
            ),
        );
    };
    if operation_params.len() != 2 {
        return Err(
            OperationError::request_validation(
                format!(
                    "Operation \"muteUser\" expects 2 parameter, but was provided with {}",
                    operation_params.len()
                ),
            ),
        );
    }
    let Some(userName): Option<String> = operation_params
        .get("userName")
        .and_then(Value::as_str)
        .map(str::to_owned) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"userName\" of operation \"muteUser\" is missing or not of type string",
            ),
        );
    };
    let Some(muted): Option<bool> = operation_params
        .get("muted")
        .and_then(Value::as_bool) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"muted\" of operation \"muteUser\" is missing or not of type boolean",
            ),
        );
    };
    let query1 = json!(
        { "message_type" : "api_call", "message" : { "function" :
        "getActiveServerConnection" } }
    );
    let response1 = execute_query(&query1);
    check_api_response(&response1)?;
    let Some(connection): Option<i64> = response1
        .get("response")
        .and_then(|body| body.get("return_value"))
        .and_then(Value::as_i64) else {
        return Err(
            OperationError::bridge_protocol(
                "Return value of \"getActiveServerConnection\" is missing or not of type integer",
            ),
        );
    };
    let query2 = json!(
        { "message_type" : "api_call", "message" : { "function" : "findUserByName",
        "parameter" : { "connection" : connection, "userName" : userName } } }
    );
    let response2 = execute_query(&query2);
    check_api_response(&response2)?;
    let Some(userID): Option<u64> = response2
        .get("response")
        .and_then(|body| body.get("return_value"))
        .and_then(Value::as_u64) else {
        return Err(
            OperationError::bridge_protocol(
                "Return value of \"findUserByName\" is missing or not of type unsigned integer",
            ),
        );
    };
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" :
        "requestLocalUserMute", "parameter" : { "connection" : connection, "userID" :
        userID, "muted" : muted } } }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Handles the `setVolume` operation.
pub fn handle_set_volume_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    let Some(operation_params) = msg.get("parameter").and_then(Value::as_object) else {
        return Err(
            OperationError::request_validation(
                "Operation \"setVolume\" requires a \"parameter\" object",
            ),
        );
    };
    if operation_params.len() != 1 {
        return Err(
            OperationError::request_validation(
                format!(
                    "Operation \"setVolume\" expects 1 parameter, but was provided with {}",
                    operation_params.len()
                ),
            ),
        );
    }
    let Some(level): Option<f64> = operation_params
        .get("level")
        .filter(|value| value.is_f64())
        .and_then(Value::as_f64) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"level\" of operation \"setVolume\" is missing or not of type float",
            ),
        );
    };
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" : "setLocalVolume",
        "parameter" : { "level" : level, "persist" : "" } } }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Handles the `setUserPosition` operation.
pub fn handle_set_user_position_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    let Some(operation_params) = msg.get("parameter").and_then(Value::as_object) else {
        return Err(
            OperationError::request_validation(
                "Operation \"setUserPosition\" requires a \"parameter\" object",
            ),
        );
    };
    if operation_params.len() != 3 {
        return Err(
            OperationError::request_validation(
                format!(
                    "Operation \"setUserPosition\" expects 3 parameter, but was provided with {}",
                    operation_params.len()
                ),
            ),
        );
    }
    let Some(userID): Option<u64> = operation_params
        .get("userID")
        .and_then(Value::as_u64) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"userID\" of operation \"setUserPosition\" is missing or not of type unsigned integer",
            ),
        );
    };
    let Some(x): Option<f64> = operation_params.get("x").and_then(Value::as_f64) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"x\" of operation \"setUserPosition\" is missing or not of type number",
            ),
        );
    };
    let Some(y): Option<f64> = operation_params.get("y").and_then(Value::as_f64) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"y\" of operation \"setUserPosition\" is missing or not of type number",
            ),
        );
    };
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" :
        "setPositionalAudio", "parameter" : { "userID" : userID, "x" : x, "y" : y } }
        }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Handles the `joinChannel` operation.
pub fn handle_join_channel_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    let Some(operation_params) = msg.get("parameter").and_then(Value::as_object) else {
        return Err(
            OperationError::request_validation(
                "Operation \"joinChannel\" requires a \"parameter\" object",
            ),
        );
    };
    if operation_params.len() != 2 {
        return Err(
            OperationError::request_validation(
                format!(
                    "Operation \"joinChannel\" expects 2 parameter, but was provided with {}",
                    operation_params.len()
                ),
            ),
        );
    }
    let Some(channelID): Option<u64> = operation_params
        .get("channelID")
        .and_then(Value::as_u64) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"channelID\" of operation \"joinChannel\" is missing or not of type unsigned integer",
            ),
        );
    };
    let Some(password): Option<String> = operation_params
        .get("password")
        .and_then(Value::as_str)
        .map(str::to_owned) else {
        return Err(
            OperationError::request_validation(
                "Parameter \"password\" of operation \"joinChannel\" is missing or not of type string",
            ),
        );
    };
    let query1 = json!(
        { "message_type" : "api_call", "message" : { "function" :
        "getActiveServerConnection" } }
    );
    let response1 = execute_query(&query1);
    check_api_response(&response1)?;
    let Some(connection): Option<i64> = response1
        .get("response")
        .and_then(|body| body.get("return_value"))
        .and_then(Value::as_i64) else {
        return Err(
            OperationError::bridge_protocol(
                "Return value of \"getActiveServerConnection\" is missing or not of type integer",
            ),
        );
    };
    let operation_query = json!(
        { "message_type" : "api_call", "message" : { "function" : "requestUserMove",
        "parameter" : { "connection" : connection, "channelID" : channelID, "password"
        : password.as_str(), "silent" : "" } } }
    );
    let result = execute_query(&operation_query);
    Ok(result)
}
/// Every operation `handle_operation` can route, in dispatch order.
pub const OPERATION_NAMES: &[&str] = &[
    "ping",
    "getLocalUserName",
    "muteUser",
    "setVolume",
    "setUserPosition",
    "joinChannel",
];
/// Routes a request to the handler named by its `operation` field.
pub fn handle_operation<F>(
    msg: &Value,
    execute_query: &mut F,
) -> Result<Value, OperationError>
where
    F: FnMut(&Value) -> Value,
{
    let Some(operation) = msg.get("operation").and_then(Value::as_str) else {
        return Err(
            OperationError::request_validation(
                "Missing \"operation\" field (required to be of type string)",
            ),
        );
    };
    match operation {
        "ping" => handle_ping_operation(msg, execute_query),
        "getLocalUserName" => handle_get_local_user_name_operation(msg, execute_query),
        "muteUser" => handle_mute_user_operation(msg, execute_query),
        "setVolume" => handle_set_volume_operation(msg, execute_query),
        "setUserPosition" => handle_set_user_position_operation(msg, execute_query),
        "joinChannel" => handle_join_channel_operation(msg, execute_query),
        unknown => Err(OperationError::Dispatch(unknown.to_string())),
    }
}
