use std::path::PathBuf;

use crate::generator::{
  codegen::{CodegenConfig, Visibility},
  errors::GenerationError,
  kinds::ValueKind,
  loader::load_directory,
  model::{DependencySpec, ExecuteSpec, FunctionCallSpec, OperationSpec},
  orchestrator::{GenerationStats, Orchestrator},
};

async fn fixture_orchestrator(config: CodegenConfig) -> Orchestrator {
  let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/schemas");
  let loaded = load_directory(&dir).await.unwrap();
  Orchestrator::new(loaded.operations, config)
}

fn ping() -> OperationSpec {
  OperationSpec::builder()
    .name("ping")
    .execute(ExecuteSpec {
      call: FunctionCallSpec::api("ping", vec![]),
    })
    .build()
}

#[tokio::test]
async fn test_generate_fixture_operations() {
  let orchestrator = fixture_orchestrator(CodegenConfig::default()).await;
  assert_eq!(orchestrator.operations().len(), 6);

  let output = orchestrator.generate().unwrap();
  for handler in [
    "pub fn handle_ping_operation<F>(",
    "pub fn handle_get_local_user_name_operation<F>(",
    "pub fn handle_mute_user_operation<F>(",
    "pub fn handle_set_volume_operation<F>(",
    "pub fn handle_set_user_position_operation<F>(",
    "pub fn handle_join_channel_operation<F>(",
    "pub fn handle_operation<F>(",
  ] {
    assert!(output.code.contains(handler), "missing {handler} in:\n{}", output.code);
  }

  let routes = [
    "ping",
    "getLocalUserName",
    "muteUser",
    "setVolume",
    "setUserPosition",
    "joinChannel",
  ]
    .iter()
    .map(|name| output.code.find(&format!("\"{name}\" => ")).unwrap())
    .collect::<Vec<_>>();
  assert!(routes.is_sorted(), "routes out of load order: {routes:?}");
}

#[tokio::test]
async fn test_generate_stats() {
  let orchestrator = fixture_orchestrator(CodegenConfig::default()).await;
  let output = orchestrator.generate().unwrap();

  assert_eq!(
    output.stats,
    GenerationStats {
      operations_generated: 6,
      parameters_validated: 8,
      dependencies_resolved: 5,
      api_calls_generated: 11,
      regular_calls_generated: 0,
    }
  );
}

#[tokio::test]
async fn test_generate_is_idempotent() {
  let orchestrator = fixture_orchestrator(CodegenConfig::default()).await;
  let first = orchestrator.generate_with_header("fixtures/schemas").unwrap();
  let second = orchestrator.generate_with_header("fixtures/schemas").unwrap();

  assert_eq!(first.code, second.code);
}

#[tokio::test]
async fn test_checked_in_fixture_matches_generator() {
  let orchestrator = fixture_orchestrator(CodegenConfig::default()).await;
  let output = orchestrator.generate_with_header("fixtures/schemas").unwrap();
  let fixture = include_str!("../../../fixtures/generated_operations.rs");

  // Layout-insensitive: both sides are reformatted from their syntax trees.
  let normalize = |source: &str| prettyplease::unparse(&syn::parse_file(source).unwrap());
  assert_eq!(
    normalize(&output.code),
    normalize(fixture),
    "fixtures/generated_operations.rs is stale, regenerate it with `opgen generate -i fixtures/schemas`"
  );
}

#[tokio::test]
async fn test_generated_code_reparses() {
  let config = CodegenConfig::builder()
    .visibility(Visibility::Crate)
    .validate_execute_response(true)
    .build();
  let orchestrator = fixture_orchestrator(config).await;
  let output = orchestrator.generate_with_header("fixtures/schemas").unwrap();

  syn::parse_file(&output.code).unwrap();
  assert!(output.code.contains("pub(crate) fn handle_operation<F>("));
  assert_eq!(output.code.matches("check_api_response(&result)?;").count(), 6);
}

#[test]
fn test_generate_with_header() {
  let orchestrator = Orchestrator::new(vec![ping()], CodegenConfig::default());
  let output = orchestrator.generate_with_header("/path/to/operations").unwrap();

  assert!(output.code.starts_with("//! AUTO-GENERATED CODE - DO NOT EDIT!\n"));
  assert!(output.code.contains("//! Operation dispatcher for 1 operation(s)"));
  assert!(output.code.contains("//! Source: /path/to/operations"));
  assert!(output.code.contains(&format!("//! Generated by `opgen` {}", env!("CARGO_PKG_VERSION"))));
  assert!(output.code.contains("#![allow(clippy::missing_errors_doc)]"));
}

#[test]
fn test_regular_calls_counted() {
  let operation = OperationSpec::builder()
    .name("stampedPing")
    .dependencies(vec![
      DependencySpec::new("now", ValueKind::Number, FunctionCallSpec::regular("current_time", vec![])),
      DependencySpec::new("connection", ValueKind::Integer, FunctionCallSpec::api("getActiveServerConnection", vec![])),
    ])
    .execute(ExecuteSpec {
      call: FunctionCallSpec::api("ping", vec![]),
    })
    .build();

  let output = Orchestrator::new(vec![operation, ping()], CodegenConfig::default())
    .generate()
    .unwrap();
  assert_eq!(output.stats.regular_calls_generated, 1);
  assert_eq!(output.stats.api_calls_generated, 3);
  assert_eq!(output.stats.dependencies_resolved, 2);
}

#[test]
fn test_failed_generation_produces_no_output() {
  let local_only = OperationSpec::builder()
    .name("localOnly")
    .execute(ExecuteSpec {
      call: FunctionCallSpec::regular("do_it", vec![]),
    })
    .build();

  let err = Orchestrator::new(vec![ping(), local_only], CodegenConfig::default())
    .generate()
    .unwrap_err();
  assert!(matches!(err, GenerationError::Unsupported { .. }));
}
