use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::{
    loader,
    model::{FunctionCallSpec, OperationSpec},
  },
  ui::{Colors, Role, colors::IntoComfyColor, term_width},
};

fn describe_parameters(operation: &OperationSpec) -> String {
  if operation.parameters.is_empty() {
    return "-".to_string();
  }
  operation
    .parameters
    .iter()
    .map(|parameter| format!("{}: {}", parameter.name, parameter.kind))
    .join(", ")
}

fn describe_call(call: &FunctionCallSpec) -> String {
  let arguments = call.arguments().iter().map(|argument| &argument.name).join(", ");
  format!("{}({arguments}) [{}]", call.name(), call.type_label())
}

fn describe_dependencies(operation: &OperationSpec) -> String {
  if operation.dependencies.is_empty() {
    return "-".to_string();
  }
  operation
    .dependencies
    .iter()
    .map(|dependency| format!("{} <- {}", dependency.result_name, dependency.call.name()))
    .join(", ")
}

pub async fn list_operations(input_dir: &Path, colors: &Colors) -> anyhow::Result<()> {
  let loaded = loader::load_directory(input_dir).await?;
  let color = |role| IntoComfyColor::into(colors.color(role));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["OPERATION", "PARAMETERS", "DEPENDS ON", "EXECUTES"] {
    row.add_cell(Cell::new(header).fg(color(Role::Label)));
  }
  table.set_header(row);

  for operation in &loaded.operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&operation.name)
        .fg(color(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(describe_parameters(operation)).fg(color(Role::Primary)));
    row.add_cell(Cell::new(describe_dependencies(operation)).fg(color(Role::Info)));
    row.add_cell(Cell::new(describe_call(&operation.execute.call)).fg(color(Role::Accent)));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::{
    kinds::ValueKind,
    model::{ArgumentLiteral, ArgumentSpec, DependencySpec, ExecuteSpec, ParameterSpec},
  };

  #[test]
  fn test_describe_operation() {
    let operation = OperationSpec::builder()
      .name("muteUser")
      .parameters(vec![
        ParameterSpec::new("userName", ValueKind::String),
        ParameterSpec::new("muted", ValueKind::Boolean),
      ])
      .dependencies(vec![DependencySpec::new(
        "userID",
        ValueKind::UnsignedInteger,
        FunctionCallSpec::api("findUserByName", vec![]),
      )])
      .execute(ExecuteSpec {
        call: FunctionCallSpec::api(
          "requestLocalMute",
          vec![
            ArgumentSpec::new("userID", ArgumentLiteral::expression("userID")),
            ArgumentSpec::new("muted", ArgumentLiteral::expression("muted")),
          ],
        ),
      })
      .build();

    assert_eq!(describe_parameters(&operation), "userName: string, muted: boolean");
    assert_eq!(describe_dependencies(&operation), "userID <- findUserByName");
    assert_eq!(
      describe_call(&operation.execute.call),
      "requestLocalMute(userID, muted) [api]"
    );
  }

  #[test]
  fn test_describe_empty_operation() {
    let operation = OperationSpec::builder()
      .name("ping")
      .execute(ExecuteSpec {
        call: FunctionCallSpec::api("ping", vec![]),
      })
      .build();

    assert_eq!(describe_parameters(&operation), "-");
    assert_eq!(describe_dependencies(&operation), "-");
    assert_eq!(describe_call(&operation.execute.call), "ping() [api]");
  }
}
