//! Turns schema documents into the ordered operation list the emitters consume.

use std::{
  collections::{HashMap, HashSet},
  fmt::Display,
  path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Deserialize;

use super::{
  errors::GenerationError,
  kinds::ValueKind,
  model::{ArgumentLiteral, ArgumentSpec, DependencySpec, ExecuteSpec, FunctionCallSpec, OperationSpec, ParameterSpec},
};
use crate::{
  reserved::{binding_name_conflict, to_handler_name},
  utils::schema::{DocumentLoader, SchemaDirectory},
};

#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
  operations: Option<Vec<RawOperation>>,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
  operation: Option<String>,
  parameter: Option<Vec<RawParameter>>,
  depends: Option<Vec<RawDependency>>,
  executes: Option<RawExecute>,
}

#[derive(Debug, Deserialize)]
struct RawParameter {
  name: Option<String>,
  #[serde(rename = "type")]
  kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
  name: Option<String>,
  #[serde(rename = "type")]
  kind: Option<String>,
  function: Option<RawFunction>,
}

#[derive(Debug, Deserialize)]
struct RawExecute {
  function: Option<RawFunction>,
}

#[derive(Debug, Deserialize)]
struct RawFunction {
  #[serde(rename = "type")]
  kind: Option<String>,
  name: Option<String>,
  parameter: Option<Vec<RawArgument>>,
}

#[derive(Debug, Deserialize)]
struct RawArgument {
  name: Option<String>,
  value: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
  Boolean(bool),
  Number(serde_json::Number),
  Text(String),
}

/// Falsy values (absent, `null`, `false`, zero, empty string) all become [`ArgumentLiteral::Empty`].
impl From<Option<RawValue>> for ArgumentLiteral {
  fn from(value: Option<RawValue>) -> Self {
    match value {
      None | Some(RawValue::Boolean(false)) => Self::Empty,
      Some(RawValue::Number(number)) if number.as_f64().is_some_and(|value| value == 0.0) => Self::Empty,
      Some(RawValue::Boolean(value)) => Self::Boolean(value),
      Some(RawValue::Number(number)) => Self::Expression(number.to_string()),
      Some(RawValue::Text(text)) => Self::expression(text),
    }
  }
}

/// Result of loading every schema document of an input directory.
#[derive(Debug)]
pub struct LoadedSchemas {
  pub operations: Vec<OperationSpec>,
  pub documents: Vec<PathBuf>,
  pub skipped: Vec<PathBuf>,
}

/// Loads all schema documents in `dir`, in file-name order.
pub async fn load_directory(dir: &Path) -> Result<LoadedSchemas, GenerationError> {
  let SchemaDirectory { documents, skipped } = SchemaDirectory::scan(dir).await?;

  let mut parsed = Vec::with_capacity(documents.len());
  for path in &documents {
    let loader = DocumentLoader::open(path).await?;
    parsed.push((loader.path().to_path_buf(), loader.parse::<RawDocument>()?));
  }

  Ok(LoadedSchemas {
    operations: load_operations(parsed)?,
    documents,
    skipped,
  })
}

/// Concatenates the operations of all documents, preserving document and entry order.
pub(crate) fn load_operations(documents: Vec<(PathBuf, RawDocument)>) -> Result<Vec<OperationSpec>, GenerationError> {
  let mut operations = Vec::new();
  let mut names = HashSet::new();
  let mut handlers: IndexMap<String, String> = IndexMap::new();

  for (document, raw) in documents {
    let entries = raw
      .operations
      .ok_or_else(|| GenerationError::schema(&document, "missing \"operations\" list"))?;

    for (index, entry) in entries.into_iter().enumerate() {
      let operation = convert_operation(&document, index, entry)?;

      if !names.insert(operation.name.clone()) {
        return Err(GenerationError::schema(
          &document,
          format!("operation \"{}\" is defined more than once", operation.name),
        ));
      }

      let handler = to_handler_name(&operation.name);
      if let Some(existing) = handlers.get(&handler) {
        return Err(GenerationError::schema(
          &document,
          format!(
            "operations \"{existing}\" and \"{}\" both map to handler `{handler}`",
            operation.name
          ),
        ));
      }
      handlers.insert(handler, operation.name.clone());

      operations.push(operation);
    }
  }

  Ok(operations)
}

fn convert_operation(document: &Path, index: usize, raw: RawOperation) -> Result<OperationSpec, GenerationError> {
  let Some(name) = raw.operation.filter(|name| !name.is_empty()) else {
    return Err(GenerationError::schema(
      document,
      format!("entry #{} is missing the \"operation\" name", index + 1),
    ));
  };

  let entry = EntryContext {
    document,
    operation: &name,
  };

  let parameters = raw
    .parameter
    .unwrap_or_default()
    .into_iter()
    .map(|parameter| entry.parameter(parameter))
    .collect::<Result<Vec<_>, _>>()?;

  let dependencies = raw
    .depends
    .unwrap_or_default()
    .into_iter()
    .map(|dependency| entry.dependency(dependency))
    .collect::<Result<Vec<_>, _>>()?;

  let executes = raw.executes.ok_or_else(|| entry.error("missing \"executes\""))?;
  let function = executes
    .function
    .ok_or_else(|| entry.error("\"executes\" is missing \"function\""))?;
  let execute = ExecuteSpec {
    call: entry.function(function, "executes")?,
  };

  entry.check_bindings(&parameters, &dependencies)?;

  Ok(
    OperationSpec::builder()
      .name(name.clone())
      .parameters(parameters)
      .dependencies(dependencies)
      .execute(execute)
      .build(),
  )
}

struct EntryContext<'a> {
  document: &'a Path,
  operation: &'a str,
}

impl EntryContext<'_> {
  fn error(&self, message: impl Display) -> GenerationError {
    GenerationError::schema(self.document, format!("operation \"{}\": {message}", self.operation))
  }

  fn kind(&self, owner: &str, token: Option<String>) -> Result<ValueKind, GenerationError> {
    let token = token.ok_or_else(|| self.error(format!("{owner} is missing \"type\"")))?;
    ValueKind::from_token(&token).map_err(|e| self.error(format!("{owner}: {e}")))
  }

  fn parameter(&self, raw: RawParameter) -> Result<ParameterSpec, GenerationError> {
    let name = raw.name.ok_or_else(|| self.error("parameter is missing \"name\""))?;
    let kind = self.kind(&format!("parameter \"{name}\""), raw.kind)?;
    Ok(ParameterSpec::new(name, kind))
  }

  fn dependency(&self, raw: RawDependency) -> Result<DependencySpec, GenerationError> {
    let name = raw.name.ok_or_else(|| self.error("dependency is missing \"name\""))?;
    let owner = format!("dependency \"{name}\"");
    let kind = self.kind(&owner, raw.kind)?;
    let function = raw
      .function
      .ok_or_else(|| self.error(format!("{owner} is missing \"function\"")))?;
    let call = self.function(function, &owner)?;
    Ok(DependencySpec::new(name, kind, call))
  }

  fn function(&self, raw: RawFunction, owner: &str) -> Result<FunctionCallSpec, GenerationError> {
    let name = raw
      .name
      .filter(|name| !name.is_empty())
      .ok_or_else(|| self.error(format!("{owner} function is missing \"name\"")))?;

    let mut seen = HashSet::new();
    let mut arguments = Vec::new();
    for argument in raw.parameter.unwrap_or_default() {
      let argument_name = argument
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| self.error(format!("argument of {owner} function \"{name}\" is missing \"name\"")))?;
      if !seen.insert(argument_name.clone()) {
        return Err(self.error(format!(
          "argument \"{argument_name}\" of {owner} function \"{name}\" is given more than once"
        )));
      }
      arguments.push(ArgumentSpec::new(argument_name, argument.value.into()));
    }

    match raw.kind.as_deref() {
      Some("api") => Ok(FunctionCallSpec::api(name, arguments)),
      Some("regular") => Ok(FunctionCallSpec::regular(name, arguments)),
      Some(other) => Err(self.error(format!(
        "{owner} function type \"{other}\" must be \"api\" or \"regular\""
      ))),
      None => Err(self.error(format!("{owner} function is missing \"type\""))),
    }
  }

  fn check_bindings(&self, parameters: &[ParameterSpec], dependencies: &[DependencySpec]) -> Result<(), GenerationError> {
    let bindings = parameters
      .iter()
      .map(|parameter| ("parameter", parameter.name.as_str()))
      .chain(
        dependencies
          .iter()
          .map(|dependency| ("dependency", dependency.result_name.as_str())),
      );

    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (role, name) in bindings {
      if let Some(reason) = binding_name_conflict(name) {
        return Err(self.error(format!("{role} name \"{name}\" {reason}")));
      }
      if let Some(previous) = seen.insert(name, role) {
        return Err(self.error(format!("{role} \"{name}\" collides with {previous} \"{name}\"")));
      }
    }

    Ok(())
  }
}
