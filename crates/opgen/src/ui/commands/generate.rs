use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  generator::{
    codegen::{CodegenConfig, Visibility},
    loader::{self, LoadedSchemas},
    orchestrator::{GenerationStats, Orchestrator},
  },
  ui::{Colors, GenerateCommand, Role},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input_dir: Option<PathBuf>,
  pub output_file: Option<PathBuf>,
  pub visibility: Visibility,
  pub validate_execute_response: bool,
  pub imports: Vec<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input_dir,
      output_file,
      visibility,
      validate_execute_response,
      imports,
      verbose,
      quiet,
    } = command;

    let Some(visibility) = Visibility::parse(&visibility) else {
      anyhow::bail!("Invalid visibility '{visibility}': expected one of public, crate, file");
    };

    Ok(Self {
      input_dir,
      output_file,
      visibility,
      validate_execute_response,
      imports,
      verbose,
      quiet,
    })
  }

  fn codegen_config(&self) -> CodegenConfig {
    CodegenConfig::builder()
      .visibility(self.visibility)
      .validate_execute_response(self.validate_execute_response)
      .imports(self.imports.clone())
      .build()
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    let Some(output_file) = &self.output_file else {
      let mut stdout = tokio::io::stdout();
      stdout.write_all(code.as_bytes()).await?;
      stdout.flush().await?;
      return Ok(());
    };

    if let Some(parent) = output_file.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output_file, code).await?;
    Ok(())
  }
}

/// Progress output. Everything goes to stderr; stdout may carry the generated code.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.color(Role::Timestamp)),
        message.with(self.colors.color(Role::Primary))
      );
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose && !self.config.quiet {
      eprintln!("           {}", message.with(self.colors.color(Role::Info)));
    }
  }

  fn error(&self, message: &str) {
    eprintln!(
      "{} {}",
      "[ERROR]:".with(self.colors.color(Role::Error)),
      message.with(self.colors.color(Role::Primary))
    );
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "            {:<25} {}",
        label.with(self.colors.color(Role::Label)),
        value.with(self.colors.color(Role::Value))
      );
    }
  }

  fn log_loading(&self, input_dir: &Path) {
    self.info(&format!("Loading operation schemas from: {}", input_dir.display()));
  }

  fn log_documents(&self, loaded: &LoadedSchemas) {
    for path in &loaded.skipped {
      self.detail(&format!("Skipping \"{}\"", path.display()));
    }
    for path in &loaded.documents {
      self.detail(&format!("Loaded \"{}\"", path.display()));
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    self.stat("Operations generated:", stats.operations_generated.to_string());
    self.stat("Parameters validated:", stats.parameters_validated.to_string());
    self.stat("Dependencies resolved:", stats.dependencies_resolved.to_string());
    self.stat("", format!("{} API calls", stats.api_calls_generated));
    if stats.regular_calls_generated > 0 {
      self.stat("", format!("{} regular calls", stats.regular_calls_generated));
    }
  }

  fn log_writing(&self) {
    match &self.config.output_file {
      Some(path) => self.info(&format!("Writing to: {}", path.display())),
      None => self.info("Writing to: <stdout>"),
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!();
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.color(Role::Timestamp)),
        "Successfully generated operation dispatcher".with(self.colors.color(Role::Success))
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  let Some(input_dir) = &config.input_dir else {
    logger.error("No input directory given");
    return Ok(());
  };

  logger.log_loading(input_dir);
  let loaded = loader::load_directory(input_dir).await?;
  logger.log_documents(&loaded);

  let orchestrator = Orchestrator::new(loaded.operations, config.codegen_config());
  logger.info(&format!(
    "Generating handlers for {} operation(s) from {} document(s)...",
    orchestrator.operations().len(),
    loaded.documents.len()
  ));
  let output = orchestrator.generate_with_header(&input_dir.display().to_string())?;
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.code).await?;

  logger.log_success();
  Ok(())
}
