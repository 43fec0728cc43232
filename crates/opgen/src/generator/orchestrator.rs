//! Orchestration for the schema to dispatcher generation pipeline.
//!
//! The orchestrator takes an already loaded, ordered operation list and turns it into
//! one formatted Rust source unit.
//!
//! ## Usage
//!
//! ```ignore
//! use opgen::generator::{codegen::CodegenConfig, loader, orchestrator::Orchestrator};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let loaded = loader::load_directory("operations".as_ref()).await?;
//! let orchestrator = Orchestrator::new(loaded.operations, CodegenConfig::default());
//! let output = orchestrator.generate_with_header("operations")?;
//! std::fs::write("handle_operation.rs", output.code)?;
//! # Ok(())
//! # }
//! ```

use super::{
  codegen::{self, CodegenConfig},
  errors::GenerationError,
  model::{FunctionCallSpec, OperationSpec},
};

/// Runs the emitters over a loaded operation set.
#[derive(Debug)]
pub struct Orchestrator {
  operations: Vec<OperationSpec>,
  config: CodegenConfig,
}

/// Statistics about the code generation process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Number of handlers emitted
  pub operations_generated: usize,
  /// Request parameters validated across all handlers
  pub parameters_validated: usize,
  /// Dependencies resolved across all handlers
  pub dependencies_resolved: usize,
  /// Round trips through the query-execution callback, execute calls included
  pub api_calls_generated: usize,
  /// Direct in-process calls
  pub regular_calls_generated: usize,
}

#[derive(Debug)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(operations: Vec<OperationSpec>, config: CodegenConfig) -> Self {
    Self { operations, config }
  }

  pub fn operations(&self) -> &[OperationSpec] {
    &self.operations
  }

  /// Generates the formatted dispatch unit without a file header.
  ///
  /// # Errors
  ///
  /// Returns an error if any operation cannot be emitted (for example a `regular`
  /// execute call or an argument literal that is not a Rust expression). No code is
  /// produced in that case.
  pub fn generate(&self) -> Result<GeneratedOutput, GenerationError> {
    let tokens = codegen::generate(&self.operations, &self.config)?;
    let code = codegen::format_source(tokens)?;

    Ok(GeneratedOutput {
      code,
      stats: self.stats(),
    })
  }

  /// Generates the dispatch unit with the auto-generated file header.
  ///
  /// # Errors
  ///
  /// Returns the same errors as `generate()`.
  pub fn generate_with_header(&self, source_path: &str) -> Result<GeneratedOutput, GenerationError> {
    let GeneratedOutput { code, stats } = self.generate()?;
    let code = codegen::with_header(&code, self.operations.len(), source_path, env!("CARGO_PKG_VERSION"));
    Ok(GeneratedOutput { code, stats })
  }

  fn stats(&self) -> GenerationStats {
    let mut stats = GenerationStats {
      operations_generated: self.operations.len(),
      ..GenerationStats::default()
    };

    for operation in &self.operations {
      stats.parameters_validated += operation.parameters.len();
      stats.dependencies_resolved += operation.dependencies.len();
      stats.api_calls_generated += operation.api_call_count();
      stats.regular_calls_generated += operation
        .dependencies
        .iter()
        .filter(|dependency| matches!(dependency.call, FunctionCallSpec::Regular { .. }))
        .count();
    }

    stats
  }
}
