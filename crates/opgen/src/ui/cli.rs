use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "opgen")]
#[command(author, version, about = "Operation schema to Rust dispatcher generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from operation schema documents
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate the operation handlers and dispatcher
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Directory containing the operation schema documents (yaml, yml or json)
  #[arg(short, long, value_name = "DIR")]
  pub input_dir: Option<PathBuf>,

  /// Path where the generated Rust code will be written (printed to stdout if omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output_file: Option<PathBuf>,

  /// Visibility of the generated handlers and dispatcher (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Also check the response of each operation's own API call before returning it
  #[arg(long, default_value_t = false)]
  pub validate_execute_response: bool,

  /// Add `use PATH;` to the generated code (repeatable), e.g. for regular functions
  #[arg(long = "import", value_name = "PATH")]
  pub imports: Vec<String>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the schema documents
  Operations {
    /// Directory containing the operation schema documents
    #[arg(short, long, value_name = "DIR")]
    input_dir: PathBuf,
  },
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_generate() {
    let cli = Cli::try_parse_from([
      "opgen",
      "generate",
      "-i",
      "operations",
      "-o",
      "src/handle_operation.rs",
      "--import",
      "crate::helpers::*",
      "--import",
      "crate::util::now",
      "--validate-execute-response",
    ])
    .unwrap();

    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.input_dir, Some(PathBuf::from("operations")));
    assert_eq!(command.output_file, Some(PathBuf::from("src/handle_operation.rs")));
    assert_eq!(command.imports, ["crate::helpers::*", "crate::util::now"]);
    assert!(command.validate_execute_response);
    assert_eq!(command.visibility, "public");
  }

  #[test]
  fn test_parse_generate_without_input_dir() {
    let cli = Cli::try_parse_from(["opgen", "generate"]).unwrap();
    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.input_dir, None);
    assert_eq!(command.output_file, None);
  }
}
