#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod reserved;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let theme = colors::detect_theme(cli.theme);

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Operations { input_dir } => {
        let colors = Colors::new(colors::colors_enabled(cli.color, &std::io::stdout()), theme);
        ui::commands::list_operations(&input_dir, &colors).await?;
      }
    },
    Commands::Generate(command) => {
      let colors = Colors::new(colors::colors_enabled(cli.color, &std::io::stderr()), theme);
      let config = ui::commands::GenerateConfig::from_command(command)?;
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
