/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
use commands::{
  data::{DataCommand, RegionalCommand},
  metadata::MetadataCommands,
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "bea")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Ask the BEA for XML instead of JSON
  #[arg(long, global = true)]
  xml: bool,

  /// Print JSON on one line
  #[arg(long, global = true)]
  compact: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  #[command(flatten)]
  Metadata(MetadataCommands),
  /// Fetch any dataset with raw KEY=VALUE parameters
  Data(DataCommand),
  /// Fetch state, county or metro area statistics
  Regional(RegionalCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging; logs go to stderr so stdout stays valid JSON
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Load configuration
  let config = config::Config::from_env(cli.xml, cli.compact)?;

  // Execute command
  match cli.command {
    Commands::Metadata(cmd) => commands::metadata::execute(cmd, config).await?,
    Commands::Data(cmd) => commands::data::execute(cmd, config).await?,
    Commands::Regional(cmd) => commands::data::execute_regional(cmd, config).await?,
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use bea_core::Dataset;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_values_with_filters() {
    let cli = Cli::try_parse_from([
      "bea", "values", "regional", "LineCode", "--filter", "TableName=CAINC1", "--compact",
    ])
    .unwrap();

    assert!(cli.compact);
    match cli.command {
      Commands::Metadata(MetadataCommands::Values { dataset, parameter, filters }) => {
        assert_eq!(dataset, Dataset::Regional);
        assert_eq!(parameter, "LineCode");
        assert_eq!(filters, vec![("TableName".to_string(), "CAINC1".to_string())]);
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_parse_data_params() {
    let cli =
      Cli::try_parse_from(["bea", "data", "NIPA", "-p", "TableName=T10101", "-p", "Year=2020", "--xml"])
        .unwrap();
    assert!(cli.xml);
    assert!(matches!(cli.command, Commands::Data(_)));
  }

  #[test]
  fn test_unknown_dataset_is_rejected() {
    assert!(Cli::try_parse_from(["bea", "parameters", "Bitcoin"]).is_err());
  }

  #[test]
  fn test_regional_requires_table_and_line_code() {
    assert!(Cli::try_parse_from(["bea", "regional", "--table", "CAINC1"]).is_err());
    assert!(Cli::try_parse_from(["bea", "regional", "-t", "CAINC1", "-l", "1"]).is_ok());
  }
}
