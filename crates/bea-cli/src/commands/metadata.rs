/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

use super::{output, parse_dataset, parse_key_val};
use crate::config::Config;
use anyhow::{Context, Result};
use bea_client::BeaClient;
use bea_core::Dataset;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum MetadataCommands {
  /// List every dataset the BEA publishes
  Datasets,

  /// List the parameters a dataset accepts
  Parameters {
    /// Dataset name, e.g. NIPA or Regional
    #[arg(value_parser = parse_dataset)]
    dataset: Dataset,
  },

  /// List the values a parameter may take
  Values {
    /// Dataset name
    #[arg(value_parser = parse_dataset)]
    dataset: Dataset,

    /// Parameter name, e.g. TableName
    parameter: String,

    /// Narrow the values by other parameters (KEY=VALUE, repeatable)
    #[arg(short, long = "filter", value_parser = parse_key_val)]
    filters: Vec<(String, String)>,
  },
}

pub async fn execute(cmd: MetadataCommands, config: Config) -> Result<()> {
  let pretty = config.pretty;
  let client = BeaClient::new(config.api_config).context("Failed to create BEA client")?;
  let metadata = client.metadata();

  let response = match cmd {
    MetadataCommands::Datasets => metadata.dataset_list().await?,
    MetadataCommands::Parameters { dataset } => {
      info!("Fetching parameter list for {}", dataset);
      metadata.parameter_list(dataset).await?
    }
    MetadataCommands::Values { dataset, parameter, filters } if filters.is_empty() => {
      info!("Fetching values of {} in {}", parameter, dataset);
      metadata.parameter_values(dataset, &parameter).await?
    }
    MetadataCommands::Values { dataset, parameter, filters } => {
      info!("Fetching values of {} in {} with {} filter(s)", parameter, dataset, filters.len());
      let filters: Vec<(&str, &str)> =
        filters.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
      metadata.parameter_values_filtered(dataset, &parameter, &filters).await?
    }
  };

  output::print(&response, pretty)
}
