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
use bea_client::{BeaClient, Params, Selection};
use bea_core::Dataset;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct DataCommand {
  /// Dataset name, e.g. NIPA
  #[arg(value_parser = parse_dataset)]
  dataset: Dataset,

  /// Query parameter as KEY=VALUE (repeatable), sent unchanged
  #[arg(short, long = "param", value_parser = parse_key_val)]
  params: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct RegionalCommand {
  /// Table name, e.g. CAINC1
  #[arg(short, long)]
  table: String,

  /// Line code within the table
  #[arg(short, long)]
  line_code: String,

  /// FIPS codes, comma separated, or STATE / COUNTY / MSA
  #[arg(short, long, default_value = "ALL")]
  geo_fips: String,

  /// Years, comma separated, or LAST5 / LAST10
  #[arg(short, long, default_value = "ALL")]
  year: String,
}

pub async fn execute(cmd: DataCommand, config: Config) -> Result<()> {
  let pretty = config.pretty;
  let client = BeaClient::new(config.api_config).context("Failed to create BEA client")?;

  info!("Requesting {} with {} parameter(s)", cmd.dataset, cmd.params.len());
  let params: Params = cmd.params.into_iter().collect();
  let response = client.get_data(cmd.dataset, params).await?;

  output::print(&response, pretty)
}

pub async fn execute_regional(cmd: RegionalCommand, config: Config) -> Result<()> {
  let pretty = config.pretty;
  let client = BeaClient::new(config.api_config).context("Failed to create BEA client")?;

  info!("Requesting regional table {} line {}", cmd.table, cmd.line_code);
  let response = client
    .regional()
    .regional(cmd.table, cmd.line_code, Selection::from(cmd.geo_fips), Selection::from(cmd.year))
    .await?;

  output::print(&response, pretty)
}
