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

//! Dataset Explorer Example
//!
//! This example demonstrates how to use bea-client to:
//! - List every dataset the BEA publishes
//! - Inspect the parameters of one dataset
//! - Pull GDP for one industry
//! - Read regional personal income rows as numbers
//!
//! Needs `BEA_API_KEY` in the environment or in `.env`.

use bea_client::models::DataTable;
use bea_client::{BeaClient, Config, Dataset, Error, Frequency, Selection};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration. Make sure BEA_API_KEY is set.");
    e
  })?;
  let client = BeaClient::new(config)?;
  println!("{:?}", client);

  println!("\n=== Datasets ===");
  for dataset in client.metadata().datasets().await? {
    println!("{:<25} {}", dataset.dataset_name, dataset.dataset_description);
  }

  println!("\n=== Regional parameters ===");
  for parameter in client.metadata().parameters(Dataset::Regional).await? {
    println!(
      "{:<12} {:<8} required={} multiple={}",
      parameter.parameter_name,
      parameter.parameter_data_type,
      parameter.is_required(),
      parameter.accepts_multiple()
    );
  }

  println!("\n=== GDP, finance and insurance (52), annual ===");
  let gdp = client
    .industry()
    .gdp_by_industry(Selection::All, Frequency::Annual, vec!["2019", "2018"], "52")
    .await?;
  println!("{}", serde_json::to_string_pretty(&gdp.as_json())?);

  println!("\n=== Personal income by state ===");
  match client.regional().regional("CAINC1", 1u32, "STATE", "LAST5").await {
    Ok(response) => {
      let results = response.results().cloned().unwrap_or_default();
      let table: DataTable = serde_json::from_value(results)?;
      for row in table.data.iter().take(10) {
        println!(
          "{:<20} {:<6} {:>20}",
          row.field("GeoName").unwrap_or("?"),
          row.time_period.as_deref().unwrap_or("?"),
          row.scaled_value().map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string())
        );
      }
    }
    Err(Error::RateLimit { description, retry_after }) => {
      eprintln!("Throttled by the BEA: {} (retry after {:?}s)", description, retry_after);
    }
    Err(e) => return Err(e.into()),
  }

  Ok(())
}
