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

//! # bea-client
//!
//! A client for the US Bureau of Economic Analysis (BEA) data API.
//!
//! ## Features
//!
//! - **Thin**: each call builds the query, issues one GET and returns the
//!   document the server sent, unmodified
//! - **Async/Await**: built on reqwest and tokio
//! - **Checked locally**: required filters are validated before any network I/O
//! - **Typed views**: optional `bea-models` decoding of metadata and data rows
//! - **Configurable**: environment-based configuration via bea-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bea_client::{BeaClient, Config, Frequency, Selection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = BeaClient::new(config)?;
//!
//!     // Every dataset the API publishes
//!     let datasets = client.metadata().dataset_list().await?;
//!     println!("{:?}", datasets.results());
//!
//!     // GDP for finance and insurance, annual, 2018-2019
//!     let gdp = client
//!         .industry()
//!         .gdp_by_industry(Selection::All, Frequency::Annual, vec!["2019", "2018"], "52")
//!         .await?;
//!     println!("{:?}", gdp.as_json());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! The BEA allows 1000 calls, 30 errors and 200MB of data per minute per key.
//! The client does not throttle; when a limit is exceeded the server's answer
//! is returned as `Error::RateLimit`, including the `Retry-After` hint.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, bea_core::Error>`. Errors the BEA reports
//! (`Api`, `RateLimit`) are kept apart from local transport failures (`Http`,
//! `Status`, `Parse`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use bea_core::{limits, Config, Dataset, Error, Frequency, Method, Result, ResultFormat, Selection};
pub use bea_models as models;
pub use client::BeaClient;
pub use transport::{ApiResponse, Params};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  industry::IndustryEndpoints,
  international::{DirectInvestmentQuery, InternationalEndpoints, MneActivitiesQuery, ALL_COUNTRIES},
  metadata::MetadataEndpoints,
  national::NationalEndpoints,
  regional::RegionalEndpoints,
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.base_url, "https://apps.bea.gov/api/data/");
  }

  #[test]
  fn test_documented_limits() {
    assert_eq!(limits::CALLS_PER_MINUTE, 1000);
    assert_eq!(limits::ERRORS_PER_MINUTE, 30);
    assert_eq!(limits::DATA_MB_PER_MINUTE, 200);
  }
}
