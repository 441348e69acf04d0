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

//! The top-level client and its endpoint group accessors

use crate::endpoints::{
  industry::IndustryEndpoints, international::InternationalEndpoints, metadata::MetadataEndpoints,
  national::NationalEndpoints, regional::RegionalEndpoints,
};
use crate::transport::{set_param, ApiResponse, Params, Transport};
use bea_core::{param, Config, Dataset, Method, Result, ResultFormat};
use std::sync::Arc;
use tracing::instrument;

/// Main BEA API client
///
/// Provides access to every BEA dataset through organized endpoint groups.
/// Each call builds the query, issues exactly one GET and returns the document
/// the server sent. There is no retrying, throttling or caching; the server's
/// own limits (see [`bea_core::limits`]) surface as [`bea_core::Error::RateLimit`].
///
/// # Examples
///
/// ```rust,no_run
/// use bea_client::{BeaClient, Config, Dataset};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BeaClient::new(Config::from_env()?)?;
///
///     let datasets = client.metadata().dataset_list().await?;
///     println!("{:?}", datasets.results());
///
///     let parameters = client.metadata().parameters(Dataset::Regional).await?;
///     for p in parameters {
///         println!("{} ({})", p.parameter_name, p.parameter_data_type);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BeaClient {
  transport: Arc<Transport>,
}

impl BeaClient {
  /// Create a new BEA API client
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client from `BEA_*` environment variables (and `.env`)
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// A client sharing this one's connection pool but answering in `format`
  pub fn with_result_format(&self, format: ResultFormat) -> Self {
    Self { transport: Arc::new(self.transport.with_result_format(format)) }
  }

  /// Format responses are requested in
  pub fn result_format(&self) -> ResultFormat {
    self.transport.result_format()
  }

  /// True when an API key is configured. Says nothing about whether the BEA
  /// accepts it.
  pub fn is_authorized(&self) -> bool {
    self.transport.has_api_key()
  }

  /// Dataset list, parameter list and parameter values
  pub fn metadata(&self) -> MetadataEndpoints {
    MetadataEndpoints::new(self.transport.clone())
  }

  /// NIPA, NIPA underlying detail and fixed assets
  pub fn national(&self) -> NationalEndpoints {
    NationalEndpoints::new(self.transport.clone())
  }

  /// GDP by industry, underlying GDP by industry and input-output
  pub fn industry(&self) -> IndustryEndpoints {
    IndustryEndpoints::new(self.transport.clone())
  }

  /// International transactions, investment position, services trade and MNE
  pub fn international(&self) -> InternationalEndpoints {
    InternationalEndpoints::new(self.transport.clone())
  }

  /// State, county and metro area statistics
  pub fn regional(&self) -> RegionalEndpoints {
    RegionalEndpoints::new(self.transport.clone())
  }

  /// Issue `GetData` against any dataset with caller-built parameters
  ///
  /// Parameters are sent as given; nothing is validated locally. A caller key
  /// spelling `DatasetName` in any case is replaced by `dataset`.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::{BeaClient, Dataset, Params};
  /// # async fn run(client: BeaClient) -> bea_client::Result<()> {
  /// let mut params = Params::new();
  /// params.insert("TableName".to_string(), "T20305".to_string());
  /// params.insert("Frequency".to_string(), "Q".to_string());
  /// params.insert("Year".to_string(), "2020".to_string());
  /// let data = client.get_data(Dataset::Nipa, params).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params))]
  pub async fn get_data(&self, dataset: Dataset, mut params: Params) -> Result<ApiResponse> {
    set_param(&mut params, param::DATASET_NAME, dataset.api_name());
    self.transport.get(Method::GetData, params).await
  }
}

impl std::fmt::Debug for BeaClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BeaClient")
      .field("authorized", &self.is_authorized())
      .field("transport", &self.transport)
      .finish()
  }
}
