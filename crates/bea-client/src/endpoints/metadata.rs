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

//! Discovery endpoints
//!
//! Which datasets exist, which parameters each accepts, and which values
//! those parameters may take.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{set_param, ApiResponse, Params, Transport};
use bea_core::{param, Dataset, Error, Method, Result};
use bea_models::{DatasetDescriptor, DatasetList, ParameterDescriptor, ParameterList, ParameterValue, ParameterValueList};
use std::sync::Arc;
use tracing::instrument;

/// Dataset and parameter metadata endpoints
pub struct MetadataEndpoints {
  transport: Arc<Transport>,
}

impl MetadataEndpoints {
  /// Create a new metadata endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List the datasets the API publishes (`GetDataSetList`)
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// let document = client.metadata().dataset_list().await?;
  /// println!("{:?}", document.results());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn dataset_list(&self) -> Result<ApiResponse> {
    self.transport.get(Method::GetDataSetList, Params::new()).await
  }

  /// Typed view of [`dataset_list`](Self::dataset_list)
  #[instrument(skip(self))]
  pub async fn datasets(&self) -> Result<Vec<DatasetDescriptor>> {
    let list: DatasetList = self.transport.get_results(Method::GetDataSetList, Params::new()).await?;
    Ok(list.datasets)
  }

  /// List the parameters a dataset accepts (`GetParameterList`)
  ///
  /// # Arguments
  ///
  /// * `dataset` - Dataset to describe
  #[instrument(skip(self))]
  pub async fn parameter_list(&self, dataset: Dataset) -> Result<ApiResponse> {
    self.transport.get(Method::GetParameterList, dataset_params(dataset)).await
  }

  /// Typed view of [`parameter_list`](Self::parameter_list), in server order
  #[instrument(skip(self))]
  pub async fn parameters(&self, dataset: Dataset) -> Result<Vec<ParameterDescriptor>> {
    let list: ParameterList =
      self.transport.get_results(Method::GetParameterList, dataset_params(dataset)).await?;
    Ok(list.parameters)
  }

  /// List the values a parameter may take (`GetParameterValues`)
  ///
  /// # Arguments
  ///
  /// * `dataset` - Dataset the parameter belongs to
  /// * `parameter_name` - e.g. "TableName", "Year", "GeoFips"
  #[instrument(skip(self))]
  pub async fn parameter_values(&self, dataset: Dataset, parameter_name: &str) -> Result<ApiResponse> {
    let params = parameter_values_params(dataset, parameter_name)?;
    self.transport.get(Method::GetParameterValues, params).await
  }

  /// Typed view of [`parameter_values`](Self::parameter_values)
  #[instrument(skip(self))]
  pub async fn parameter_value_list(
    &self,
    dataset: Dataset,
    parameter_name: &str,
  ) -> Result<Vec<ParameterValue>> {
    let params = parameter_values_params(dataset, parameter_name)?;
    let list: ParameterValueList = self.transport.get_results(Method::GetParameterValues, params).await?;
    Ok(list.values)
  }

  /// List the values of `target_parameter` compatible with other filters
  /// (`GetParameterValuesFiltered`)
  ///
  /// # Arguments
  ///
  /// * `dataset` - Dataset the parameter belongs to
  /// * `target_parameter` - Parameter whose values are wanted
  /// * `filters` - Other parameters narrowing the answer, e.g. `[("TableName", "CAINC1")]`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::Dataset;
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// let line_codes = client
  ///   .metadata()
  ///   .parameter_values_filtered(Dataset::Regional, "LineCode", &[("TableName", "CAINC1")])
  ///   .await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn parameter_values_filtered(
    &self,
    dataset: Dataset,
    target_parameter: &str,
    filters: &[(&str, &str)],
  ) -> Result<ApiResponse> {
    if target_parameter.trim().is_empty() {
      return Err(Error::MissingParameter("TargetParameter".to_string()));
    }

    let params = filtered_params(dataset, target_parameter, filters);
    self.transport.get(Method::GetParameterValuesFiltered, params).await
  }
}

impl_endpoint_base!(MetadataEndpoints);

fn dataset_params(dataset: Dataset) -> Params {
  let mut params = Params::new();
  params.insert(param::DATASET_NAME.to_string(), dataset.to_string());
  params
}

// Filters go in first so the dataset and target always win.
fn filtered_params(dataset: Dataset, target_parameter: &str, filters: &[(&str, &str)]) -> Params {
  let mut params = Params::new();
  for (name, value) in filters {
    params.insert(name.to_string(), value.to_string());
  }
  set_param(&mut params, param::DATASET_NAME, dataset.api_name());
  set_param(&mut params, "TargetParameter", target_parameter);
  params
}

fn parameter_values_params(dataset: Dataset, parameter_name: &str) -> Result<Params> {
  if parameter_name.trim().is_empty() {
    return Err(Error::MissingParameter("ParameterName".to_string()));
  }
  let mut params = dataset_params(dataset);
  params.insert("ParameterName".to_string(), parameter_name.to_string());
  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parameter_values_params() {
    let params = parameter_values_params(Dataset::Nipa, "TableName").unwrap();
    assert_eq!(params["DatasetName"], "NIPA");
    assert_eq!(params["ParameterName"], "TableName");
  }

  #[test]
  fn test_parameter_values_requires_name() {
    let err = parameter_values_params(Dataset::Nipa, " ").unwrap_err();
    assert!(matches!(err, Error::MissingParameter(p) if p == "ParameterName"));
  }

  #[test]
  fn test_filtered_params_keep_dataset_argument() {
    let params = filtered_params(
      Dataset::Regional,
      "LineCode",
      &[("datasetname", "NIPA"), ("DatasetName", "ITA"), ("TableName", "CAINC1")],
    );
    assert_eq!(params.len(), 3);
    assert_eq!(params["DatasetName"], "Regional");
    assert_eq!(params["TargetParameter"], "LineCode");
    assert_eq!(params["TableName"], "CAINC1");
  }

  #[tokio::test]
  async fn test_filtered_requires_target_before_any_request() {
    // The mock host does not resolve, so reaching the network would yield Http instead.
    let endpoints = MetadataEndpoints::new(Arc::new(Transport::new_mock()));
    let err = endpoints.parameter_values_filtered(Dataset::Regional, "", &[]).await.unwrap_err();
    assert!(matches!(err, Error::MissingParameter(p) if p == "TargetParameter"));
  }
}
