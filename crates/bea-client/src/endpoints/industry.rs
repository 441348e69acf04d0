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

//! Industry endpoints: GDP by industry, its underlying detail, and the
//! input-output accounts

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{ApiResponse, Params, Transport};
use bea_core::{Dataset, Result, Selection};
use std::sync::Arc;
use tracing::instrument;

/// Industry accounts endpoints
pub struct IndustryEndpoints {
  transport: Arc<Transport>,
}

impl IndustryEndpoints {
  /// Create a new industry endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get GDP by industry
  ///
  /// # Arguments
  ///
  /// * `table_id` - Table numbers, or `Selection::All`
  /// * `frequency` - Any of A, Q
  /// * `year` - Years to return, or `Selection::All`
  /// * `industry` - Industry codes, or `Selection::All`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::{Frequency, Selection};
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// // Finance and insurance (52), annual, 2018 and 2019
  /// let gdp = client
  ///   .industry()
  ///   .gdp_by_industry(Selection::All, Frequency::Annual, vec!["2019", "2018"], "52")
  ///   .await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, table_id, frequency, year, industry))]
  pub async fn gdp_by_industry(
    &self,
    table_id: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
    industry: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let params = industry_params(table_id.into(), frequency.into(), year.into(), industry.into())?;
    self.get_data(Dataset::GdpByIndustry, params).await
  }

  /// Get underlying GDP by industry
  ///
  /// Same filters as [`gdp_by_industry`](Self::gdp_by_industry); only annual
  /// data is published.
  #[instrument(skip(self, table_id, frequency, year, industry))]
  pub async fn underlying_gdp_by_industry(
    &self,
    table_id: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
    industry: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let params = industry_params(table_id.into(), frequency.into(), year.into(), industry.into())?;
    self.get_data(Dataset::UnderlyingGdpByIndustry, params).await
  }

  /// Get input-output statistics
  ///
  /// # Arguments
  ///
  /// * `table_id` - Table numbers, e.g. `vec!["56", "259"]` (required)
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, table_id, year))]
  pub async fn input_output(
    &self,
    table_id: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let mut params = Params::new();
    params.insert("TableID".to_string(), table_id.into().require("TableID")?);
    params.insert("Year".to_string(), year.into().require("Year")?);

    self.get_data(Dataset::InputOutput, params).await
  }
}

impl_endpoint_base!(IndustryEndpoints);

fn industry_params(
  table_id: Selection,
  frequency: Selection,
  year: Selection,
  industry: Selection,
) -> Result<Params> {
  let mut params = Params::new();
  params.insert("TableID".to_string(), table_id.require("TableID")?);
  params.insert("Frequency".to_string(), frequency.require("Frequency")?);
  params.insert("Year".to_string(), year.require("Year")?);
  params.insert("Industry".to_string(), industry.require("Industry")?);
  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;
  use bea_core::Frequency;

  #[test]
  fn test_industry_params_defaults() {
    let params =
      industry_params(Selection::All, Frequency::every(), Selection::All, Selection::All).unwrap();
    assert_eq!(params["TableID"], "ALL");
    assert_eq!(params["Frequency"], "A,Q,M");
    assert_eq!(params["Year"], "ALL");
    assert_eq!(params["Industry"], "ALL");
  }

  #[test]
  fn test_industry_params_lists() {
    let params = industry_params(
      vec!["1", "5"].into(),
      Frequency::Annual.into(),
      vec!["2019", "2018"].into(),
      "52".into(),
    )
    .unwrap();
    assert_eq!(params["TableID"], "1,5");
    assert_eq!(params["Frequency"], "A");
    assert_eq!(params["Year"], "2019,2018");
    assert_eq!(params["Industry"], "52");
  }
}
