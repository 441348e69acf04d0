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

//! Regional accounts endpoint (state, county and metro area statistics)

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{ApiResponse, Params, Transport};
use bea_core::{Dataset, Result, Selection};
use std::sync::Arc;
use tracing::instrument;

/// Regional data endpoint
pub struct RegionalEndpoints {
  transport: Arc<Transport>,
}

impl RegionalEndpoints {
  /// Create a new regional endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get regional statistics
  ///
  /// # Arguments
  ///
  /// * `table_name` - Table, e.g. "CAINC1" (required)
  /// * `line_code` - Statistic within the table, e.g. `1` (required)
  /// * `geo_fips` - FIPS codes, "STATE", "COUNTY", "MSA", or `Selection::All`
  /// * `year` - Years, "LAST5", "LAST10", or `Selection::All`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::Selection;
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// // Personal income for California and New York, every year
  /// let income = client
  ///   .regional()
  ///   .regional("CAINC1", 1u32, vec!["06000", "36000"], Selection::All)
  ///   .await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, table_name, line_code, geo_fips, year))]
  pub async fn regional(
    &self,
    table_name: impl Into<Selection>,
    line_code: impl Into<Selection>,
    geo_fips: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let params = regional_params(table_name.into(), line_code.into(), geo_fips.into(), year.into())?;
    self.get_data(Dataset::Regional, params).await
  }
}

impl_endpoint_base!(RegionalEndpoints);

fn regional_params(
  table_name: Selection,
  line_code: Selection,
  geo_fips: Selection,
  year: Selection,
) -> Result<Params> {
  let mut params = Params::new();
  params.insert("TableName".to_string(), table_name.require("TableName")?);
  params.insert("LineCode".to_string(), line_code.require("LineCode")?);
  params.insert("GeoFips".to_string(), geo_fips.require("GeoFips")?);
  params.insert("Year".to_string(), year.require("Year")?);
  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;
  use bea_core::Error;

  #[test]
  fn test_regional_params() {
    let params =
      regional_params("CAINC1".into(), 1u32.into(), vec!["06000", "36000"].into(), Selection::All)
        .unwrap();
    assert_eq!(params["TableName"], "CAINC1");
    assert_eq!(params["LineCode"], "1");
    assert_eq!(params["GeoFips"], "06000,36000");
    assert_eq!(params["Year"], "ALL");
  }

  #[test]
  fn test_line_code_is_required() {
    let err =
      regional_params("CAINC1".into(), "".into(), Selection::All, Selection::All).unwrap_err();
    assert!(matches!(err, Error::MissingParameter(p) if p == "LineCode"));
  }
}
