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

//! National accounts endpoints
//!
//! - NIPA: the standard National Income and Product Accounts tables
//! - NIUnderlyingDetail: the underlying detail behind those tables
//! - FixedAssets: stocks and depreciation of fixed assets

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{ApiResponse, Params, Transport};
use bea_core::{Dataset, Result, Selection};
use std::sync::Arc;
use tracing::instrument;

/// National Income and Product Accounts and fixed asset endpoints
pub struct NationalEndpoints {
  transport: Arc<Transport>,
}

impl NationalEndpoints {
  /// Create a new national accounts endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get a NIPA table
  ///
  /// # Arguments
  ///
  /// * `table_name` - Table identifier, e.g. "T10101" (required)
  /// * `frequency` - Any of A, Q, M; `Frequency::every()` for all three
  /// * `year` - Years to return, or `Selection::All`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::{Frequency, Selection};
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// // Real GDP percent change, quarterly, 2019 and 2020
  /// let table = client.national().nipa("T10101", Frequency::Quarterly, vec!["2019", "2020"]).await?;
  ///
  /// // Every year, every frequency
  /// let full = client.national().nipa("T10101", Frequency::every(), Selection::All).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, table_name, frequency, year))]
  pub async fn nipa(
    &self,
    table_name: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let params = table_params(table_name.into(), frequency.into(), year.into())?;
    self.get_data(Dataset::Nipa, params).await
  }

  /// Get a NIPA underlying detail table
  ///
  /// # Arguments
  ///
  /// * `table_name` - Table identifier, e.g. "U20305" (required)
  /// * `frequency` - Any of A, Q, M
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, table_name, frequency, year))]
  pub async fn ni_underlying_detail(
    &self,
    table_name: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let params = table_params(table_name.into(), frequency.into(), year.into())?;
    self.get_data(Dataset::NiUnderlyingDetail, params).await
  }

  /// Get a fixed assets table
  ///
  /// # Arguments
  ///
  /// * `table_name` - Table identifier, e.g. "FAAt201" (required)
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, table_name, year))]
  pub async fn fixed_assets(
    &self,
    table_name: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let mut params = Params::new();
    params.insert("TableName".to_string(), table_name.into().require("TableName")?);
    params.insert("Year".to_string(), year.into().require("Year")?);

    self.get_data(Dataset::FixedAssets, params).await
  }
}

impl_endpoint_base!(NationalEndpoints);

fn table_params(table_name: Selection, frequency: Selection, year: Selection) -> Result<Params> {
  let mut params = Params::new();
  params.insert("TableName".to_string(), table_name.require("TableName")?);
  params.insert("Frequency".to_string(), frequency.require("Frequency")?);
  params.insert("Year".to_string(), year.require("Year")?);
  Ok(params)
}
