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

//! International accounts endpoints
//!
//! - ITA: international transactions (balance of payments)
//! - IIP: international investment position
//! - IntlServTrade: trade in services
//! - MNE: direct investment and activities of multinational enterprises

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::{ApiResponse, Params, Transport};
use bea_core::types::common::{one_zero, yes_no};
use bea_core::{Dataset, Error, Result, Selection};
use std::sync::Arc;
use tracing::instrument;

/// `AreaOrCountry` value covering every country
pub const ALL_COUNTRIES: &str = "AllCountries";

/// Filters for the MNE direct investment tables
#[derive(Debug, Clone, PartialEq)]
pub struct DirectInvestmentQuery {
  /// "Outward" or "Inward" (required)
  pub direction_of_investment: String,
  /// e.g. "Country", "Industry", "CountryByIndustry" (required)
  pub classification: String,
  /// Series identifiers, or `ALL`
  pub series_id: Selection,
  /// Years, or `ALL`
  pub year: Selection,
  /// Country codes, or `ALL`
  pub country: Selection,
  /// Industry codes, or `ALL`
  pub industry: Selection,
  /// Ask for footnotes (`GetFootnotes=Yes`)
  pub footnotes: bool,
}

impl DirectInvestmentQuery {
  /// Query with every optional filter set to `ALL` and footnotes on
  pub fn new(direction_of_investment: &str, classification: &str) -> Self {
    Self {
      direction_of_investment: direction_of_investment.to_string(),
      classification: classification.to_string(),
      series_id: Selection::All,
      year: Selection::All,
      country: Selection::All,
      industry: Selection::All,
      footnotes: true,
    }
  }

  /// Set the `series_id` filter
  pub fn series_id(mut self, series_id: impl Into<Selection>) -> Self {
    self.series_id = series_id.into();
    self
  }

  /// Set the `year` filter
  pub fn year(mut self, year: impl Into<Selection>) -> Self {
    self.year = year.into();
    self
  }

  /// Set the `country` filter
  pub fn country(mut self, country: impl Into<Selection>) -> Self {
    self.country = country.into();
    self
  }

  /// Set the `industry` filter
  pub fn industry(mut self, industry: impl Into<Selection>) -> Self {
    self.industry = industry.into();
    self
  }

  /// Switch footnotes on or off
  pub fn footnotes(mut self, footnotes: bool) -> Self {
    self.footnotes = footnotes;
    self
  }

  /// Query parameters for this request
  pub fn params(&self) -> Result<Params> {
    let mut params = Params::new();
    params.insert(
      "DirectionOfInvestment".to_string(),
      required(&self.direction_of_investment, "DirectionOfInvestment")?,
    );
    params.insert("Classification".to_string(), required(&self.classification, "Classification")?);
    params.insert("SeriesID".to_string(), self.series_id.require("SeriesID")?);
    params.insert("Year".to_string(), self.year.require("Year")?);
    params.insert("Country".to_string(), self.country.require("Country")?);
    params.insert("Industry".to_string(), self.industry.require("Industry")?);
    params.insert("GetFootnotes".to_string(), yes_no(self.footnotes).to_string());
    Ok(params)
  }
}

/// Filters for the activities of multinational enterprises (AMNE) tables
#[derive(Debug, Clone, PartialEq)]
pub struct MneActivitiesQuery {
  /// "Outward" or "Inward" (required)
  pub direction_of_investment: String,
  /// e.g. "Country", "Industry", "CountryByIndustry" (required)
  pub classification: String,
  /// Majority-owned affiliates only when false
  pub ownership_level: bool,
  /// Restrict to nonbank affiliates
  pub nonbank_affiliates_only: bool,
  /// Series identifiers, or `ALL`
  pub series_id: Selection,
  /// State FIPS codes, or `ALL`
  pub state: Selection,
  /// Years, or `ALL`
  pub year: Selection,
  /// Country codes, or `ALL`
  pub country: Selection,
  /// Industry codes, or `ALL`
  pub industry: Selection,
  /// Ask for footnotes (`GetFootnotes=Yes`)
  pub footnotes: bool,
}

impl MneActivitiesQuery {
  /// Query with every optional filter set to `ALL` and footnotes on
  pub fn new(
    direction_of_investment: &str,
    classification: &str,
    ownership_level: bool,
    nonbank_affiliates_only: bool,
  ) -> Self {
    Self {
      direction_of_investment: direction_of_investment.to_string(),
      classification: classification.to_string(),
      ownership_level,
      nonbank_affiliates_only,
      series_id: Selection::All,
      state: Selection::All,
      year: Selection::All,
      country: Selection::All,
      industry: Selection::All,
      footnotes: true,
    }
  }

  /// Set the `series_id` filter
  pub fn series_id(mut self, series_id: impl Into<Selection>) -> Self {
    self.series_id = series_id.into();
    self
  }

  /// Set the `state` filter
  pub fn state(mut self, state: impl Into<Selection>) -> Self {
    self.state = state.into();
    self
  }

  /// Set the `year` filter
  pub fn year(mut self, year: impl Into<Selection>) -> Self {
    self.year = year.into();
    self
  }

  /// Set the `country` filter
  pub fn country(mut self, country: impl Into<Selection>) -> Self {
    self.country = country.into();
    self
  }

  /// Set the `industry` filter
  pub fn industry(mut self, industry: impl Into<Selection>) -> Self {
    self.industry = industry.into();
    self
  }

  /// Switch footnotes on or off
  pub fn footnotes(mut self, footnotes: bool) -> Self {
    self.footnotes = footnotes;
    self
  }

  /// Query parameters for this request
  pub fn params(&self) -> Result<Params> {
    let mut params = Params::new();
    params.insert(
      "DirectionOfInvestment".to_string(),
      required(&self.direction_of_investment, "DirectionOfInvestment")?,
    );
    params.insert("Classification".to_string(), required(&self.classification, "Classification")?);
    params.insert("OwnershipLevel".to_string(), one_zero(self.ownership_level).to_string());
    params.insert(
      "NonbankAffiliatesOnly".to_string(),
      one_zero(self.nonbank_affiliates_only).to_string(),
    );
    params.insert("SeriesID".to_string(), self.series_id.require("SeriesID")?);
    params.insert("State".to_string(), self.state.require("State")?);
    params.insert("Year".to_string(), self.year.require("Year")?);
    params.insert("Country".to_string(), self.country.require("Country")?);
    params.insert("Industry".to_string(), self.industry.require("Industry")?);
    params.insert("GetFootnotes".to_string(), yes_no(self.footnotes).to_string());
    Ok(params)
  }
}

/// International transactions, investment position, services trade and MNE endpoints
pub struct InternationalEndpoints {
  transport: Arc<Transport>,
}

impl InternationalEndpoints {
  /// Create a new international endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get international transactions (ITA)
  ///
  /// # Arguments
  ///
  /// * `indicator` - e.g. "BalGds", or `Selection::All`
  /// * `area_or_country` - e.g. "China", or [`ALL_COUNTRIES`]
  /// * `frequency` - A, QSA, QNSA, or `Selection::All`
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, indicator, area_or_country, frequency, year))]
  pub async fn transactions(
    &self,
    indicator: impl Into<Selection>,
    area_or_country: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let mut params = Params::new();
    params.insert("Indicator".to_string(), indicator.into().require("Indicator")?);
    params.insert("AreaOrCountry".to_string(), area_or_country.into().require("AreaOrCountry")?);
    params.insert("Frequency".to_string(), frequency.into().require("Frequency")?);
    params.insert("Year".to_string(), year.into().require("Year")?);

    self.get_data(Dataset::Ita, params).await
  }

  /// Get the international investment position (IIP)
  ///
  /// # Arguments
  ///
  /// * `type_of_investment` - e.g. "FinAssetsExclFinDeriv", or `Selection::All`
  /// * `component` - e.g. "Pos", or `Selection::All`
  /// * `frequency` - A, QNSA, or `Selection::All`
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, type_of_investment, component, frequency, year))]
  pub async fn investment_position(
    &self,
    type_of_investment: impl Into<Selection>,
    component: impl Into<Selection>,
    frequency: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let mut params = Params::new();
    params.insert(
      "TypeOfInvestment".to_string(),
      type_of_investment.into().require("TypeOfInvestment")?,
    );
    params.insert("Component".to_string(), component.into().require("Component")?);
    params.insert("Frequency".to_string(), frequency.into().require("Frequency")?);
    params.insert("Year".to_string(), year.into().require("Year")?);

    self.get_data(Dataset::Iip, params).await
  }

  /// Get international trade in services
  ///
  /// # Arguments
  ///
  /// * `type_of_service` - e.g. "Telecom", or `Selection::All`
  /// * `trade_direction` - "Exports", "Imports", "Balance", "SupplementalIns", or `Selection::All`
  /// * `affiliation` - "AllAffiliations", "Unaffiliated", ..., or `Selection::All`
  /// * `area_or_country` - e.g. "Germany", or [`ALL_COUNTRIES`]
  /// * `year` - Years to return, or `Selection::All`
  #[instrument(skip(self, type_of_service, trade_direction, affiliation, area_or_country, year))]
  pub async fn services_trade(
    &self,
    type_of_service: impl Into<Selection>,
    trade_direction: impl Into<Selection>,
    affiliation: impl Into<Selection>,
    area_or_country: impl Into<Selection>,
    year: impl Into<Selection>,
  ) -> Result<ApiResponse> {
    let mut params = Params::new();
    params.insert("TypeOfService".to_string(), type_of_service.into().require("TypeOfService")?);
    params.insert("TradeDirection".to_string(), trade_direction.into().require("TradeDirection")?);
    params.insert("Affiliation".to_string(), affiliation.into().require("Affiliation")?);
    params.insert("AreaOrCountry".to_string(), area_or_country.into().require("AreaOrCountry")?);
    params.insert("Year".to_string(), year.into().require("Year")?);

    self.get_data(Dataset::IntlServTrade, params).await
  }

  /// Get direct investment positions and flows (MNE)
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use bea_client::endpoints::international::DirectInvestmentQuery;
  /// # async fn run(client: bea_client::BeaClient) -> bea_client::Result<()> {
  /// let query = DirectInvestmentQuery::new("Outward", "Country")
  ///   .series_id("30")
  ///   .year(vec!["2011", "2012"])
  ///   .country(vec!["650", "699"]);
  /// let positions = client.international().direct_investment(&query).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn direct_investment(&self, query: &DirectInvestmentQuery) -> Result<ApiResponse> {
    let params = query.params()?;
    self.get_data(Dataset::Mne, params).await
  }

  /// Get activities of multinational enterprises (MNE, AMNE tables)
  #[instrument(skip(self))]
  pub async fn multinational_activities(&self, query: &MneActivitiesQuery) -> Result<ApiResponse> {
    let params = query.params()?;
    self.get_data(Dataset::Mne, params).await
  }
}

impl_endpoint_base!(InternationalEndpoints);

fn required(value: &str, name: &str) -> Result<String> {
  if value.trim().is_empty() {
    return Err(Error::MissingParameter(name.to_string()));
  }
  Ok(value.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_direct_investment_params() {
    let query = DirectInvestmentQuery::new("Outward", "Country")
      .series_id("30")
      .year(vec!["2011", "2012"])
      .country(vec!["650", "699"])
      .footnotes(false);

    let params = query.params().unwrap();
    assert_eq!(params["DirectionOfInvestment"], "Outward");
    assert_eq!(params["Classification"], "Country");
    assert_eq!(params["SeriesID"], "30");
    assert_eq!(params["Year"], "2011,2012");
    assert_eq!(params["Country"], "650,699");
    assert_eq!(params["Industry"], "ALL");
    assert_eq!(params["GetFootnotes"], "No");
  }

  #[test]
  fn test_direct_investment_requires_direction() {
    let err = DirectInvestmentQuery::new("", "Country").params().unwrap_err();
    assert!(matches!(err, Error::MissingParameter(p) if p == "DirectionOfInvestment"));
  }

  #[test]
  fn test_activities_params() {
    let query = MneActivitiesQuery::new("Inward", "CountryByIndustry", false, true)
      .state(vec!["01000", "02000"])
      .year("2018");

    let params = query.params().unwrap();
    assert_eq!(params["OwnershipLevel"], "0");
    assert_eq!(params["NonbankAffiliatesOnly"], "1");
    assert_eq!(params["State"], "01000,02000");
    assert_eq!(params["Year"], "2018");
    assert_eq!(params["GetFootnotes"], "Yes");
    assert_eq!(params["Classification"], "CountryByIndustry");
  }

  #[test]
  fn test_activities_requires_classification() {
    let err = MneActivitiesQuery::new("Inward", " ", true, false).params().unwrap_err();
    assert!(matches!(err, Error::MissingParameter(p) if p == "Classification"));
  }
}
