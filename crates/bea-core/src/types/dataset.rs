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

//! Datasets published through the BEA API

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named category of statistical data exposed by the BEA API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
  /// National Income and Product Accounts
  Nipa,
  /// NIPA underlying detail tables
  NiUnderlyingDetail,
  /// Multinational enterprises (direct investment and AMNE)
  Mne,
  /// Fixed assets
  FixedAssets,
  /// International transactions
  Ita,
  /// International investment position
  Iip,
  /// Input-output statistics
  InputOutput,
  /// International services trade
  IntlServTrade,
  /// GDP by industry
  GdpByIndustry,
  /// Regional accounts
  Regional,
  /// Underlying GDP by industry
  UnderlyingGdpByIndustry,
}

impl Dataset {
  /// Every dataset, in the order the BEA lists them
  pub const ALL: [Dataset; 11] = [
    Dataset::Nipa,
    Dataset::NiUnderlyingDetail,
    Dataset::Mne,
    Dataset::FixedAssets,
    Dataset::Ita,
    Dataset::Iip,
    Dataset::InputOutput,
    Dataset::IntlServTrade,
    Dataset::GdpByIndustry,
    Dataset::Regional,
    Dataset::UnderlyingGdpByIndustry,
  ];

  /// The `DatasetName` value the server expects
  pub fn api_name(&self) -> &'static str {
    match self {
      Dataset::Nipa => "NIPA",
      Dataset::NiUnderlyingDetail => "NIUnderlyingDetail",
      Dataset::Mne => "MNE",
      Dataset::FixedAssets => "FixedAssets",
      Dataset::Ita => "ITA",
      Dataset::Iip => "IIP",
      Dataset::InputOutput => "InputOutput",
      Dataset::IntlServTrade => "IntlServTrade",
      Dataset::GdpByIndustry => "GDPbyIndustry",
      Dataset::Regional => "Regional",
      Dataset::UnderlyingGdpByIndustry => "UnderlyingGDPbyIndustry",
    }
  }
}

impl std::fmt::Display for Dataset {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.api_name())
  }
}

impl FromStr for Dataset {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim();
    Dataset::ALL
      .iter()
      .copied()
      .find(|d| d.api_name().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| Error::UnknownDataset(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dataset_names_round_trip() {
    for dataset in Dataset::ALL {
      assert_eq!(dataset.to_string().parse::<Dataset>().unwrap(), dataset);
    }
  }

  #[test]
  fn test_dataset_parse_is_case_insensitive() {
    assert_eq!("nipa".parse::<Dataset>().unwrap(), Dataset::Nipa);
    assert_eq!("gdpbyindustry".parse::<Dataset>().unwrap(), Dataset::GdpByIndustry);
    assert_eq!("underlyingGDPbyIndustry".parse::<Dataset>().unwrap(), Dataset::UnderlyingGdpByIndustry);
  }

  #[test]
  fn test_unknown_dataset() {
    let err = "Crypto".parse::<Dataset>().unwrap_err();
    assert!(matches!(err, Error::UnknownDataset(name) if name == "Crypto"));
  }
}
