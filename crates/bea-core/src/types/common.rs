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

//! Common types used across the API

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Format the BEA answers in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultFormat {
    /// JSON document
    #[default]
    Json,
    /// XML text
    Xml,
}

impl std::fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultFormat::Json => write!(f, "JSON"),
            ResultFormat::Xml => write!(f, "XML"),
        }
    }
}

impl FromStr for ResultFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JSON" => Ok(ResultFormat::Json),
            "XML" => Ok(ResultFormat::Xml),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

/// Data frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Annual
    Annual,
    /// Quarterly
    Quarterly,
    /// Monthly
    Monthly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Annual => write!(f, "A"),
            Frequency::Quarterly => write!(f, "Q"),
            Frequency::Monthly => write!(f, "M"),
        }
    }
}

impl Frequency {
    /// Annual, quarterly and monthly together (`A,Q,M`)
    pub fn every() -> Selection {
        Selection::from([Frequency::Annual, Frequency::Quarterly, Frequency::Monthly].as_slice())
    }
}

/// Value of a multi-valued filter such as `Year`, `GeoFips` or `TableID`.
///
/// `All` renders as `ALL`. A list renders comma-joined in the order given, and
/// a single string is passed through untouched, so `"2019,2018"` and
/// `vec!["2019", "2018"]` produce the same query value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every value the dataset offers
    #[default]
    All,
    /// Explicit values
    Values(Vec<String>),
}

impl Selection {
    /// Build a selection from any list of displayable values
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Selection::Values(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// True when the selection would render as an empty query value
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::All => false,
            Selection::Values(values) => values.iter().all(|v| v.trim().is_empty()),
        }
    }

    /// Fail with [`Error::MissingParameter`] when the selection is empty
    pub fn require(&self, name: &str) -> Result<String> {
        if self.is_empty() {
            return Err(Error::MissingParameter(name.to_string()));
        }
        Ok(self.to_string())
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::All => write!(f, "ALL"),
            Selection::Values(values) => write!(f, "{}", values.join(",")),
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::Values(vec![value.to_string()])
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::Values(vec![value])
    }
}

impl From<&String> for Selection {
    fn from(value: &String) -> Self {
        Selection::Values(vec![value.clone()])
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Selection::Values(values)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(values: Vec<&str>) -> Self {
        Selection::values(values)
    }
}

impl From<&[&str]> for Selection {
    fn from(values: &[&str]) -> Self {
        Selection::values(values)
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(values: [&str; N]) -> Self {
        Selection::values(values)
    }
}

impl From<Frequency> for Selection {
    fn from(value: Frequency) -> Self {
        Selection::Values(vec![value.to_string()])
    }
}

impl From<&[Frequency]> for Selection {
    fn from(values: &[Frequency]) -> Self {
        Selection::values(values)
    }
}

impl From<Vec<Frequency>> for Selection {
    fn from(values: Vec<Frequency>) -> Self {
        Selection::values(values)
    }
}

impl From<u32> for Selection {
    fn from(value: u32) -> Self {
        Selection::Values(vec![value.to_string()])
    }
}

impl From<Vec<u32>> for Selection {
    fn from(values: Vec<u32>) -> Self {
        Selection::values(values)
    }
}

/// Render a flag the way the MNE dataset expects footnote switches
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Render a flag as `1`/`0`
pub fn one_zero(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_format_parsing() {
        assert_eq!("json".parse::<ResultFormat>().unwrap(), ResultFormat::Json);
        assert_eq!(" Xml ".parse::<ResultFormat>().unwrap(), ResultFormat::Xml);
        assert!(matches!("csv".parse::<ResultFormat>(), Err(Error::InvalidFormat(f)) if f == "csv"));
        assert_eq!(ResultFormat::Xml.to_string(), "XML");
    }

    #[test]
    fn test_selection_rendering() {
        assert_eq!(Selection::All.to_string(), "ALL");
        assert_eq!(Selection::from(vec!["2019", "2018"]).to_string(), "2019,2018");
        assert_eq!(Selection::from("2019,2018").to_string(), "2019,2018");
        assert_eq!(Selection::from(["CA", "NY", "TX"]).to_string(), "CA,NY,TX");
        assert_eq!(Selection::from(vec![2020u32, 2021]).to_string(), "2020,2021");
        assert_eq!(Frequency::every().to_string(), "A,Q,M");
        assert_eq!(Selection::from(Frequency::Quarterly).to_string(), "Q");
    }

    #[test]
    fn test_selection_require() {
        assert_eq!(Selection::All.require("Year").unwrap(), "ALL");
        assert_eq!(Selection::from("T10101").require("TableName").unwrap(), "T10101");

        let err = Selection::from("").require("TableName").unwrap_err();
        assert!(matches!(err, Error::MissingParameter(p) if p == "TableName"));
        assert!(Selection::Values(vec![]).is_empty());
        assert!(Selection::from(vec![" ", ""]).is_empty());
    }

    #[test]
    fn test_flags() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
        assert_eq!(one_zero(true), "1");
        assert_eq!(one_zero(false), "0");
    }
}
