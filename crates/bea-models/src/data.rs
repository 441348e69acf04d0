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

//! Observations returned by `GetData`

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// `Results` of `GetData`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
  #[serde(rename = "Data", default)]
  pub data: Vec<DataRow>,

  #[serde(rename = "Notes", default)]
  pub notes: Vec<Note>,
}

/// One observation. Only the columns every dataset shares are named; the
/// rest (`GeoFips`, `LineNumber`, `SeriesCode`, ...) stay in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
  #[serde(rename = "TimePeriod", default, skip_serializing_if = "Option::is_none")]
  pub time_period: Option<String>,

  /// Value as published, e.g. `"21,433,226"` or `"(D)"`
  #[serde(rename = "DataValue", default, skip_serializing_if = "Option::is_none")]
  pub data_value: Option<String>,

  #[serde(rename = "CL_UNIT", default, skip_serializing_if = "Option::is_none")]
  pub unit: Option<String>,

  /// Power of ten the value is expressed in
  #[serde(rename = "UNIT_MULT", default, skip_serializing_if = "Option::is_none")]
  pub unit_mult: Option<String>,

  #[serde(rename = "NoteRef", default, skip_serializing_if = "Option::is_none")]
  pub note_ref: Option<String>,

  #[serde(flatten)]
  pub fields: BTreeMap<String, Value>,
}

impl DataRow {
  /// Numeric value, or `None` for suppressed and unavailable cells
  pub fn value(&self) -> Option<Decimal> {
    self.data_value.as_deref().and_then(parse_data_value)
  }

  /// Numeric value multiplied out by `UNIT_MULT`
  pub fn scaled_value(&self) -> Option<Decimal> {
    let value = self.value()?;
    let mult = match self.unit_mult.as_deref().map(str::trim) {
      None | Some("") => 0,
      Some(m) => m.parse::<u32>().ok()?,
    };
    let factor = 10_i64.checked_pow(mult)?;
    value.checked_mul(Decimal::from(factor))
  }

  /// A dataset-specific column as text
  pub fn field(&self, name: &str) -> Option<&str> {
    self.fields.get(name).and_then(Value::as_str)
  }
}

/// Footnote attached to a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
  #[serde(rename = "NoteRef", default)]
  pub note_ref: String,

  #[serde(rename = "NoteText", default)]
  pub note_text: String,
}

/// Parse a published value. Thousands separators are accepted; markers such
/// as `(D)` (suppressed) or `(NA)` yield `None`.
pub fn parse_data_value(raw: &str) -> Option<Decimal> {
  let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
  if cleaned.is_empty() {
    return None;
  }
  Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_data_value() {
    assert_eq!(parse_data_value("21,433,226"), Some(Decimal::from(21_433_226)));
    assert_eq!(parse_data_value(" -2.5 "), Decimal::from_str("-2.5").ok());
    assert_eq!(parse_data_value("(D)"), None);
    assert_eq!(parse_data_value("(NA)"), None);
    assert_eq!(parse_data_value(""), None);
  }

  #[test]
  fn test_regional_row() {
    let table: DataTable = serde_json::from_value(json!({
      "Data": [{
        "Code": "CAINC1-1",
        "GeoFips": "06000",
        "GeoName": "California",
        "TimePeriod": "2019",
        "CL_UNIT": "Thousands of dollars",
        "UNIT_MULT": "3",
        "DataValue": "2,632,048,000",
        "NoteRef": "1"
      }],
      "Notes": [{"NoteRef": "1", "NoteText": "Estimates prior to 2020 reflect ..."}]
    }))
    .unwrap();

    let row = &table.data[0];
    assert_eq!(row.time_period.as_deref(), Some("2019"));
    assert_eq!(row.field("GeoFips"), Some("06000"));
    assert_eq!(row.value(), Some(Decimal::from(2_632_048_000_i64)));
    assert_eq!(row.scaled_value(), Some(Decimal::from(2_632_048_000_000_i64)));
    assert_eq!(table.notes[0].note_ref, "1");
  }

  #[test]
  fn test_suppressed_row_has_no_value() {
    let row: DataRow = serde_json::from_value(json!({
      "TimePeriod": "2018",
      "DataValue": "(D)",
      "SeriesID": "4"
    }))
    .unwrap();
    assert!(row.value().is_none());
    assert!(row.scaled_value().is_none());
    assert_eq!(row.field("SeriesID"), Some("4"));
  }
}
