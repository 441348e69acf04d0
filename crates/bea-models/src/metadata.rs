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

//! Dataset and parameter metadata returned by the discovery methods

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `Results` of `GetDataSetList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetList {
  #[serde(rename = "Dataset", default)]
  pub datasets: Vec<DatasetDescriptor>,
}

/// One published dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
  #[serde(rename = "DatasetName")]
  pub dataset_name: String,

  #[serde(rename = "DatasetDescription", default)]
  pub dataset_description: String,
}

/// `Results` of `GetParameterList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterList {
  /// Descriptors in server order
  #[serde(rename = "Parameter", default)]
  pub parameters: Vec<ParameterDescriptor>,
}

/// Description of one query parameter accepted by a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
  #[serde(rename = "ParameterName")]
  pub parameter_name: String,

  /// `string` or `integer`
  #[serde(rename = "ParameterDataType")]
  pub parameter_data_type: String,

  #[serde(rename = "ParameterDescription", default)]
  pub parameter_description: String,

  /// `"1"` when the server rejects requests without it
  #[serde(rename = "ParameterIsRequiredFlag", default)]
  pub parameter_is_required_flag: String,

  #[serde(rename = "ParameterDefaultValue", default)]
  pub parameter_default_value: String,

  /// `"1"` when a comma-separated list is accepted
  #[serde(rename = "MultipleAcceptedFlag", default)]
  pub multiple_accepted_flag: String,

  /// Value meaning "everything", usually `ALL`
  #[serde(rename = "AllValue", default)]
  pub all_value: String,
}

impl ParameterDescriptor {
  /// Whether the parameter is mandatory
  pub fn is_required(&self) -> bool {
    self.parameter_is_required_flag.trim() == "1"
  }

  /// Whether several comma-separated values may be sent
  pub fn accepts_multiple(&self) -> bool {
    self.multiple_accepted_flag.trim() == "1"
  }
}

/// `Results` of `GetParameterValues` and `GetParameterValuesFiltered`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValueList {
  #[serde(rename = "ParamValue", default)]
  pub values: Vec<ParameterValue>,
}

/// One permitted value of a parameter
///
/// Field names differ between datasets (`Key`/`Desc`, `TableName`/`Description`,
/// ...), so the raw object is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterValue(pub Map<String, Value>);

const KEY_FIELDS: [&str; 5] = ["Key", "TableName", "TableID", "Code", "GeoFips"];
const DESC_FIELDS: [&str; 3] = ["Desc", "Description", "GeoName"];

impl ParameterValue {
  /// The value to send back in a request
  pub fn key(&self) -> Option<&str> {
    self.first_of(&KEY_FIELDS)
  }

  /// Human-readable label
  pub fn description(&self) -> Option<&str> {
    self.first_of(&DESC_FIELDS)
  }

  /// Raw field lookup
  pub fn get(&self, field: &str) -> Option<&Value> {
    self.0.get(field)
  }

  fn first_of(&self, fields: &[&str]) -> Option<&str> {
    fields.iter().find_map(|f| self.0.get(*f).and_then(Value::as_str))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parameter_list_keeps_order() {
    let results = json!({
      "Parameter": [
        {
          "ParameterName": "GeoFips",
          "ParameterDataType": "string",
          "ParameterDescription": "Comma-delimited list of 5-character geographic codes",
          "ParameterIsRequiredFlag": "1",
          "MultipleAcceptedFlag": "1",
          "AllValue": "ALL"
        },
        {
          "ParameterName": "LineCode",
          "ParameterDataType": "integer",
          "ParameterDescription": "Line code for a statistic or industry",
          "ParameterIsRequiredFlag": "1",
          "MultipleAcceptedFlag": "0"
        },
        {
          "ParameterName": "TableName",
          "ParameterDataType": "string",
          "ParameterIsRequiredFlag": "1"
        }
      ]
    });

    let list: ParameterList = serde_json::from_value(results).unwrap();
    let names: Vec<_> = list.parameters.iter().map(|p| p.parameter_name.as_str()).collect();
    assert_eq!(names, ["GeoFips", "LineCode", "TableName"]);
    assert_eq!(list.parameters[1].parameter_data_type, "integer");
    assert!(list.parameters[0].accepts_multiple());
    assert!(!list.parameters[1].accepts_multiple());
    assert!(list.parameters[2].is_required());
    assert_eq!(list.parameters[2].all_value, "");
  }

  #[test]
  fn test_dataset_list() {
    let results = json!({
      "Dataset": [
        {"DatasetName": "NIPA", "DatasetDescription": "Standard NIPA tables"},
        {"DatasetName": "Regional", "DatasetDescription": "Regional data sets"}
      ]
    });
    let list: DatasetList = serde_json::from_value(results).unwrap();
    assert_eq!(list.datasets.len(), 2);
    assert_eq!(list.datasets[1].dataset_name, "Regional");
  }

  #[test]
  fn test_parameter_value_field_variants() {
    let list: ParameterValueList = serde_json::from_value(json!({
      "ParamValue": [
        {"Key": "2019", "Desc": "2019"},
        {"TableName": "T10101", "Description": "Table 1.1.1. Percent Change"}
      ]
    }))
    .unwrap();

    assert_eq!(list.values[0].key(), Some("2019"));
    assert_eq!(list.values[1].key(), Some("T10101"));
    assert_eq!(list.values[1].description(), Some("Table 1.1.1. Percent Change"));
    assert!(list.values[0].get("Missing").is_none());
  }
}
