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

//! The `BEAAPI` envelope wrapped around every response

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Root object of every JSON response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
  /// Everything lives under `BEAAPI`
  #[serde(rename = "BEAAPI")]
  pub beaapi: BeaApi,
}

/// Body of the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaApi {
  /// Echo of the parameters the server received
  #[serde(rename = "Request", default, skip_serializing_if = "Option::is_none")]
  pub request: Option<RequestEcho>,

  /// Payload; its shape depends on the method and dataset
  #[serde(rename = "Results", default, skip_serializing_if = "Option::is_none")]
  pub results: Option<Value>,

  /// Present instead of (or alongside) `Results` when the request failed
  #[serde(rename = "Error", default, skip_serializing_if = "Option::is_none")]
  pub error: Option<ApiError>,
}

impl ApiEnvelope {
  /// The provider error, wherever the server put it
  pub fn error(&self) -> Option<ApiError> {
    if let Some(error) = &self.beaapi.error {
      return Some(error.clone());
    }
    self.beaapi.results.as_ref().and_then(error_in)
  }
}

/// Request echo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEcho {
  /// Parameters in the order the server lists them
  #[serde(rename = "RequestParam", default)]
  pub request_param: Vec<RequestParameter>,
}

impl RequestEcho {
  /// Look up an echoed parameter. The server upper-cases names, so the match
  /// ignores case.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .request_param
      .iter()
      .find(|p| p.parameter_name.eq_ignore_ascii_case(name))
      .map(|p| p.parameter_value.as_str())
  }
}

/// One echoed parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParameter {
  #[serde(rename = "ParameterName")]
  pub parameter_name: String,

  #[serde(rename = "ParameterValue", default)]
  pub parameter_value: String,
}

/// Error object reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
  /// `APIErrorCode`; sent as a string by some endpoints and a number by others
  #[serde(rename = "APIErrorCode", default, deserialize_with = "string_or_number")]
  pub code: String,

  /// `APIErrorDescription`
  #[serde(rename = "APIErrorDescription", default)]
  pub description: String,

  /// Optional `ErrorDetail` object
  #[serde(rename = "ErrorDetail", default, skip_serializing_if = "Option::is_none")]
  pub detail: Option<Value>,
}

impl ApiError {
  /// Description followed by the detail text, if the server gave one
  pub fn full_description(&self) -> String {
    match self.detail.as_ref().and_then(|d| d.get("Description")).and_then(Value::as_str) {
      Some(detail) if !detail.is_empty() => format!("{} ({})", self.description, detail),
      _ => self.description.clone(),
    }
  }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(s) => s,
    Value::Null => String::new(),
    other => other.to_string(),
  })
}

fn error_in(results: &Value) -> Option<ApiError> {
  results.get("Error").and_then(|e| serde_json::from_value(e.clone()).ok())
}

/// Find a provider error in a raw response document without decoding the rest
///
/// Checks `BEAAPI.Error` first, then `BEAAPI.Results.Error`.
pub fn find_error(document: &Value) -> Option<ApiError> {
  let root = document.get("BEAAPI")?;
  if let Some(error) = root.get("Error") {
    if let Ok(parsed) = serde_json::from_value(error.clone()) {
      return Some(parsed);
    }
  }
  root.get("Results").and_then(error_in)
}

/// The `BEAAPI.Results` section of a raw response document
pub fn results(document: &Value) -> Option<&Value> {
  document.get("BEAAPI").and_then(|root| root.get("Results"))
}
