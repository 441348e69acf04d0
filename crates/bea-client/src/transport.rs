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

//! HTTP transport layer for BEA API requests

use bea_core::{param, Config, Error, Method, Result, ResultFormat};
use bea_models::envelope;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Query parameters of one request, name to value
pub type Params = HashMap<String, String>;

/// Set `name` to `value`, dropping any existing key that differs from it only
/// in letter case. The BEA treats parameter names case-insensitively.
pub fn set_param(params: &mut Params, name: &str, value: &str) {
  params.retain(|key, _| !key.eq_ignore_ascii_case(name));
  params.insert(name.to_string(), value.to_string());
}

/// Body returned by the server, in the format that was requested
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
  /// Decoded JSON document, exactly as sent
  Json(Value),
  /// XML text, exactly as sent
  Xml(String),
}

impl ApiResponse {
  /// Borrow the JSON document
  pub fn as_json(&self) -> Option<&Value> {
    match self {
      ApiResponse::Json(value) => Some(value),
      ApiResponse::Xml(_) => None,
    }
  }

  /// Borrow the XML text
  pub fn as_xml(&self) -> Option<&str> {
    match self {
      ApiResponse::Json(_) => None,
      ApiResponse::Xml(text) => Some(text),
    }
  }

  /// Take the JSON document, failing if the client asked for XML
  pub fn into_json(self) -> Result<Value> {
    match self {
      ApiResponse::Json(value) => Ok(value),
      ApiResponse::Xml(_) => {
        Err(Error::InvalidFormat("response is XML, a JSON document was expected".to_string()))
      }
    }
  }

  /// The `BEAAPI.Results` section of a JSON response
  pub fn results(&self) -> Option<&Value> {
    self.as_json().and_then(envelope::results)
  }
}

/// HTTP transport layer for making requests to the BEA API
pub struct Transport {
  client: Client,
  base_url: Url,
  api_key: String,
  result_format: ResultFormat,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("bea-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    let base_url = Url::parse(&config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    Ok(Self {
      client,
      base_url,
      api_key: config.api_key.clone(),
      result_format: config.result_format,
      timeout,
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: Url::parse("https://mock.bea.gov/api/data/").expect("static url"),
      api_key: "test_key".to_string(),
      result_format: ResultFormat::Json,
      timeout: Duration::from_secs(30),
    }
  }

  /// Same connection pool and credentials, different result format
  pub fn with_result_format(&self, result_format: ResultFormat) -> Self {
    Self {
      client: self.client.clone(),
      base_url: self.base_url.clone(),
      api_key: self.api_key.clone(),
      result_format,
      timeout: self.timeout,
    }
  }

  /// Make a GET request in the configured result format
  ///
  /// # Arguments
  ///
  /// * `method` - The BEA API method to call
  /// * `params` - Endpoint filters; `UserID`, `method` and `ResultFormat` are added here
  #[instrument(skip(self, params), fields(method = %method))]
  pub async fn get(&self, method: Method, params: Params) -> Result<ApiResponse> {
    self.get_as(method, params, self.result_format).await
  }

  /// Make a GET request and decode `BEAAPI.Results` into `T`
  ///
  /// Always asks for JSON regardless of the configured format.
  #[instrument(skip(self, params), fields(method = %method))]
  pub async fn get_results<T>(&self, method: Method, params: Params) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let document = self.get_as(method, params, ResultFormat::Json).await?.into_json()?;
    let results = envelope::results(&document)
      .ok_or_else(|| Error::MissingField("BEAAPI.Results".to_string()))?;
    Ok(serde_json::from_value(results.clone())?)
  }

  async fn get_as(
    &self,
    method: Method,
    params: Params,
    result_format: ResultFormat,
  ) -> Result<ApiResponse> {
    let url = self.build_url(&self.build_params(method, result_format, params))?;
    debug!("Making request to: {}", redacted(&url));

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    let retry_after = response
      .headers()
      .get(RETRY_AFTER)
      .and_then(|v| v.to_str().ok())
      .and_then(|v| v.trim().parse::<u64>().ok());

    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with body length: {} bytes", status, text.len());

    if !status.is_success() {
      error!("Request failed with status: {}", status);
      return Err(status_error(status.as_u16(), retry_after, &text));
    }

    match result_format {
      ResultFormat::Xml => {
        check_xml_error(&text)?;
        info!("Received XML response for method: {}", method);
        Ok(ApiResponse::Xml(text))
      }
      ResultFormat::Json => {
        let document: Value = serde_json::from_str(&text).map_err(|e| {
          error!("Failed to parse JSON response: {}", e);
          Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(&text)))
        })?;

        check_api_error(&document)?;

        info!("Successfully parsed response for method: {}", method);
        Ok(ApiResponse::Json(document))
      }
    }
  }

  /// Merge the fixed parameters into the caller's filters
  ///
  /// Fixed parameters win over caller-supplied ones with the same name in
  /// any letter case.
  pub fn build_params(&self, method: Method, result_format: ResultFormat, mut params: Params) -> Params {
    set_param(&mut params, param::USER_ID, &self.api_key);
    set_param(&mut params, param::METHOD, &method.to_string());
    set_param(&mut params, param::RESULT_FORMAT, &result_format.to_string());
    params
  }

  /// Build the full URL for an API request
  fn build_url(&self, params: &Params) -> Result<Url> {
    let mut url = self.base_url.clone();

    // Sorted so logged URLs are stable between runs
    let mut pairs: Vec<_> = params.iter().collect();
    pairs.sort();

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in pairs {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }

  /// Format requests are made in
  pub fn result_format(&self) -> ResultFormat {
    self.result_format
  }

  /// Whether a non-blank API key is configured
  pub fn has_api_key(&self) -> bool {
    !self.api_key.trim().is_empty()
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("result_format", &self.result_format)
      .field("timeout", &self.timeout)
      .finish_non_exhaustive()
  }
}

/// Surface a provider error envelope as `Error::Api`
fn check_api_error(document: &Value) -> Result<()> {
  match envelope::find_error(document) {
    Some(api_error) => {
      error!("BEA returned error {}: {}", api_error.code, api_error.description);
      Err(Error::Api { code: api_error.code.clone(), description: api_error.full_description() })
    }
    None => Ok(()),
  }
}

/// XML errors arrive as an `Error` element carrying `APIErrorCode` and
/// `APIErrorDescription`, directly under `BEAAPI` or under `BEAAPI/Results`
fn check_xml_error(text: &str) -> Result<()> {
  let doc = roxmltree::Document::parse(text).map_err(|e| {
    error!("Failed to parse XML response: {}", e);
    Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(text)))
  })?;

  let root = doc.root_element();
  let error_node = find_child(root, "Error")
    .or_else(|| find_child(root, "Results").and_then(|results| find_child(results, "Error")));

  match error_node.and_then(|node| node.attribute("APIErrorCode").map(|code| (node, code))) {
    Some((node, code)) => {
      let description = node.attribute("APIErrorDescription").unwrap_or_default();
      error!("BEA returned error {}: {}", code, description);
      Err(Error::Api { code: code.to_string(), description: description.to_string() })
    }
    None => Ok(()),
  }
}

fn find_child<'a, 'input>(
  node: roxmltree::Node<'a, 'input>,
  tag: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
  node.children().find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Map a non-2xx response to an error, keeping the provider's own words when
/// the body is a BEA envelope
fn status_error(status: u16, retry_after: Option<u64>, body: &str) -> Error {
  let api_error = serde_json::from_str::<Value>(body).ok().and_then(|doc| envelope::find_error(&doc));

  match (status, api_error) {
    (429, Some(api_error)) => Error::RateLimit { description: api_error.full_description(), retry_after },
    (429, None) => Error::RateLimit { description: snippet(body), retry_after },
    (_, Some(api_error)) => {
      Error::Api { code: api_error.code.clone(), description: api_error.full_description() }
    }
    (status, None) => Error::Status { status, body: snippet(body) },
  }
}

fn snippet(text: &str) -> String {
  text.chars().take(200).collect()
}

/// URL with the `UserID` value masked, for logging
fn redacted(url: &Url) -> String {
  let mut masked = url.clone();
  let pairs: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| {
      if k == param::USER_ID {
        (k.into_owned(), "***".to_string())
      } else {
        (k.into_owned(), v.into_owned())
      }
    })
    .collect();
  masked.query_pairs_mut().clear().extend_pairs(pairs);
  masked.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_build_params_adds_fixed_values() {
    let transport = Transport::new_mock();
    let mut params = Params::new();
    params.insert("DatasetName".to_string(), "Regional".to_string());
    params.insert("method".to_string(), "Bogus".to_string());

    let params = transport.build_params(Method::GetParameterList, ResultFormat::Json, params);

    assert_eq!(params["UserID"], "test_key");
    assert_eq!(params["method"], "GetParameterList");
    assert_eq!(params["ResultFormat"], "JSON");
    assert_eq!(params["DatasetName"], "Regional");
  }

  #[test]
  fn test_build_url() {
    let transport = Transport::new_mock();
    let mut params = Params::new();
    params.insert("GeoFips".to_string(), "06000,36000".to_string());

    let params = transport.build_params(Method::GetData, ResultFormat::Json, params);
    let url = transport.build_url(&params).unwrap().to_string();

    assert!(url.starts_with("https://mock.bea.gov/api/data/?"));
    assert!(url.contains("method=GetData"));
    assert!(url.contains("GeoFips=06000%2C36000"));
    assert!(url.contains("UserID=test_key"));
  }

  #[test]
  fn test_redacted_hides_key() {
    let transport = Transport::new_mock();
    let params = transport.build_params(Method::GetDataSetList, ResultFormat::Json, Params::new());
    let url = transport.build_url(&params).unwrap();

    let logged = redacted(&url);
    assert!(!logged.contains("test_key"));
    assert!(logged.contains("method=GetDataSetList"));
  }

  #[test]
  fn test_check_api_error_invalid_key() {
    let doc = json!({
      "BEAAPI": {"Error": {"APIErrorCode": "3", "APIErrorDescription": "The UserID provided is not valid"}}
    });

    match check_api_error(&doc) {
      Err(Error::Api { code, description }) => {
        assert_eq!(code, "3");
        assert_eq!(description, "The UserID provided is not valid");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_api_error_success() {
    let doc = json!({"BEAAPI": {"Results": {"Dataset": []}}});
    assert!(check_api_error(&doc).is_ok());
  }

  #[test]
  fn test_status_error_rate_limit() {
    let body = r#"{"BEAAPI":{"Error":{"APIErrorCode":"429","APIErrorDescription":"Too many requests"}}}"#;
    match status_error(429, Some(3600), body) {
      Error::RateLimit { description, retry_after } => {
        assert_eq!(description, "Too many requests");
        assert_eq!(retry_after, Some(3600));
      }
      other => panic!("Expected RateLimit error, got {:?}", other),
    }
  }

  #[test]
  fn test_status_error_plain() {
    match status_error(502, None, "<html>Bad Gateway</html>") {
      Error::Status { status, body } => {
        assert_eq!(status, 502);
        assert_eq!(body, "<html>Bad Gateway</html>");
      }
      other => panic!("Expected Status error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_xml_error() {
    let xml = r#"<BEAAPI><Error APIErrorCode="1" APIErrorDescription="Unknown error."/></BEAAPI>"#;
    assert!(matches!(check_xml_error(xml), Err(Error::Api { code, .. }) if code == "1"));
    assert!(check_xml_error("<BEAAPI><Results/></BEAAPI>").is_ok());
  }

  #[test]
  fn test_check_xml_error_single_quoted_attributes() {
    let xml = "<BEAAPI><Error APIErrorCode='3' APIErrorDescription='The UserID provided is not valid'/></BEAAPI>";
    match check_xml_error(xml) {
      Err(Error::Api { code, description }) => {
        assert_eq!(code, "3");
        assert_eq!(description, "The UserID provided is not valid");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_xml_error_decodes_entities() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<BEAAPI><Results><Error APIErrorCode="40" APIErrorDescription="Parameter &apos;TableName&apos; &amp; more"/></Results></BEAAPI>"#;
    match check_xml_error(xml) {
      Err(Error::Api { code, description }) => {
        assert_eq!(code, "40");
        assert_eq!(description, "Parameter 'TableName' & more");
      }
      other => panic!("Expected Api error, got {:?}", other),
    }
  }

  #[test]
  fn test_check_xml_error_ignores_data_columns_named_error() {
    let xml = r#"<BEAAPI><Results><Data Error="none" DataValue="1"/></Results></BEAAPI>"#;
    assert!(check_xml_error(xml).is_ok());
  }

  #[test]
  fn test_check_xml_error_malformed_body() {
    assert!(matches!(check_xml_error("<BEAAPI><Results>"), Err(Error::Parse(_))));
  }

  #[test]
  fn test_build_params_fixed_values_win_in_any_case() {
    let transport = Transport::new_mock();
    let mut params = Params::new();
    params.insert("resultformat".to_string(), "XML".to_string());
    params.insert("userid".to_string(), "someone-else".to_string());
    params.insert("METHOD".to_string(), "GetDataSetList".to_string());
    params.insert("TableName".to_string(), "T10101".to_string());

    let params = transport.build_params(Method::GetData, ResultFormat::Json, params);
    let url = transport.build_url(&params).unwrap();

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
      pairs,
      vec![
        ("ResultFormat".to_string(), "JSON".to_string()),
        ("TableName".to_string(), "T10101".to_string()),
        ("UserID".to_string(), "test_key".to_string()),
        ("method".to_string(), "GetData".to_string()),
      ]
    );
  }

  #[test]
  fn test_set_param_replaces_case_variants() {
    let mut params = Params::new();
    params.insert("datasetname".to_string(), "NIPA".to_string());
    params.insert("DATASETNAME".to_string(), "ITA".to_string());

    set_param(&mut params, "DatasetName", "Regional");

    assert_eq!(params.len(), 1);
    assert_eq!(params["DatasetName"], "Regional");
  }

  #[test]
  fn test_snippet_respects_char_boundaries() {
    let text = "é".repeat(300);
    assert_eq!(snippet(&text).chars().count(), 200);
  }

  #[test]
  fn test_response_accessors() {
    let json = ApiResponse::Json(json!({"BEAAPI": {"Results": {"x": 1}}}));
    assert_eq!(json.results().unwrap()["x"], 1);
    assert!(json.as_xml().is_none());

    let xml = ApiResponse::Xml("<BEAAPI/>".to_string());
    assert_eq!(xml.as_xml(), Some("<BEAAPI/>"));
    assert!(matches!(xml.into_json(), Err(Error::InvalidFormat(_))));
  }
}
