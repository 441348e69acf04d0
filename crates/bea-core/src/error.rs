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

use thiserror::Error;

/// The main error type for bea-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// A required request parameter was empty. Raised before any network I/O.
  #[error("Missing required parameter: {0}")]
  MissingParameter(String),

  /// Result format other than JSON or XML
  #[error("Incorrect format `{0}`, please set to either `XML` or `JSON`")]
  InvalidFormat(String),

  /// Dataset name the API does not publish
  #[error("Unknown dataset: {0}")]
  UnknownDataset(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),

  /// HTTP transport error (connection, timeout, client construction)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-2xx response that carried no BEA error envelope
  #[error("HTTP status {status}: {body}")]
  Status {
    /// Response status code
    status: u16,
    /// Leading part of the response body
    body: String,
  },

  /// The BEA throttled the caller (HTTP 429)
  #[error("Rate limit exceeded: {description}")]
  RateLimit {
    /// Explanation returned by the server
    description: String,
    /// Seconds until the window expires, from `Retry-After`
    retry_after: Option<u64>,
  },

  /// Error envelope returned by the BEA
  #[error("API error {code}: {description}")]
  Api {
    /// `APIErrorCode` as sent by the server
    code: String,
    /// `APIErrorDescription` as sent by the server
    description: String,
  },

  /// Response body was not valid JSON
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// True for errors reported by the BEA itself rather than by the local transport
  pub fn is_provider_error(&self) -> bool {
    matches!(self, Error::Api { .. } | Error::RateLimit { .. })
  }
}

/// Result type alias for bea-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_provider_errors_are_distinct_from_transport_errors() {
    let api = Error::Api { code: "3".to_string(), description: "Invalid UserID".to_string() };
    let limit = Error::RateLimit { description: "too many".to_string(), retry_after: Some(60) };
    let http = Error::Http("connection refused".to_string());

    assert!(api.is_provider_error());
    assert!(limit.is_provider_error());
    assert!(!http.is_provider_error());
    assert!(!Error::Parse("eof".to_string()).is_provider_error());
  }

  #[test]
  fn test_api_error_display_keeps_provider_text() {
    let err = Error::Api {
      code: "40".to_string(),
      description: "The dataset requested requires parameter TableName".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "API error 40: The dataset requested requires parameter TableName"
    );
  }
}
