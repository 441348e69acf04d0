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

//! Configuration management for the BEA client

use crate::error::{Error, Result};
use crate::types::ResultFormat;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the BEA client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// BEA API key (the `UserID` query parameter). Never serialized.
  #[serde(skip_serializing)]
  pub api_key: String,

  /// Base URL for the BEA data API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Format the server should answer in
  pub result_format: ResultFormat,
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads `.env` first if present. `BEA_API_KEY` is required; `BEA_BASE_URL`,
  /// `BEA_TIMEOUT_SECS` and `BEA_RESULT_FORMAT` fall back to defaults.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("BEA_API_KEY").map_err(|_| Error::ApiKey("BEA_API_KEY not set".to_string()))?;

    let timeout_secs: u64 = env::var("BEA_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid BEA_TIMEOUT_SECS".to_string()))?;
    if timeout_secs == 0 {
      return Err(Error::Config("BEA_TIMEOUT_SECS must be at least 1".to_string()));
    }

    let result_format = match env::var("BEA_RESULT_FORMAT") {
      Ok(value) => value.parse()?,
      Err(_) => ResultFormat::Json,
    };

    let base_url = env::var("BEA_BASE_URL").unwrap_or_else(|_| crate::BEA_BASE_URL.to_string());
    Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid BEA_BASE_URL `{}`: {}", base_url, e)))?;

    Ok(Config { api_key, base_url, timeout_secs, result_format })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::BEA_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      result_format: ResultFormat::Json,
    }
  }

  /// Whether an API key has been supplied
  pub fn has_api_key(&self) -> bool {
    !self.api_key.trim().is_empty()
  }
}

// The key is a credential, keep it out of logs.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .field("result_format", &self.result_format)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // Environment variables are process-wide, so every case runs in one test.
  #[test]
  fn test_config_from_env() {
    env::set_var("BEA_API_KEY", "test_key");
    env::set_var("BEA_RESULT_FORMAT", "xml");
    env::remove_var("BEA_TIMEOUT_SECS");
    env::remove_var("BEA_BASE_URL");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.result_format, ResultFormat::Xml);
    assert_eq!(config.base_url, crate::BEA_BASE_URL);

    env::set_var("BEA_TIMEOUT_SECS", "0");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, Error::Config(msg) if msg.contains("BEA_TIMEOUT_SECS")));

    env::set_var("BEA_TIMEOUT_SECS", "5");
    assert_eq!(Config::from_env().unwrap().timeout_secs, 5);

    env::remove_var("BEA_TIMEOUT_SECS");
    env::remove_var("BEA_RESULT_FORMAT");
  }

  #[test]
  fn test_serialized_config_omits_key() {
    let config = Config::default_with_key("super-secret".to_string());
    let rendered = serde_json::to_string(&config).unwrap();
    assert!(!rendered.contains("super-secret"));
    assert!(!rendered.contains("api_key"));
    assert!(rendered.contains("base_url"));
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("abc".to_string());
    assert!(config.has_api_key());
    assert_eq!(config.result_format, ResultFormat::Json);
    assert!(!Config::default_with_key("  ".to_string()).has_api_key());
  }

  #[test]
  fn test_debug_redacts_key() {
    let config = Config::default_with_key("super-secret".to_string());
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
  }
}
