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

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Dataset, Frequency, ResultFormat, Selection};

/// The API methods the BEA exposes through the `method` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
  GetDataSetList,
  GetParameterList,
  GetParameterValues,
  GetParameterValuesFiltered,
  GetData,
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Method::GetDataSetList => write!(f, "GetDataSetList"),
      Method::GetParameterList => write!(f, "GetParameterList"),
      Method::GetParameterValues => write!(f, "GetParameterValues"),
      Method::GetParameterValuesFiltered => write!(f, "GetParameterValuesFiltered"),
      Method::GetData => write!(f, "GetData"),
    }
  }
}

/// Base URL for the BEA data API
pub const BEA_BASE_URL: &str = "https://apps.bea.gov/api/data/";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameter names shared by every request
pub mod param {
  pub const USER_ID: &str = "UserID";
  pub const METHOD: &str = "method";
  pub const RESULT_FORMAT: &str = "ResultFormat";
  pub const DATASET_NAME: &str = "DatasetName";
}

/// Server-side limits published by the BEA. The client does not enforce them;
/// exceeding any of them makes the server answer with an error until the
/// one-minute window expires.
pub mod limits {
  /// Requests per minute
  pub const CALLS_PER_MINUTE: u32 = 1000;
  /// Error responses per minute
  pub const ERRORS_PER_MINUTE: u32 = 30;
  /// Raw data volume per minute, in megabytes
  pub const DATA_MB_PER_MINUTE: u32 = 200;
}
