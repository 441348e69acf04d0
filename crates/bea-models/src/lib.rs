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

//! # bea-models
//!
//! Data models for Bureau of Economic Analysis API responses.
//!
//! The client hands back the server's JSON untouched. These types are optional
//! typed views over that document: the `BEAAPI` envelope, the discovery
//! metadata (datasets, parameters, parameter values) and `GetData` rows.
//!
//! ## Usage
//!
//! ```ignore
//! use bea_models::{envelope, ParameterList};
//!
//! let results = envelope::results(&document).cloned().unwrap_or_default();
//! let list: ParameterList = serde_json::from_value(results)?;
//! ```

#![warn(clippy::all)]

pub mod data;
pub mod envelope;
pub mod metadata;

pub use data::*;
pub use envelope::{ApiEnvelope, ApiError, BeaApi, RequestEcho, RequestParameter};
pub use metadata::*;
