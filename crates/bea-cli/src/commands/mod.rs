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

pub mod data;
pub mod metadata;
pub mod output;

use bea_core::Dataset;

/// clap value parser for dataset names
pub fn parse_dataset(s: &str) -> Result<Dataset, String> {
  s.parse::<Dataset>().map_err(|e| e.to_string())
}

/// clap value parser for `KEY=VALUE` pairs
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
  let (key, value) =
    s.split_once('=').ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
  let key = key.trim();
  if key.is_empty() {
    return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
  }
  Ok((key.to_string(), value.trim().to_string()))
}
