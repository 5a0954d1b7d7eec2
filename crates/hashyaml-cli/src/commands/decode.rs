// HashYAML - Flat-path decoder for indentation-structured configuration
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decode command - flatten a file into path/value entries.

use super::parse_charset;
use crate::error::CliError;
use clap::ValueEnum;
use hashyaml_core::{Decoder, DecoderConfig, Document};
use hashyaml_stream::{StreamingDecoder, StreamingDecoderConfig};
use std::io::Write;
use tracing::info;

/// Output format for decoded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `path:value` line per entry
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Options for [`decode`].
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    pub indent: usize,
    pub delimiter: String,
    pub charset: String,
    pub strict: bool,
    pub or_empty: bool,
    pub format: OutputFormat,
}

/// Decode `file` and write the entries to `out`.
///
/// # Errors
///
/// Returns `Err` if the options are invalid, or if decoding fails and
/// `or_empty` is not set.
///
/// # Examples
///
/// ```no_run
/// use hashyaml_cli::commands::{decode, DecodeOptions, OutputFormat};
///
/// # fn main() -> Result<(), hashyaml_cli::error::CliError> {
/// let options = DecodeOptions {
///     indent: 2,
///     delimiter: ".".to_string(),
///     charset: "UTF-8".to_string(),
///     strict: false,
///     or_empty: false,
///     format: OutputFormat::Json,
/// };
/// decode("settings.yml", &options, &mut std::io::stdout())?;
/// # Ok(())
/// # }
/// ```
pub fn decode<W: Write>(file: &str, options: &DecodeOptions, out: &mut W) -> Result<(), CliError> {
    let config = DecoderConfig::new(options.indent, options.delimiter.as_str())?
        .with_strict(options.strict);
    let stream_config = StreamingDecoderConfig {
        charset: parse_charset(&options.charset)?,
        ..Default::default()
    };
    let decoder = StreamingDecoder::with_config(Decoder::with_config(config), stream_config);

    let doc = if options.or_empty {
        decoder.decode_file_or_empty(file)
    } else {
        decoder
            .decode_file(file)
            .map_err(|e| CliError::from_stream(file, e))?
    };
    info!(file, entries = doc.len(), "decoded");

    match options.format {
        OutputFormat::Text => write_text(&doc, out).map_err(|e| CliError::io_error("<stdout>", e)),
        OutputFormat::Json => write_json(&doc, out),
    }
}

fn write_text<W: Write>(doc: &Document, out: &mut W) -> std::io::Result<()> {
    for (path, value) in doc {
        writeln!(out, "{}:{}", path, value)?;
    }
    Ok(())
}

fn write_json<W: Write>(doc: &Document, out: &mut W) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(doc)?;
    writeln!(out, "{}", json).map_err(|e| CliError::io_error("<stdout>", e))
}
