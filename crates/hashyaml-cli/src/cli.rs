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

//! CLI command definitions and argument parsing.

use crate::commands::{self, DecodeOptions, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;
use std::io::Write;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use hashyaml_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a file into flat `path:value` entries
    ///
    /// Nested keys are joined with the delimiter; sequences print as
    /// `[a, b]` in text output and as arrays in JSON output.
    Decode {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Spaces per indentation level (at least 2)
        #[arg(short, long, default_value_t = 2)]
        indent: usize,

        /// Path segment delimiter
        #[arg(short, long, default_value = "/")]
        delimiter: String,

        /// Input charset label (UTF-8, ISO-8859-1, Shift_JIS, EUC-JP, ...)
        #[arg(short, long, default_value = "UTF-8")]
        charset: String,

        /// Fail on malformed lines instead of degrading them
        #[arg(short, long)]
        strict: bool,

        /// Print an empty result instead of failing on unreadable input
        #[arg(long)]
        or_empty: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the non-blank, non-comment lines of a file
    Dump {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Input charset label (UTF-8, ISO-8859-1, Shift_JIS, EUC-JP, ...)
        #[arg(short, long, default_value = "UTF-8")]
        charset: String,
    },
}

impl Commands {
    /// Execute the command, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if options are invalid, the file cannot be read or
    /// decoded, or output cannot be written.
    pub fn execute<W: Write>(self, out: &mut W) -> Result<(), CliError> {
        match self {
            Commands::Decode {
                file,
                indent,
                delimiter,
                charset,
                strict,
                or_empty,
                format,
            } => commands::decode(
                &file,
                &DecodeOptions {
                    indent,
                    delimiter,
                    charset,
                    strict,
                    or_empty,
                    format,
                },
                out,
            ),
            Commands::Dump { file, charset } => commands::dump(&file, &charset, out),
        }
    }
}
