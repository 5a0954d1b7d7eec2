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

//! HashYAML Command Line Interface

use clap::Parser;
use hashyaml_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// HashYAML - flat path decoder for indented configuration files
///
/// # Examples
///
/// ```bash
/// # Print every path and value
/// hashyaml decode settings.yml
///
/// # Dotted paths, four-space indentation, JSON output
/// hashyaml decode settings.yml --indent 4 --delimiter . --format json
///
/// # Show the lines the decoder will act on
/// hashyaml dump settings.yml
/// ```
#[derive(Parser)]
#[command(name = "hashyaml")]
#[command(author, version, about = "HashYAML - flat path decoder for indented configuration files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logging goes to stderr so it never mixes with decoded output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("hashyaml=warn".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command.execute(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
