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

//! HashYAML CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **decode**: Flatten a file into `path:value` entries (text or JSON)
//! - **dump**: Echo the non-blank, non-comment lines of a file
//!
//! # Examples
//!
//! ```no_run
//! use hashyaml_cli::commands::dump;
//!
//! # fn main() -> Result<(), hashyaml_cli::error::CliError> {
//! dump("settings.yml", "UTF-8", &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
