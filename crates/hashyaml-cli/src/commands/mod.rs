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

//! CLI command implementations

mod decode;
mod dump;

pub use decode::{decode, DecodeOptions, OutputFormat};
pub use dump::dump;

use crate::error::CliError;
use hashyaml_stream::Charset;

/// Parse a charset name given on the command line.
fn parse_charset(name: &str) -> Result<Charset, CliError> {
    name.parse::<Charset>()
        .map_err(|_| CliError::Charset(name.to_string()))
}
