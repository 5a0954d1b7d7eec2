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

//! Decoder configuration.
//!
//! A [`DecoderConfig`] is fixed when a decoder is built. Every constructor
//! that accepts caller-supplied values validates them, so an invalid
//! configuration cannot exist.

use crate::error::ConfigError;

/// Configuration for a [`Decoder`](crate::Decoder).
///
/// # Examples
///
/// ```
/// use hashyaml_core::{ConfigError, DecoderConfig};
///
/// // Two-space indent, `/` delimiter, lenient decoding
/// let config = DecoderConfig::default();
/// assert_eq!(config.indent_unit(), 2);
/// assert_eq!(config.delimiter(), "/");
/// assert!(!config.is_strict());
///
/// // Four-space indent, dotted paths, malformed lines rejected
/// let config = DecoderConfig::new(4, ".")?.with_strict(true);
/// assert_eq!(config.indent_unit(), 4);
/// assert!(config.is_strict());
///
/// // Invalid values fail immediately
/// assert_eq!(
///     DecoderConfig::new(1, "/"),
///     Err(ConfigError::IndentUnitTooSmall { got: 1, min: 2 })
/// );
/// assert_eq!(DecoderConfig::new(2, ""), Err(ConfigError::EmptyDelimiter));
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Width in spaces of one nesting level.
    indent_unit: usize,
    /// String joining path segments.
    delimiter: String,
    /// Report malformed lines instead of degrading them.
    strict: bool,
}

impl DecoderConfig {
    /// Default width of one indent level.
    pub const DEFAULT_INDENT_UNIT: usize = 2;

    /// Narrowest accepted indent level.
    pub const MIN_INDENT_UNIT: usize = 2;

    /// Default path delimiter.
    pub const DEFAULT_DELIMITER: &'static str = "/";

    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IndentUnitTooSmall`] when `indent_unit < 2` and
    /// [`ConfigError::EmptyDelimiter`] when `delimiter` is empty.
    pub fn new(indent_unit: usize, delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        validate_indent_unit(indent_unit)?;
        validate_delimiter(&delimiter)?;
        Ok(Self {
            indent_unit,
            delimiter,
            strict: false,
        })
    }

    /// Replace the indent unit, re-validating it.
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Result<Self, ConfigError> {
        validate_indent_unit(indent_unit)?;
        self.indent_unit = indent_unit;
        Ok(self)
    }

    /// Replace the path delimiter, re-validating it.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        validate_delimiter(&delimiter)?;
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Turn strict mode on or off.
    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[inline]
    pub fn indent_unit(&self) -> usize {
        self.indent_unit
    }

    #[inline]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            indent_unit: Self::DEFAULT_INDENT_UNIT,
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
            strict: false,
        }
    }
}

fn validate_indent_unit(indent_unit: usize) -> Result<(), ConfigError> {
    if indent_unit < DecoderConfig::MIN_INDENT_UNIT {
        return Err(ConfigError::IndentUnitTooSmall {
            got: indent_unit,
            min: DecoderConfig::MIN_INDENT_UNIT,
        });
    }
    Ok(())
}

fn validate_delimiter(delimiter: &str) -> Result<(), ConfigError> {
    if delimiter.is_empty() {
        return Err(ConfigError::EmptyDelimiter);
    }
    Ok(())
}
