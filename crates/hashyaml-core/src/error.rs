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

//! Error types for HashYAML decoding.

use std::fmt;
use thiserror::Error;

/// Invalid decoder configuration.
///
/// Raised synchronously when a [`DecoderConfig`](crate::DecoderConfig) is
/// built, never at first use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The indent unit is narrower than the minimum width.
    #[error("indent unit must be at least {min} spaces, got {got}")]
    IndentUnitTooSmall {
        /// The rejected width.
        got: usize,
        /// The minimum accepted width.
        min: usize,
    },

    /// The path delimiter is the empty string.
    #[error("path delimiter must not be empty")]
    EmptyDelimiter,
}

/// The kind of malformed line reported in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A `-` line that does not split into exactly one marker and one item.
    MalformedSequenceItem,
    /// A mapping value containing a colon, which would be cut at that colon.
    TruncatedValue,
    /// A mapping line whose key is empty after trimming.
    EmptyKey,
    /// A tab character inside the indentation of a mapping line.
    TabInIndentation,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSequenceItem => write!(f, "MalformedSequenceItem"),
            Self::TruncatedValue => write!(f, "TruncatedValue"),
            Self::EmptyKey => write!(f, "EmptyKey"),
            Self::TabInIndentation => write!(f, "TabInIndentation"),
        }
    }
}

/// A malformed line rejected by a strict decoder.
///
/// Lenient decoders (the default) never produce this error; they take the
/// documented fallback for each [`DecodeErrorKind`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct DecodeError {
    /// The kind of error.
    pub kind: DecodeErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based).
    pub line: usize,
}

impl DecodeError {
    /// Create a new error.
    pub fn new(kind: DecodeErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn malformed_sequence_item(message: impl Into<String>, line: usize) -> Self {
        Self::new(DecodeErrorKind::MalformedSequenceItem, message, line)
    }

    pub fn truncated_value(message: impl Into<String>, line: usize) -> Self {
        Self::new(DecodeErrorKind::TruncatedValue, message, line)
    }

    pub fn empty_key(message: impl Into<String>, line: usize) -> Self {
        Self::new(DecodeErrorKind::EmptyKey, message, line)
    }

    pub fn tab_in_indentation(message: impl Into<String>, line: usize) -> Self {
        Self::new(DecodeErrorKind::TabInIndentation, message, line)
    }
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
