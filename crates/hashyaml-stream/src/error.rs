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

//! Error types for stream decoding.
//!
//! # Error Categories
//!
//! - **I/O Errors**: Problems opening or reading the source
//! - **Charset Errors**: Unknown charset names
//! - **Limit Errors**: Lines longer than the configured maximum
//! - **Decode Errors**: Malformed lines rejected by a strict decoder
//!
//! # Error Handling Examples
//!
//! ```rust
//! use hashyaml_core::{Decoder, DecoderConfig};
//! use hashyaml_stream::{StreamError, StreamingDecoder};
//! use std::io::Cursor;
//!
//! let strict = Decoder::with_config(DecoderConfig::default().with_strict(true));
//! let decoder = StreamingDecoder::new(strict);
//!
//! match decoder.decode(Cursor::new("a: 1\nurl: http://host\n")) {
//!     Err(StreamError::Decode(e)) => assert_eq!(e.line, 2),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use hashyaml_core::DecodeError;
use thiserror::Error;

/// Errors that can occur while decoding from a byte source.
#[derive(Error, Debug)]
pub enum StreamError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested charset is not supported.
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// Line exceeds the configured maximum length.
    #[error("Line {line} exceeds the maximum length of {max} bytes")]
    LineTooLong { line: usize, max: usize },

    /// A strict decoder rejected a line.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl StreamError {
    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::LineTooLong { line, .. } => Some(*line),
            Self::Decode(e) => Some(e.line),
            Self::Io(_) | Self::UnsupportedCharset(_) => None,
        }
    }
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hashyaml_core::DecodeErrorKind;

    #[test]
    fn test_line_extraction() {
        assert_eq!(StreamError::LineTooLong { line: 9, max: 10 }.line(), Some(9));
        let decode = DecodeError::new(DecodeErrorKind::EmptyKey, "no key", 4);
        assert_eq!(StreamError::from(decode).line(), Some(4));
        assert_eq!(StreamError::UnsupportedCharset("EBCDIC".into()).line(), None);
    }

    #[test]
    fn test_display() {
        let err = StreamError::LineTooLong { line: 5, max: 80 };
        assert_eq!(err.to_string(), "Line 5 exceeds the maximum length of 80 bytes");
        assert_eq!(
            StreamError::UnsupportedCharset("KOI8-R".into()).to_string(),
            "Unsupported charset: KOI8-R"
        );
    }

    #[test]
    fn test_decode_error_transparent() {
        let decode = DecodeError::new(DecodeErrorKind::TruncatedValue, "cut", 2);
        let expected = decode.to_string();
        assert_eq!(StreamError::from(decode).to_string(), expected);
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StreamError = io.into();
        assert!(matches!(err, StreamError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
