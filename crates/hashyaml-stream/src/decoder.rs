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

//! Streaming decoder implementation.
//!
//! Lines are pulled from a [`LineReader`] and pushed straight into a
//! [`LineDecoder`](hashyaml_core::LineDecoder); only the current line and the
//! decoding state are held in memory, never the whole input.

use crate::charset::Charset;
use crate::error::StreamResult;
use crate::reader::LineReader;
use hashyaml_core::{Decoder, Document};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for the byte-stream front-end.
///
/// # Examples
///
/// ```rust
/// use hashyaml_stream::{Charset, StreamingDecoderConfig};
///
/// let config = StreamingDecoderConfig::default();
/// assert_eq!(config.charset, Charset::utf8());
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert_eq!(config.max_line_length, 1_000_000);
///
/// let sjis = StreamingDecoderConfig {
///     charset: "Shift_JIS".parse()?,
///     ..Default::default()
/// };
/// assert_eq!(sjis.charset.name(), "Shift_JIS");
/// # Ok::<(), hashyaml_stream::StreamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingDecoderConfig {
    /// Charset the input is transcoded from.
    ///
    /// Default: UTF-8
    pub charset: Charset,

    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Maximum line length in bytes.
    ///
    /// Lines exceeding this length abort decoding with
    /// `StreamError::LineTooLong`.
    ///
    /// Default: 1,000,000 bytes (1MB)
    pub max_line_length: usize,
}

impl Default for StreamingDecoderConfig {
    fn default() -> Self {
        Self {
            charset: Charset::utf8(),
            buffer_size: 64 * 1024,
            max_line_length: 1_000_000,
        }
    }
}

/// Decodes HashYAML from files and readers.
///
/// # Examples
///
/// ```rust
/// use hashyaml_core::Decoder;
/// use hashyaml_stream::StreamingDecoder;
/// use std::io::Cursor;
///
/// let decoder = StreamingDecoder::new(Decoder::new());
/// let doc = decoder.decode(Cursor::new("items:\n  - alpha\n  - beta\n"))?;
/// assert_eq!(doc.get_sequence("items").map(<[String]>::len), Some(2));
///
/// // Failures can be swallowed into an empty document
/// let doc = decoder.decode_file_or_empty("/definitely/not/here.yml");
/// assert!(doc.is_empty());
/// # Ok::<(), hashyaml_stream::StreamError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamingDecoder {
    decoder: Decoder,
    config: StreamingDecoderConfig,
}

impl StreamingDecoder {
    /// Create a streaming decoder with the default stream configuration.
    pub fn new(decoder: Decoder) -> Self {
        Self::with_config(decoder, StreamingDecoderConfig::default())
    }

    pub fn with_config(decoder: Decoder, config: StreamingDecoderConfig) -> Self {
        Self { decoder, config }
    }

    #[inline]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    #[inline]
    pub fn config(&self) -> &StreamingDecoderConfig {
        &self.config
    }

    /// Decode everything `reader` yields.
    ///
    /// # Errors
    ///
    /// Returns `StreamError` on read failures, over-long lines, and lines
    /// rejected by a strict decoder. Bytes that are malformed in the charset
    /// decode to U+FFFD and do not fail the read.
    pub fn decode<R: Read>(&self, reader: R) -> StreamResult<Document> {
        let lines = LineReader::with_capacity(reader, self.config.charset, self.config.buffer_size)
            .with_max_line_length(self.config.max_line_length);

        let mut session = self.decoder.line_decoder();
        for line in lines {
            let (_, text) = line?;
            session.push_line(&text)?;
        }
        Ok(session.finish())
    }

    /// Open and decode the file at `path`.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> StreamResult<Document> {
        let path = path.as_ref();
        debug!(path = %path.display(), charset = %self.config.charset, "decoding file");
        let file = File::open(path)?;
        self.decode(file)
    }

    /// Like [`decode`](Self::decode), but any failure yields an empty
    /// document.
    pub fn decode_or_empty<R: Read>(&self, reader: R) -> Document {
        self.decode(reader).unwrap_or_else(|e| {
            warn!(error = %e, "decode failed, returning empty document");
            Document::new()
        })
    }

    /// Like [`decode_file`](Self::decode_file), but any failure yields an
    /// empty document.
    pub fn decode_file_or_empty<P: AsRef<Path>>(&self, path: P) -> Document {
        let path = path.as_ref();
        self.decode_file(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "decode failed, returning empty document");
            Document::new()
        })
    }
}
