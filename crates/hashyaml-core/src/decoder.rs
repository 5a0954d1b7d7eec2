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

//! Line-by-line decoding.
//!
//! [`LineDecoder`] holds the state of one decoding session: the key-path
//! stack, the path established by the latest mapping line, and the sequence
//! currently being collected for it. [`Decoder`] is the reusable front door
//! that owns a configuration and starts a fresh session per call.
//!
//! # Basic Usage
//!
//! ```rust
//! use hashyaml_core::{Decoder, DecoderConfig, Value};
//!
//! let decoder = Decoder::with_config(DecoderConfig::new(2, ".")?);
//! let doc = decoder.decode_str("a: 1\nb:\n  c: \"x\"\n")?;
//!
//! assert_eq!(doc.get("a"), Some(&Value::from("1")));
//! assert_eq!(doc.get("a.b.c"), Some(&Value::from("x")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feeding Lines Incrementally
//!
//! ```rust
//! use hashyaml_core::Decoder;
//!
//! let decoder = Decoder::new();
//! let mut session = decoder.line_decoder();
//! for line in ["items:", "  - alpha", "  - beta"] {
//!     session.push_line(line)?;
//! }
//! let doc = session.finish();
//!
//! assert_eq!(doc.get_sequence("items").map(<[String]>::len), Some(2));
//! # Ok::<(), hashyaml_core::DecodeError>(())
//! ```

use crate::config::DecoderConfig;
use crate::document::Document;
use crate::error::{ConfigError, DecodeError, DecodeResult};
use crate::line::{classify, split_lines, LineKind, MappingEntry, SequenceItem};
use crate::path::KeyPathTracker;
use tracing::{debug, trace};

/// State of a single decoding session.
///
/// Lines are pushed in document order; [`finish`](Self::finish) flushes the
/// last pending sequence and hands back the document. A session is never
/// shared, so independent sessions may run on different threads freely.
#[derive(Debug)]
pub struct LineDecoder {
    indent_unit: usize,
    strict: bool,
    tracker: KeyPathTracker,
    current_path: String,
    pending: Option<Vec<String>>,
    document: Document,
    line_number: usize,
}

impl LineDecoder {
    /// Start a session for `config`.
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            indent_unit: config.indent_unit(),
            strict: config.is_strict(),
            tracker: KeyPathTracker::new(config.delimiter()),
            current_path: String::new(),
            pending: None,
            document: Document::new(),
            line_number: 0,
        }
    }

    /// Number of lines pushed so far, skipped lines included.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Path established by the most recent mapping line.
    #[inline]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Items collected for the current path but not yet committed.
    #[inline]
    pub fn pending_items(&self) -> Option<&[String]> {
        self.pending.as_deref()
    }

    /// The document built so far.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Decode one line.
    ///
    /// # Errors
    ///
    /// Only a strict session returns errors. The offending line leaves the
    /// session untouched, so the caller may keep pushing lines afterwards.
    pub fn push_line(&mut self, line: &str) -> DecodeResult<()> {
        self.line_number += 1;

        match classify(line, self.indent_unit) {
            LineKind::Skip => Ok(()),
            LineKind::SequenceItem(item) => self.push_sequence_item(item),
            LineKind::MappingEntry(entry) => self.push_mapping_entry(entry),
        }
    }

    /// Flush any pending sequence, reset the key stack, and return the
    /// document.
    pub fn finish(mut self) -> Document {
        self.commit_pending();
        self.tracker.reset();

        debug!(
            lines = self.line_number,
            entries = self.document.len(),
            "decoded document"
        );
        self.document
    }

    fn push_sequence_item(&mut self, item: SequenceItem<'_>) -> DecodeResult<()> {
        if let SequenceItem::Malformed { fields } = item {
            if self.strict {
                return Err(DecodeError::malformed_sequence_item(
                    format!("expected one '-' marker and one item, found {} fields", fields),
                    self.line_number,
                ));
            }
            trace!(line = self.line_number, fields, "malformed sequence item recorded as empty");
        }

        self.pending
            .get_or_insert_with(Vec::new)
            .push(item.text().to_string());
        Ok(())
    }

    fn push_mapping_entry(&mut self, entry: MappingEntry<'_>) -> DecodeResult<()> {
        self.check_entry(&entry)?;

        self.commit_pending();
        self.current_path = self.tracker.advance(entry.indent.depth, entry.key);

        if let Some(value) = entry.value {
            self.document.insert(self.current_path.clone(), value);
        }
        Ok(())
    }

    /// Reject or log the degraded forms of a mapping line.
    fn check_entry(&self, entry: &MappingEntry<'_>) -> DecodeResult<()> {
        let line = self.line_number;

        if entry.indent.has_tab {
            if self.strict {
                return Err(DecodeError::tab_in_indentation(
                    format!("tab in indentation of key '{}'", entry.key),
                    line,
                ));
            }
            trace!(line, key = entry.key, "tab in indentation ignored");
        }

        if entry.key.is_empty() {
            if self.strict {
                return Err(DecodeError::empty_key("mapping line has no key", line));
            }
            trace!(line, "empty key accepted");
        }

        if let Some(dropped) = entry.dropped {
            if self.strict {
                return Err(DecodeError::truncated_value(
                    format!(
                        "value of '{}' contains ':'; '{}' would be dropped",
                        entry.key, dropped
                    ),
                    line,
                ));
            }
            trace!(line, key = entry.key, dropped, "value truncated at ':'");
        }

        Ok(())
    }

    fn commit_pending(&mut self) {
        if let Some(items) = self.pending.take() {
            if !items.is_empty() {
                trace!(path = %self.current_path, items = items.len(), "committing sequence");
                self.document.insert(self.current_path.clone(), items);
            }
        }
    }
}

/// Reusable decoder holding a validated configuration.
///
/// Decoding borrows the decoder immutably and builds a fresh
/// [`LineDecoder`] per call, so one `Decoder` can serve many threads.
///
/// # Examples
///
/// ```rust
/// use hashyaml_core::{ConfigError, Decoder};
///
/// let decoder = Decoder::with_options(4, "::")?;
/// let doc = decoder.decode_str("root:\n    leaf: v\n").unwrap();
/// assert_eq!(doc.get_scalar("root::leaf"), Some("v"));
///
/// assert!(Decoder::with_options(1, "/").is_err());
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder from an indent unit and a delimiter.
    pub fn with_options(
        indent_unit: usize,
        delimiter: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        DecoderConfig::new(indent_unit, delimiter).map(Self::with_config)
    }

    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Start an incremental decoding session.
    pub fn line_decoder(&self) -> LineDecoder {
        LineDecoder::new(&self.config)
    }

    /// Decode a sequence of lines.
    pub fn decode_lines<I>(&self, lines: I) -> DecodeResult<Document>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut session = self.line_decoder();
        for line in lines {
            session.push_line(line.as_ref())?;
        }
        Ok(session.finish())
    }

    /// Decode a whole document held in memory. Lines end at LF, CRLF or a
    /// lone CR.
    pub fn decode_str(&self, input: &str) -> DecodeResult<Document> {
        self.decode_lines(split_lines(input))
    }
}

/// Decode `input` with the default configuration.
pub fn decode(input: &str) -> DecodeResult<Document> {
    Decoder::new().decode_str(input)
}
