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

//! Line reader for the streaming decoder.
//!
//! Provides buffered line-by-line reading with line number tracking,
//! charset transcoding, and a maximum line length.

use crate::charset::Charset;
use crate::error::{StreamError, StreamResult};
use encoding_rs_io::DecodeReaderBytes;
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// The source is transcoded to UTF-8 with the configured [`Charset`], then
/// split into lines. A line ends at `\n`, `\r`, or `\r\n`; the terminator is
/// not part of the returned text.
///
/// # Examples
///
/// ```rust
/// use hashyaml_stream::{Charset, LineReader};
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("a: 1\r\nb: 2\rc: 3"), Charset::utf8());
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "a: 1".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "b: 2".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((3, "c: 3".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<DecodeReaderBytes<R, Vec<u8>>>,
    charset: Charset,
    line_number: usize,
    max_line_length: usize,
    buffer: Vec<u8>,
    /// The previous line ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl<R: Read> LineReader<R> {
    /// Default maximum line length in bytes.
    pub const DEFAULT_MAX_LINE_LENGTH: usize = 1_000_000;

    /// Smallest read buffer handed to the transcoder.
    pub const MIN_CAPACITY: usize = 64;

    /// Create a new line reader.
    pub fn new(reader: R, charset: Charset) -> Self {
        Self::with_capacity(reader, charset, 8 * 1024)
    }

    /// Create with a specific buffer capacity, raised to at least
    /// [`MIN_CAPACITY`](Self::MIN_CAPACITY) bytes.
    pub fn with_capacity(reader: R, charset: Charset, capacity: usize) -> Self {
        let capacity = capacity.max(Self::MIN_CAPACITY);
        Self {
            reader: BufReader::with_capacity(capacity, charset.transcode(reader)),
            charset,
            line_number: 0,
            max_line_length: Self::DEFAULT_MAX_LINE_LENGTH,
            buffer: Vec::new(),
            skip_lf: false,
        }
    }

    /// Set the maximum accepted line length in UTF-8 bytes, terminator
    /// excluded. Reading stops as soon as a line grows past it.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Get the current line number.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[inline]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        self.buffer.clear();

        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        let mut read_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            read_any = true;

            let end = available.iter().position(|&b| b == b'\n' || b == b'\r');
            let take = end.unwrap_or(available.len());
            if self.buffer.len() + take > self.max_line_length {
                return Err(StreamError::LineTooLong {
                    line: self.line_number + 1,
                    max: self.max_line_length,
                });
            }
            self.buffer.extend_from_slice(&available[..take]);

            match end {
                Some(pos) => {
                    self.skip_lf = available[pos] == b'\r';
                    self.reader.consume(pos + 1);
                    break;
                }
                None => self.reader.consume(take),
            }
        }

        if !read_any {
            return Ok(None);
        }
        self.line_number += 1;

        // The transcoder only emits UTF-8 and lines split on ASCII bytes.
        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        Ok(Some((self.line_number, line)))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = StreamResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
