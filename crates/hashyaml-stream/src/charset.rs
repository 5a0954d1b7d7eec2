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

//! Text encodings accepted by the byte-stream front-end.
//!
//! Charset names are resolved through the WHATWG label table of
//! `encoding_rs`, and the input is transcoded to UTF-8 before it is split
//! into lines. Bytes that are malformed in the selected encoding decode to
//! U+FFFD instead of failing the read.

use crate::error::{StreamError, StreamResult};
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

/// A text encoding for reading HashYAML sources.
///
/// # Examples
///
/// ```
/// use hashyaml_stream::Charset;
///
/// assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::utf8());
/// assert_eq!("Shift_JIS".parse::<Charset>().unwrap().name(), "Shift_JIS");
/// assert_eq!("EUC-JP".parse::<Charset>().unwrap().name(), "EUC-JP");
/// assert!("EBCDIC".parse::<Charset>().is_err());
///
/// assert_eq!(Charset::utf8().decode(b"caf\xe9"), "caf\u{FFFD}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// UTF-8, the default.
    #[inline]
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Resolve a charset name such as `UTF-8`, `ISO-8859-1` or `Shift_JIS`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::UnsupportedCharset`] for unknown names and for
    /// labels that only map to the WHATWG replacement encoding.
    pub fn for_label(name: &str) -> StreamResult<Self> {
        match Encoding::for_label(name.trim().as_bytes()) {
            Some(encoding) if encoding != encoding_rs::REPLACEMENT => Ok(Self(encoding)),
            _ => Err(StreamError::UnsupportedCharset(name.to_string())),
        }
    }

    /// Canonical name of the encoding.
    #[inline]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    #[inline]
    pub fn encoding(self) -> &'static Encoding {
        self.0
    }

    /// Decode a complete byte string, replacing malformed sequences.
    pub fn decode(self, bytes: &[u8]) -> String {
        let (text, _) = self.0.decode_without_bom_handling(bytes);
        text.into_owned()
    }

    /// Wrap `reader` so it yields the input transcoded to UTF-8.
    pub(crate) fn transcode<R: Read>(self, reader: R) -> DecodeReaderBytes<R, Vec<u8>> {
        DecodeReaderBytesBuilder::new()
            .encoding(Some(self.0))
            .build(reader)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl FromStr for Charset {
    type Err = StreamError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::for_label(name)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
