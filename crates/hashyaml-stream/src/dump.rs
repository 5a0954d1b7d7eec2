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

//! Echo the meaningful lines of a document.
//!
//! A debugging aid: writes every line that is neither blank nor a comment,
//! verbatim, so the input the decoder actually acts on can be inspected.

use crate::charset::Charset;
use crate::error::StreamResult;
use crate::reader::LineReader;
use hashyaml_core::line::is_skippable;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Copy non-blank, non-comment lines from `reader` to `writer`.
///
/// Returns the number of lines written.
///
/// # Examples
///
/// ```rust
/// use hashyaml_stream::{dump, Charset};
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let written = dump(Cursor::new("# title\na: 1\n\n  b: 2\n"), &mut out, Charset::utf8())?;
///
/// assert_eq!(written, 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "a: 1\n  b: 2\n");
/// # Ok::<(), hashyaml_stream::StreamError>(())
/// ```
pub fn dump<R: Read, W: Write>(reader: R, mut writer: W, charset: Charset) -> StreamResult<usize> {
    let mut written = 0;
    for line in LineReader::new(reader, charset) {
        let (_, text) = line?;
        if is_skippable(&text) {
            continue;
        }
        writeln!(writer, "{}", text)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Open the file at `path` and [`dump`] it.
pub fn dump_file<P: AsRef<Path>, W: Write>(
    path: P,
    writer: W,
    charset: Charset,
) -> StreamResult<usize> {
    let file = File::open(path)?;
    dump(file, writer, charset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dump_str(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let n = dump(Cursor::new(input), &mut out, Charset::utf8()).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_dump_filters_comments_and_blanks() {
        let (n, out) = dump_str("# c\n\nkey: v\n   \n  # nested\n  - item\n");
        assert_eq!(n, 2);
        assert_eq!(out, "key: v\n  - item\n");
    }

    #[test]
    fn test_dump_keeps_lines_verbatim() {
        let (_, out) = dump_str("  spaced:   \"quoted\"  \r\n");
        assert_eq!(out, "  spaced:   \"quoted\"  \n");
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(dump_str(""), (0, String::new()));
        assert_eq!(dump_str("# only\n\n"), (0, String::new()));
    }

    #[test]
    fn test_dump_missing_file() {
        assert!(dump_file("/nonexistent/hashyaml/dump.yml", Vec::new(), Charset::utf8()).is_err());
    }
}
