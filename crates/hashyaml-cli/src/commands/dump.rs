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

//! Dump command - echo the lines the decoder acts on.

use super::parse_charset;
use crate::error::CliError;
use hashyaml_stream::StreamError;
use std::io::{self, Write};
use tracing::debug;

/// Remembers whether a write to the wrapped output failed, so output errors
/// are not reported against the input file.
struct OutputWriter<'a, W> {
    inner: &'a mut W,
    failed: bool,
}

impl<W: Write> Write for OutputWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.failed |= result.is_err();
        result
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.failed |= result.is_err();
        result
    }
}

/// Write every non-blank, non-comment line of `file` to `out`.
///
/// # Errors
///
/// Returns `Err` if the charset is unknown, the file cannot be read, or
/// `out` cannot be written.
pub fn dump<W: Write>(file: &str, charset: &str, out: &mut W) -> Result<(), CliError> {
    let charset = parse_charset(charset)?;
    let mut output = OutputWriter {
        inner: out,
        failed: false,
    };
    let written = match hashyaml_stream::dump_file(file, &mut output, charset) {
        Ok(written) => written,
        Err(StreamError::Io(e)) if output.failed => return Err(CliError::io_error("<stdout>", e)),
        Err(e) => return Err(CliError::from_stream(file, e)),
    };
    debug!(file, lines = written, "dumped");
    Ok(())
}
