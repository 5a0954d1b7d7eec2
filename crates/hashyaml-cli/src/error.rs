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

//! Structured error types for the HashYAML CLI.

use hashyaml_core::ConfigError;
use hashyaml_stream::StreamError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for HashYAML CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use hashyaml_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file open, read, or output write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Invalid decoder options.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Unknown charset name.
    #[error("Unsupported charset: {0}")]
    Charset(String),

    /// Decoding failed (line limit or strict-mode rejection).
    #[error("Decode error in '{path}': {message}")]
    Decode {
        /// The file being decoded
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error for `path`.
    pub fn io_error(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Attach `path` to a stream-layer error.
    pub fn from_stream(path: impl AsRef<Path>, err: StreamError) -> Self {
        let path = path.as_ref().to_path_buf();
        match err {
            StreamError::Io(e) => Self::Io {
                path,
                message: e.to_string(),
            },
            StreamError::UnsupportedCharset(name) => Self::Charset(name),
            other => Self::Decode {
                path,
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}
