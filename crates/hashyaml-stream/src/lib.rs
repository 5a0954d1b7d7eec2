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

//! Streaming front-end for the HashYAML decoder.
//!
//! This crate connects byte sources (files, pipes, any [`std::io::Read`]) to
//! the line decoder in `hashyaml-core`. Input is transcoded from the selected
//! charset to UTF-8 and fed to the decoder one line at a time.
//!
//! # Features
//!
//! - **Streaming**: Input is consumed line by line, never buffered whole
//! - **Charsets**: UTF-8 (default) and every encoding `encoding_rs` knows by
//!   label, including ISO-8859-1, Shift_JIS and EUC-JP; malformed bytes
//!   decode to U+FFFD
//! - **Line endings**: `\n`, `\r\n` and a lone `\r`
//! - **Lenient convenience**: `*_or_empty` variants turn any failure into an
//!   empty document
//! - **Dump**: Echo the non-comment lines of a document for inspection
//!
//! ```rust,no_run
//! use hashyaml_core::Decoder;
//! use hashyaml_stream::{Charset, StreamingDecoder, StreamingDecoderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StreamingDecoderConfig {
//!     charset: "Shift_JIS".parse::<Charset>()?,
//!     ..Default::default()
//! };
//! let decoder = StreamingDecoder::with_config(Decoder::with_options(2, ".")?, config);
//!
//! let doc = decoder.decode_file("settings.yml")?;
//! for (path, value) in &doc {
//!     println!("{}:{}", path, value);
//! }
//! # Ok(())
//! # }
//! ```

mod charset;
mod decoder;
mod dump;
mod error;
mod reader;

pub use charset::Charset;
pub use decoder::{StreamingDecoder, StreamingDecoderConfig};
pub use dump::{dump, dump_file};
pub use error::{StreamError, StreamResult};
pub use reader::LineReader;

/// Re-export core types for convenience.
pub use hashyaml_core::{Decoder, DecoderConfig, Document, Value};
