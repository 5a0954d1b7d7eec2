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

//! Line decoder and key-path tracker for HashYAML documents.
//!
//! HashYAML reads a restricted subset of indentation-structured
//! configuration (mappings, string scalars, and simple `-` sequences) and
//! flattens it into a single table keyed by delimiter-joined paths.
//!
//! ```rust
//! use hashyaml_core::{decode, Value};
//!
//! let doc = decode(
//!     "# service settings\n\
//!      a: 1\n\
//!      b:\n  c: \"x\"\n  d: \"y\"\n",
//! )?;
//!
//! assert_eq!(doc.get_scalar("a"), Some("1"));
//! assert_eq!(doc.get_scalar("a/b/c"), Some("x"));
//! assert_eq!(doc.get("a/b/d"), Some(&Value::from("y")));
//! # Ok::<(), hashyaml_core::DecodeError>(())
//! ```
//!
//! # Components
//!
//! - [`KeyPathTracker`]: stack of active keys indexed by depth
//! - [`LineDecoder`]: one decoding session, fed line by line
//! - [`Decoder`]: reusable, configured entry point
//! - [`line`]: the line classifier and its named fallback branches
//!
//! Reading from files or byte streams lives in the `hashyaml-stream` crate.

mod config;
mod decoder;
mod document;
mod error;
pub mod indent;
pub mod line;
mod path;

pub use config::DecoderConfig;
pub use decoder::{decode, Decoder, LineDecoder};
pub use document::{Document, Value};
pub use error::{ConfigError, DecodeError, DecodeErrorKind, DecodeResult};
pub use path::KeyPathTracker;
