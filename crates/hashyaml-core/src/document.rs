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

//! Flat document model.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A decoded value: one scalar or an ordered sequence of scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Single string value.
    Scalar(String),
    /// Ordered list of string values.
    Sequence(Vec<String>),
}

impl Value {
    /// Returns the scalar text, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Scalar(_) => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{}", s),
            Self::Sequence(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items)
    }
}

/// A decoded document: flattened paths mapped to values.
///
/// Paths iterate in sorted order, so two decodes of the same input always
/// list their entries identically.
///
/// # Examples
///
/// ```
/// use hashyaml_core::{decode, Value};
///
/// let doc = decode("a: 1\nb:\n  c: \"x\"\n  d: \"y\"\n")?;
/// assert_eq!(doc.get_scalar("a"), Some("1"));
/// assert_eq!(doc.get_scalar("a/b/c"), Some("x"));
/// assert_eq!(doc.get("a/b/d"), Some(&Value::from("y")));
/// assert!(!doc.contains_path("a/b"));
///
/// let doc = decode("items:\n  - alpha\n  - beta\n")?;
/// assert_eq!(doc.get_sequence("items"), Some(&["alpha".to_string(), "beta".to_string()][..]));
/// # Ok::<(), hashyaml_core::DecodeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    entries: BTreeMap<String, Value>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `path`, returning the value it replaced.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(path.into(), value.into())
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.entries.get(path)
    }

    /// Look up a scalar. Returns `None` for missing paths and for sequences.
    pub fn get_scalar(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_scalar)
    }

    /// Look up a sequence. Returns `None` for missing paths and for scalars.
    pub fn get_sequence(&self, path: &str) -> Option<&[String]> {
        self.get(path).and_then(Value::as_sequence)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All paths, in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All entries, in path order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Consume the document, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.entries
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, Value>> for Document {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}
