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

//! Key-path tracking.
//!
//! A document's hierarchy is reconstructed from a flat stack of key names
//! indexed by depth. Each mapping line writes its key at its depth and drops
//! everything nested deeper, so the stack always holds the chain of keys
//! enclosing the current line.

use crate::line::trim_padding;

/// Stack of active key names rendered into delimiter-joined paths.
///
/// # Examples
///
/// ```
/// use hashyaml_core::KeyPathTracker;
///
/// let mut tracker = KeyPathTracker::new("/");
/// assert_eq!(tracker.advance(0, "server"), "server");
/// assert_eq!(tracker.advance(1, "host"), "server/host");
/// assert_eq!(tracker.advance(1, "port"), "server/port");
/// assert_eq!(tracker.advance(0, "client"), "client");
///
/// // A depth past the end of the stack appends instead of failing
/// assert_eq!(tracker.advance(7, "timeout"), "client/timeout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPathTracker {
    keys: Vec<String>,
    delimiter: String,
}

impl KeyPathTracker {
    /// Create an empty tracker joining segments with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            keys: Vec::new(),
            delimiter: delimiter.into(),
        }
    }

    /// Record `key` at `depth` and return the resulting path.
    ///
    /// Entries deeper than `depth` are discarded first. When the stack has
    /// no slot at `depth` the key is appended at the end instead.
    pub fn advance(&mut self, depth: usize, key: &str) -> String {
        let key = trim_padding(key);

        if depth < self.keys.len() {
            self.keys.truncate(depth + 1);
            self.keys[depth].clear();
            self.keys[depth].push_str(key);
        } else {
            self.keys.push(key.to_string());
        }

        self.path()
    }

    /// Render the current stack as a path.
    pub fn path(&self) -> String {
        self.keys.join(&self.delimiter)
    }

    /// Clear the stack.
    #[inline]
    pub fn reset(&mut self) {
        self.keys.clear();
    }

    /// Number of keys on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The active key chain, outermost first.
    #[inline]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[inline]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== advance: growth ====================

    #[test]
    fn test_first_key_on_empty_stack() {
        let mut tracker = KeyPathTracker::new("/");
        assert_eq!(tracker.advance(0, "a"), "a");
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_first_key_at_depth_one_appends() {
        let mut tracker = KeyPathTracker::new("/");
        assert_eq!(tracker.advance(1, "a"), "a");
        assert_eq!(tracker.keys(), ["a"]);
    }

    #[test]
    fn test_nested_chain() {
        let mut tracker = KeyPathTracker::new("/");
        tracker.advance(0, "a");
        tracker.advance(1, "b");
        assert_eq!(tracker.advance(2, "c"), "a/b/c");
    }

    #[test]
    fn test_key_is_trimmed() {
        let mut tracker = KeyPathTracker::new("/");
        assert_eq!(tracker.advance(0, "   spaced \t"), "spaced");
        assert_eq!(tracker.advance(0, "\u{3000}wide\u{3000}"), "\u{3000}wide\u{3000}");
    }

    // ==================== advance: replacement & truncation ====================

    #[test]
    fn test_sibling_replaces_slot() {
        let mut tracker = KeyPathTracker::new("/");
        tracker.advance(0, "a");
        tracker.advance(1, "b");
        assert_eq!(tracker.advance(1, "c"), "a/c");
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_shallower_key_truncates_everything_deeper() {
        let mut tracker = KeyPathTracker::new("/");
        for (depth, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            tracker.advance(depth, key);
        }
        assert_eq!(tracker.len(), 5);

        assert_eq!(tracker.advance(1, "x"), "a/x");
        assert_eq!(tracker.keys(), ["a", "x"]);
    }

    #[test]
    fn test_depth_zero_replaces_root() {
        let mut tracker = KeyPathTracker::new("/");
        tracker.advance(0, "a");
        tracker.advance(1, "b");
        assert_eq!(tracker.advance(0, "z"), "z");
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_depth_beyond_stack_appends() {
        let mut tracker = KeyPathTracker::new("/");
        tracker.advance(0, "a");
        assert_eq!(tracker.advance(5, "b"), "a/b");
        assert_eq!(tracker.advance(9, "c"), "a/b/c");
    }

    // ==================== delimiter & reset ====================

    #[test]
    fn test_custom_delimiter() {
        let mut tracker = KeyPathTracker::new("::");
        tracker.advance(0, "a");
        assert_eq!(tracker.advance(1, "b"), "a::b");
        assert_eq!(tracker.delimiter(), "::");
    }

    #[test]
    fn test_reset_clears_stack() {
        let mut tracker = KeyPathTracker::new("/");
        tracker.advance(0, "a");
        tracker.advance(1, "b");
        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.path(), "");
        assert_eq!(tracker.advance(1, "c"), "c");
    }
}
