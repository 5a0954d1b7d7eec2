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

//! Indentation handling.
//!
//! Nesting depth is derived purely from the run of spaces in front of a key:
//! one level per whole indent unit, on top of a base level of 1. Partial
//! units round down, so a three-space indent under a two-space unit sits at
//! the same depth as a two-space indent.

/// Depth assigned to a key with no indentation.
pub const BASE_DEPTH: usize = 1;

/// Information about a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentInfo {
    /// Number of leading spaces.
    pub spaces: usize,
    /// Nesting depth (`spaces / unit + 1`).
    pub depth: usize,
    /// Whether a tab appears before the first non-blank character.
    pub has_tab: bool,
}

/// Count the leading U+0020 spaces of `segment`.
///
/// Tabs end the run; they are not expanded.
#[inline]
pub fn leading_spaces(segment: &str) -> usize {
    segment.bytes().take_while(|&b| b == b' ').count()
}

/// Translate an indent width into a nesting depth.
///
/// `unit` is a validated indent unit (at least 2).
#[inline]
pub fn depth_for(spaces: usize, unit: usize) -> usize {
    spaces / unit + BASE_DEPTH
}

/// Calculate indentation info for the key segment of a line.
///
/// # Parameters
/// - `segment`: The raw (untrimmed) text before the first colon
/// - `unit`: Width in spaces of one nesting level
pub fn calculate_indent(segment: &str, unit: usize) -> IndentInfo {
    let spaces = leading_spaces(segment);
    let has_tab = segment
        .bytes()
        .take_while(|b| b.is_ascii_whitespace())
        .any(|b| b == b'\t');

    IndentInfo {
        spaces,
        depth: depth_for(spaces, unit),
        has_tab,
    }
}
