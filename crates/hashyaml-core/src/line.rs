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

//! Line classification.
//!
//! Every input line is exactly one of: skippable (blank or comment), a
//! sequence item, or a mapping entry. Classification never fails; lines that
//! do not fit cleanly are tagged with a named fallback so the decoder can
//! either degrade them or, in strict mode, report them.

use crate::indent::{calculate_indent, IndentInfo};

/// Marker starting a comment line.
pub const COMMENT_MARKER: char = '#';

/// Marker starting a sequence-item line.
pub const SEQUENCE_MARKER: char = '-';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Character removed from scalar values.
pub const QUOTE: char = '"';

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or comment line.
    Skip,
    /// A `- item` line.
    SequenceItem(SequenceItem<'a>),
    /// A `key` or `key: value` line.
    MappingEntry(MappingEntry<'a>),
}

/// Payload of a sequence-item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceItem<'a> {
    /// The line split into one marker and one item; holds the trimmed item.
    Item(&'a str),
    /// The line did not split into exactly two `-` fields. Lenient decoding
    /// records an empty item for it.
    Malformed {
        /// Number of non-trailing `-` fields found.
        fields: usize,
    },
}

impl<'a> SequenceItem<'a> {
    /// The item text, with malformed lines contributing an empty string.
    #[inline]
    pub fn text(&self) -> &'a str {
        match self {
            Self::Item(text) => text,
            Self::Malformed { .. } => "",
        }
    }
}

/// Payload of a mapping-entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry<'a> {
    /// Trimmed key text. May be empty for lines such as `: value`.
    pub key: &'a str,
    /// Indentation of the key segment.
    pub indent: IndentInfo,
    /// Unquoted scalar value, if the line carries one.
    pub value: Option<String>,
    /// Text after a second colon, which the value does not include.
    pub dropped: Option<&'a str>,
}

impl MappingEntry<'_> {
    /// Whether the value was cut at a colon inside it.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.dropped.is_some()
    }
}

/// Split `line` on every `sep` and drop trailing empty fields.
///
/// A line without `sep` yields itself as the single field. A line made only
/// of separators yields no fields at all.
///
/// # Examples
///
/// ```
/// use hashyaml_core::line::split_fields;
///
/// assert_eq!(split_fields("key: value", ':'), vec!["key", " value"]);
/// assert_eq!(split_fields("key:", ':'), vec!["key"]);
/// assert_eq!(split_fields("key: ", ':'), vec!["key", " "]);
/// assert_eq!(split_fields("url: http://host", ':'), vec!["url", " http", "//host"]);
/// assert!(split_fields("::", ':').is_empty());
/// ```
pub fn split_fields(line: &str, sep: char) -> Vec<&str> {
    if !line.contains(sep) {
        return vec![line];
    }

    let mut fields: Vec<&str> = line.split(sep).collect();
    while matches!(fields.last(), Some(field) if field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Split in-memory text into lines.
///
/// A line ends at `\n`, `\r\n`, or a lone `\r`. A terminator at the very
/// end does not start an extra empty line.
///
/// ```
/// use hashyaml_core::line::split_lines;
///
/// let lines: Vec<_> = split_lines("a\nb\r\nc\rd\r").collect();
/// assert_eq!(lines, vec!["a", "b", "c", "d"]);
/// ```
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = Some(input).filter(|s| !s.is_empty());
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let next = if text[pos..].starts_with("\r\n") { pos + 2 } else { pos + 1 };
                rest = Some(&text[next..]).filter(|s| !s.is_empty());
                Some(&text[..pos])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Strip leading and trailing characters at or below U+0020.
///
/// Only spaces and ASCII control characters count as padding; other Unicode
/// whitespace such as U+3000 is part of the text.
///
/// ```
/// use hashyaml_core::line::trim_padding;
///
/// assert_eq!(trim_padding(" \tvalue\r "), "value");
/// assert_eq!(trim_padding("\u{3000}taro\u{3000}"), "\u{3000}taro\u{3000}");
/// ```
#[inline]
pub fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Whether a line is blank or a comment.
#[inline]
pub fn is_skippable(line: &str) -> bool {
    let trimmed = trim_padding(line);
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Classify a single line.
///
/// # Parameters
/// - `line`: The raw line, without its terminator
/// - `indent_unit`: Width in spaces of one nesting level
pub fn classify(line: &str, indent_unit: usize) -> LineKind<'_> {
    if is_skippable(line) {
        return LineKind::Skip;
    }

    let fields = split_fields(line, KEY_VALUE_SEPARATOR);
    let key_segment = fields.first().copied().unwrap_or("");

    if trim_padding(key_segment).starts_with(SEQUENCE_MARKER) {
        return LineKind::SequenceItem(classify_sequence_item(line));
    }

    let value = fields.get(1).map(|raw| unquote(trim_padding(raw)));
    let dropped = if fields.len() > 2 {
        let value_start = key_segment.len() + 1 + fields[1].len() + 1;
        line.get(value_start..)
    } else {
        None
    };

    LineKind::MappingEntry(MappingEntry {
        key: trim_padding(key_segment),
        indent: calculate_indent(key_segment, indent_unit),
        value,
        dropped,
    })
}

fn classify_sequence_item(line: &str) -> SequenceItem<'_> {
    let fields = split_fields(line, SEQUENCE_MARKER);
    if fields.len() == 2 {
        SequenceItem::Item(trim_padding(fields[1]))
    } else {
        SequenceItem::Malformed {
            fields: fields.len(),
        }
    }
}

/// Remove every double quote from a scalar.
#[inline]
fn unquote(raw: &str) -> String {
    raw.replace(QUOTE, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str) -> MappingEntry<'_> {
        match classify(line, 2) {
            LineKind::MappingEntry(entry) => entry,
            other => panic!("Expected mapping entry, got {:?}", other),
        }
    }

    fn item(line: &str) -> SequenceItem<'_> {
        match classify(line, 2) {
            LineKind::SequenceItem(item) => item,
            other => panic!("Expected sequence item, got {:?}", other),
        }
    }

    // ==================== split_fields ====================

    #[test]
    fn test_split_no_separator() {
        assert_eq!(split_fields("plain", ':'), vec!["plain"]);
        assert_eq!(split_fields("", ':'), vec![""]);
    }

    #[test]
    fn test_split_drops_trailing_empties_only() {
        assert_eq!(split_fields("a::", ':'), vec!["a"]);
        assert_eq!(split_fields("a::b", ':'), vec!["a", "", "b"]);
        assert_eq!(split_fields(":a", ':'), vec!["", "a"]);
    }

    #[test]
    fn test_split_all_separators() {
        assert!(split_fields(":", ':').is_empty());
        assert!(split_fields("---", '-').is_empty());
    }

    // ==================== split_lines ====================

    #[test]
    fn test_split_lines_endings() {
        let lines: Vec<_> = split_lines("a\r\rb\r\n\r\nc").collect();
        assert_eq!(lines, vec!["a", "", "b", "", "c"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("\n\n").collect::<Vec<_>>(), vec!["", ""]);
    }

    // ==================== skip rule ====================

    #[test]
    fn test_skip_blank_lines() {
        assert_eq!(classify("", 2), LineKind::Skip);
        assert_eq!(classify("    ", 2), LineKind::Skip);
        assert_eq!(classify(" \t ", 2), LineKind::Skip);
    }

    #[test]
    fn test_skip_comments() {
        assert_eq!(classify("# top", 2), LineKind::Skip);
        assert_eq!(classify("    # nested: value", 2), LineKind::Skip);
        assert_eq!(classify("#", 2), LineKind::Skip);
    }

    #[test]
    fn test_ideographic_space_line_is_not_blank() {
        let e = entry("\u{3000}");
        assert_eq!(e.key, "\u{3000}");
        assert_eq!(e.value, None);
    }

    #[test]
    fn test_hash_inside_value_is_not_comment() {
        let e = entry("color: #fff");
        assert_eq!(e.value.as_deref(), Some("#fff"));
    }

    // ==================== mapping entries ====================

    #[test]
    fn test_key_only() {
        let e = entry("server:");
        assert_eq!(e.key, "server");
        assert_eq!(e.value, None);
        assert_eq!(e.indent.depth, 1);
        assert!(!e.is_truncated());
    }

    #[test]
    fn test_key_without_colon() {
        let e = entry("  bare");
        assert_eq!(e.key, "bare");
        assert_eq!(e.value, None);
        assert_eq!(e.indent.depth, 2);
    }

    #[test]
    fn test_key_value() {
        let e = entry("    port: 8080  ");
        assert_eq!(e.key, "port");
        assert_eq!(e.value.as_deref(), Some("8080"));
        assert_eq!(e.indent.spaces, 4);
        assert_eq!(e.indent.depth, 3);
    }

    #[test]
    fn test_whitespace_value_is_empty_scalar() {
        let e = entry("name:   ");
        assert_eq!(e.value.as_deref(), Some(""));
    }

    #[test]
    fn test_quotes_removed_everywhere() {
        assert_eq!(entry(r#"a: "x""#).value.as_deref(), Some("x"));
        assert_eq!(entry(r#"a: say "hi" now"#).value.as_deref(), Some("say hi now"));
        assert_eq!(entry("a: 'single'").value.as_deref(), Some("'single'"));
    }

    #[test]
    fn test_value_truncated_at_second_colon() {
        let e = entry("url: http://example.com:80");
        assert_eq!(e.value.as_deref(), Some("http"));
        assert_eq!(e.dropped, Some("//example.com:80"));
        assert!(e.is_truncated());
    }

    #[test]
    fn test_trailing_colon_in_value_not_truncated() {
        let e = entry("a: b:");
        assert_eq!(e.value.as_deref(), Some("b"));
        assert!(!e.is_truncated());
    }

    #[test]
    fn test_empty_key() {
        let e = entry(": orphan");
        assert_eq!(e.key, "");
        assert_eq!(e.value.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_only_colons() {
        let e = entry("::");
        assert_eq!(e.key, "");
        assert_eq!(e.value, None);
    }

    #[test]
    fn test_dash_inside_key_is_mapping() {
        let e = entry("first-name: Ada");
        assert_eq!(e.key, "first-name");
        assert_eq!(e.value.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_unicode_whitespace_kept_in_value() {
        let e = entry("name: \u{3000}taro\u{3000}");
        assert_eq!(e.value.as_deref(), Some("\u{3000}taro\u{3000}"));
    }

    #[test]
    fn test_control_padding_trimmed() {
        let e = entry("  key\t: value\r");
        assert_eq!(e.key, "key");
        assert_eq!(e.value.as_deref(), Some("value"));
    }

    // ==================== sequence items ====================

    #[test]
    fn test_sequence_item() {
        assert_eq!(item("  - alpha"), SequenceItem::Item("alpha"));
        assert_eq!(item("-beta"), SequenceItem::Item("beta"));
    }

    #[test]
    fn test_sequence_item_with_colon() {
        assert_eq!(item("  - key: value"), SequenceItem::Item("key: value"));
    }

    #[test]
    fn test_sequence_item_with_inner_dash_is_malformed() {
        let i = item("  - well-known");
        assert_eq!(i, SequenceItem::Malformed { fields: 3 });
        assert_eq!(i.text(), "");
    }

    #[test]
    fn test_bare_dash_is_malformed() {
        assert_eq!(item("  -"), SequenceItem::Malformed { fields: 1 });
        assert_eq!(item("-"), SequenceItem::Malformed { fields: 0 });
    }

    #[test]
    fn test_trailing_dash_ignored() {
        assert_eq!(item("- x -"), SequenceItem::Item("x"));
    }
}
