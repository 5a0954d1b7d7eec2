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

//! Conformance tests for the HashYAML decoder.
//!
//! Each test pins one documented behaviour of the line decoder, including
//! the degraded forms malformed input takes.

use hashyaml_core::{decode, Decoder, DecoderConfig, Document, Value};

fn seq(items: &[&str]) -> Value {
    Value::Sequence(items.iter().map(|s| s.to_string()).collect())
}

fn entries(doc: &Document) -> Vec<(String, Value)> {
    doc.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

// ==================== Reference documents ====================

#[test]
fn test_nested_mapping_document() {
    let input = "a: 1\nb:\n  c: \"x\"\n  d: \"y\"\n";
    let doc = decode(input).unwrap();

    assert_eq!(
        entries(&doc),
        vec![
            ("a".to_string(), Value::from("1")),
            ("a/b/c".to_string(), Value::from("x")),
            ("a/b/d".to_string(), Value::from("y")),
        ]
    );
}

#[test]
fn test_sequence_document() {
    let doc = decode("items:\n  - alpha\n  - beta\n").unwrap();
    assert_eq!(
        entries(&doc),
        vec![("items".to_string(), seq(&["alpha", "beta"]))]
    );
}

#[test]
fn test_comment_and_blank_only_document() {
    let doc = decode("# header\n\n   \n  # indented comment\n\t\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_empty_input() {
    assert!(decode("").unwrap().is_empty());
    assert!(Decoder::new().decode_lines(Vec::<String>::new()).unwrap().is_empty());
}

// ==================== Depth and path tracking ====================

#[test]
fn test_deep_chain() {
    let input = "l1:\n  l2:\n    l3:\n      l4: deep\n";
    let doc = decode(input).unwrap();
    assert_eq!(doc.get_scalar("l1/l2/l3/l4"), Some("deep"));
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_returning_to_shallower_depth() {
    let input = "\
root: r
a:
  x: 1
  y: 2
b: 3
";
    let doc = decode(input).unwrap();
    assert_eq!(doc.get_scalar("root"), Some("r"));
    assert_eq!(doc.get_scalar("root/a/x"), Some("1"));
    assert_eq!(doc.get_scalar("root/a/y"), Some("2"));
    assert_eq!(doc.get_scalar("root/b"), Some("3"));
    assert_eq!(doc.len(), 4);
}

#[test]
fn test_indent_deeper_than_stack_appends() {
    let doc = decode("a: 1\n          b: 2\n").unwrap();
    assert_eq!(doc.get_scalar("a/b"), Some("2"));
}

#[test]
fn test_odd_indent_rounds_down() {
    let doc = decode("a: 1\nb:\n   c: x\n").unwrap();
    assert_eq!(doc.get_scalar("a/b/c"), Some("x"));
}

#[test]
fn test_four_space_indent_unit() {
    let decoder = Decoder::with_options(4, "/").unwrap();
    let doc = decoder
        .decode_str("a: 1\nb:\n    c: x\n    d: y\n")
        .unwrap();
    assert_eq!(doc.get_scalar("a/b/c"), Some("x"));
    assert_eq!(doc.get_scalar("a/b/d"), Some("y"));
}

#[test]
fn test_keys_are_trimmed() {
    let doc = decode("a   : 1\n").unwrap();
    assert_eq!(doc.get_scalar("a"), Some("1"));
}

// ==================== Delimiters ====================

#[test]
fn test_dot_delimiter() {
    let decoder = Decoder::with_options(2, ".").unwrap();
    let doc = decoder
        .decode_str("a: 1\nb:\n  c: \"x\"\n  d: \"y\"\n")
        .unwrap();
    let paths: Vec<_> = doc.paths().collect();
    assert_eq!(paths, vec!["a", "a.b.c", "a.b.d"]);
}

#[test]
fn test_multi_char_delimiter() {
    let decoder = Decoder::with_options(2, " -> ").unwrap();
    let doc = decoder.decode_str("a:\n  b: 1\n").unwrap();
    assert_eq!(doc.get_scalar("a -> b"), Some("1"));
}

// ==================== Scalars ====================

#[test]
fn test_double_quotes_stripped() {
    let doc = decode("msg: \"he said \"hi\"\"\n").unwrap();
    assert_eq!(doc.get_scalar("msg"), Some("he said hi"));
}

#[test]
fn test_empty_scalar_from_trailing_space() {
    let doc = decode("blank: \n").unwrap();
    assert_eq!(doc.get_scalar("blank"), Some(""));
}

#[test]
fn test_value_with_colon_is_truncated() {
    let doc = decode("time: 12:30\n").unwrap();
    assert_eq!(doc.get_scalar("time"), Some("12"));
}

#[test]
fn test_unicode_keys_and_values() {
    let doc = decode("挨拶:\n  朝: おはよう\n").unwrap();
    assert_eq!(doc.get_scalar("挨拶/朝"), Some("おはよう"));
}

// ==================== Sequences ====================

#[test]
fn test_sequence_then_mapping() {
    let input = "\
list:
  - one
  - two
after: x
";
    let doc = decode(input).unwrap();
    assert_eq!(doc.get("list"), Some(&seq(&["one", "two"])));
    assert_eq!(doc.get_scalar("list/after"), Some("x"));
}

#[test]
fn test_two_sequences() {
    let input = "\
root:
  first:
    - a
  second:
    - b
    - c
";
    let doc = decode(input).unwrap();
    assert_eq!(doc.get("root/first"), Some(&seq(&["a"])));
    assert_eq!(doc.get("root/first/second"), Some(&seq(&["b", "c"])));
}

#[test]
fn test_sequence_items_keep_inner_colons() {
    let doc = decode("hosts:\n  - db:5432\n").unwrap();
    assert_eq!(doc.get("hosts"), Some(&seq(&["db:5432"])));
}

#[test]
fn test_sequence_quotes_kept() {
    let doc = decode("q:\n  - \"quoted\"\n").unwrap();
    assert_eq!(doc.get("q"), Some(&seq(&["\"quoted\""])));
}

#[test]
fn test_malformed_items_are_blank() {
    let doc = decode("xs:\n  -\n  - a-b\n  - ok\n").unwrap();
    assert_eq!(doc.get("xs"), Some(&seq(&["", "", "ok"])));
}

// ==================== Configuration ====================

#[test]
fn test_invalid_configuration_fails_at_construction() {
    assert!(Decoder::with_options(0, "/").is_err());
    assert!(Decoder::with_options(1, "/").is_err());
    assert!(Decoder::with_options(2, "").is_err());
    assert!(DecoderConfig::default().with_delimiter("").is_err());
}

#[test]
fn test_decoder_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Decoder>();
    assert_send_sync::<Document>();
}

#[test]
fn test_concurrent_decodes_share_nothing() {
    let decoder = Decoder::new();
    let decoder = &decoder;
    let inputs = ["a: 1\nb: 2\n", "x:\n  - y\n", "k: v\n"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || decoder.decode_str(input).unwrap()))
            .collect();
        let docs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(docs[0].get_scalar("a/b"), Some("2"));
        assert_eq!(docs[1].get("x"), Some(&seq(&["y"])));
        assert_eq!(docs[2].get_scalar("k"), Some("v"));
    });
}
