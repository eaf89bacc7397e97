//! Integration tests for the JSON text helpers.

#![allow(clippy::float_cmp)]

use std::collections::{BTreeMap, HashMap};

use koan_common::warning::was_warned;
use koan_json::{JsonError, from_text, to_text, to_text_pretty};
use quickcheck_macros::quickcheck;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Size {
    width: f64,
    height: f64,
}

impl Size {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Labelled {
    id: u32,
    label: Option<String>,
}

// ========== to_text ==========

#[test]
fn test_to_text_array() {
    assert_eq!(to_text(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_to_text_scalars() {
    assert_eq!(to_text(&true).unwrap(), "true");
    assert_eq!(to_text(&Value::Null).unwrap(), "null");
    assert_eq!(to_text("a \"quoted\" word").unwrap(), r#""a \"quoted\" word""#);
}

#[test]
fn test_to_text_struct() {
    let size = Size {
        width: 10.0,
        height: 20.0,
    };
    assert_eq!(to_text(&size).unwrap(), r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_to_text_pretty_is_indented() {
    let text = to_text_pretty(&json!({ "a": [1] })).unwrap();
    assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[test]
fn test_to_text_rejects_non_string_keys() {
    let mut map = HashMap::new();
    let _ = map.insert((1, 2), "pair");
    let err = to_text(&map).unwrap_err();
    assert!(matches!(err, JsonError::Serialize(_)));
}

// ========== from_text ==========

#[test]
fn test_from_text_gains_methods() {
    let size: Size = from_text(r#"{"width":10, "height":20}"#).unwrap();
    assert_eq!(size.width, 10.0);
    assert_eq!(size.height, 20.0);
    assert_eq!(size.area(), 200.0);
}

#[test]
fn test_from_text_plain_value() {
    let value: Value = from_text(r#"{"a":[1,2,{"b":null}],"c":"d"}"#).unwrap();
    assert_eq!(value, json!({ "a": [1, 2, { "b": null }], "c": "d" }));
}

#[test]
fn test_from_text_malformed() {
    let err = from_text::<Value>("{\"width\": 10,\n  \"height\": }").unwrap_err();
    match err {
        JsonError::Parse { line, column, .. } => {
            assert_eq!(line, 2);
            assert!(column > 0);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_from_text_trailing_garbage() {
    let err = from_text::<Value>("[1,2] x").unwrap_err();
    assert!(matches!(err, JsonError::Parse { .. }));
}

#[test]
fn test_from_text_empty_input() {
    let err = from_text::<Value>("").unwrap_err();
    assert!(matches!(err, JsonError::Parse { .. }));
}

#[test]
fn test_from_text_missing_field() {
    let err = from_text::<Size>(r#"{"width":10}"#).unwrap_err();
    match err {
        JsonError::Shape { target, .. } => assert!(target.ends_with("Size")),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_from_text_wrong_field_type() {
    let err = from_text::<Size>(r#"{"width":"wide","height":1}"#).unwrap_err();
    assert!(matches!(err, JsonError::Shape { .. }));
}

#[test]
fn test_from_text_warns_about_dropped_fields() {
    let size: Size = from_text(r#"{"width":1,"height":2,"depth":3}"#).unwrap();
    assert_eq!(size.area(), 2.0);
    assert!(was_warned(
        "JSON",
        &format!(
            "ignored fields not declared by `{}`: depth",
            std::any::type_name::<Size>()
        )
    ));
}

#[test]
fn test_from_text_does_not_leak_between_calls() {
    let first: Labelled = from_text(r#"{"id":1,"label":"first"}"#).unwrap();
    let second: Labelled = from_text(r#"{"id":2}"#).unwrap();
    assert_eq!(first.label.as_deref(), Some("first"));
    assert_eq!(
        second,
        Labelled {
            id: 2,
            label: None
        }
    );
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Tagged {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(alias = "w")]
    width: u32,
}

/// Only ever read from text, never written.
#[derive(Debug, Deserialize)]
struct Settings {
    theme: String,
}

#[derive(Debug, Deserialize)]
struct Outer {
    inner: Settings,
}

#[test]
fn test_from_text_alias_and_skipped_null_are_not_dropped() {
    let tagged: Tagged = from_text(r#"{"id":1,"label":null,"w":5}"#).unwrap();
    assert_eq!(
        tagged,
        Tagged {
            id: 1,
            label: None,
            width: 5
        }
    );
    assert!(!was_warned(
        "JSON",
        &format!(
            "ignored fields not declared by `{}`: label, w",
            std::any::type_name::<Tagged>()
        )
    ));
    assert!(!was_warned(
        "JSON",
        &format!(
            "ignored fields not declared by `{}`: label",
            std::any::type_name::<Tagged>()
        )
    ));
}

#[test]
fn test_from_text_deserialize_only_type() {
    let settings: Settings = from_text(r#"{"theme":"dark","font":"mono"}"#).unwrap();
    assert_eq!(settings.theme, "dark");
    assert!(was_warned(
        "JSON",
        &format!(
            "ignored fields not declared by `{}`: font",
            std::any::type_name::<Settings>()
        )
    ));
}

#[test]
fn test_from_text_reports_nested_dropped_path() {
    let outer: Outer = from_text(r#"{"inner":{"theme":"light","size":3}}"#).unwrap();
    assert_eq!(outer.inner.theme, "light");
    assert!(was_warned(
        "JSON",
        &format!(
            "ignored fields not declared by `{}`: inner.size",
            std::any::type_name::<Outer>()
        )
    ));
}

#[test]
fn test_from_text_struct_rejects_array_record() {
    let err = from_text::<Size>("[10, 20]").unwrap_err();
    match err {
        JsonError::Shape { target, .. } => assert!(target.ends_with("Size")),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_from_text_struct_rejects_scalar_record() {
    assert!(matches!(
        from_text::<Size>("42").unwrap_err(),
        JsonError::Shape { .. }
    ));
    assert!(matches!(
        from_text::<Size>("null").unwrap_err(),
        JsonError::Shape { .. }
    ));
}

#[test]
fn test_from_text_array_into_sequence_types() {
    let numbers: Vec<f64> = from_text("[10, 20]").unwrap();
    assert_eq!(numbers, vec![10.0, 20.0]);
    let pair: (u8, String) = from_text(r#"[1, "one"]"#).unwrap();
    assert_eq!(pair, (1, "one".to_string()));
    let maybe: Option<u8> = from_text("null").unwrap();
    assert_eq!(maybe, None);
}

// ========== round trip ==========

#[test]
fn test_round_trip_nested_value() {
    let original = json!({
        "name": "grid",
        "cells": [[1, 2], [3, 4]],
        "meta": { "visible": true, "owner": null, "ratio": 0.5 }
    });
    let back: Value = from_text(&to_text(&original).unwrap()).unwrap();
    assert_eq!(back, original);
}

#[quickcheck]
fn prop_round_trip_string_map(map: BTreeMap<String, i64>) -> bool {
    let text = to_text(&map).unwrap();
    from_text::<BTreeMap<String, i64>>(&text).unwrap() == map
}

#[quickcheck]
fn prop_round_trip_records(items: Vec<(u32, Option<String>)>) -> bool {
    let records: Vec<Labelled> = items
        .into_iter()
        .map(|(id, label)| Labelled { id, label })
        .collect();
    let text = to_text(&records).unwrap();
    from_text::<Vec<Labelled>>(&text).unwrap() == records
}
