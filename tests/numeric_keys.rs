use keyed_json::{decode_str, decode_str_with_options, DecodeOptions, Key, Value};
use rstest::rstest;
use serde_json::json;

fn keys_of(value: &Value) -> Vec<Key> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[rstest]
fn integer_like_keys_become_integers() {
    let decoded = decode_str(r#"{"1": "a", "2": "b"}"#).unwrap().unwrap();
    assert_eq!(keys_of(&decoded), [Key::Int(1), Key::Int(2)]);
    assert_eq!(decoded.get(1).and_then(Value::as_str), Some("a"));
    assert_eq!(decoded.get(2).and_then(Value::as_str), Some("b"));
    assert_eq!(decoded.get("1"), None);
}

#[rstest]
fn reencoding_restores_decimal_text_keys() {
    let decoded = decode_str(r#"{"1": "a", "2": "b"}"#).unwrap().unwrap();
    let json: serde_json::Value = decoded.into();
    assert_eq!(json, json!({"1": "a", "2": "b"}));
}

#[rstest]
#[case(r#"{"01": "x"}"#, Key::Int(1))]
#[case(r#"{"-5": "x"}"#, Key::Int(-5))]
#[case(r#"{"-9223372036854775808": "x"}"#, Key::Int(i64::MIN))]
#[case(r#"{"9223372036854775807": "x"}"#, Key::Int(i64::MAX))]
fn full_match_keys_are_coerced(#[case] input: &str, #[case] expected: Key) {
    let decoded = decode_str(input).unwrap().unwrap();
    assert_eq!(keys_of(&decoded), [expected]);
}

#[rstest]
#[case(r#"{"12abc": "x"}"#, "12abc")]
#[case(r#"{"+1": "x"}"#, "+1")]
#[case(r#"{"1.5": "x"}"#, "1.5")]
#[case(r#"{"1e3": "x"}"#, "1e3")]
#[case(r#"{"9223372036854775808": "x"}"#, "9223372036854775808")]
#[case(r#"{"-9223372036854775809": "x"}"#, "-9223372036854775809")]
#[case(r#"{" 1": "x"}"#, " 1")]
#[case(r#"{"abc": "x"}"#, "abc")]
fn non_matching_keys_stay_text(#[case] input: &str, #[case] expected: &str) {
    let decoded = decode_str(input).unwrap().unwrap();
    assert_eq!(keys_of(&decoded), [Key::from(expected)]);
}

#[rstest]
fn key_types_are_per_entry_not_per_object() {
    let decoded = decode_str(r#"{"1": "a", "name": "b", "-2": "c"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(
        keys_of(&decoded),
        [Key::Int(1), Key::from("name"), Key::Int(-2)]
    );
}

#[rstest]
fn empty_keys_are_dropped_silently() {
    let decoded = decode_str(r#"{"": "gone", "a": "kept"}"#).unwrap().unwrap();
    let map = decoded.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(decoded.get("a").and_then(Value::as_str), Some("kept"));
}

#[rstest]
fn coercion_applies_at_every_nesting_level() {
    let decoded = decode_str(r#"{"outer": {"3": [{"4": true}]}}"#)
        .unwrap()
        .unwrap();
    let inner = decoded
        .get("outer")
        .and_then(|value| value.get(3))
        .and_then(|value| value.get_index(0))
        .and_then(|value| value.get(4));
    assert_eq!(inner.and_then(Value::as_bool), Some(true));
}

#[rstest]
fn disabling_coercion_keeps_text_keys() {
    let options = DecodeOptions::new().with_coerce_numeric_keys(false);
    let decoded = decode_str_with_options(r#"{"1": "a"}"#, &options)
        .unwrap()
        .unwrap();
    assert_eq!(keys_of(&decoded), [Key::from("1")]);
}
