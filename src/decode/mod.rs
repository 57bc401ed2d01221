use std::io::Read;

use smol_str::SmolStr;

use crate::num::int::parse_i64_exact;
use crate::value::{Key, Map, Value};
use crate::{DecodeOptions, Error, Result};

pub fn decode_str(input: &str, options: &DecodeOptions) -> Result<Option<Value>> {
    decode_slice(input.as_bytes(), options)
}

pub fn decode_slice(input: &[u8], options: &DecodeOptions) -> Result<Option<Value>> {
    if input.is_empty() {
        return Ok(None);
    }
    let root = serde_json::from_slice::<serde_json::Value>(input)
        .map_err(|err| Error::structural(&err, input))?;
    Ok(Some(decode_node(&root, options)))
}

pub fn decode_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Option<Value>> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io(format!("read failed: {err}")))?;
    decode_slice(&buf, options)
}

/// Walks the parsed document tree, one call frame per nesting level.
/// Total over any tree the reader yields; malformed input never
/// reaches this point.
fn decode_node(node: &serde_json::Value, options: &DecodeOptions) -> Value {
    match node {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(value) => Value::Bool(*value),
        serde_json::Value::Number(number) => decode_number(number),
        serde_json::Value::String(text) => Value::Str(text.clone()),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(decode_node(item, options));
            }
            Value::Array(out)
        }
        serde_json::Value::Object(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (text, child) in entries {
                // entries with a zero-length key are dropped
                if text.is_empty() {
                    continue;
                }
                map.insert(classify_key(text, options), decode_node(child, options));
            }
            Value::Object(map)
        }
    }
}

/// Unsigned values above `i64::MAX` keep their bit pattern when cast,
/// losing magnitude.
fn decode_number(number: &serde_json::Number) -> Value {
    if let Some(value) = number.as_i64() {
        return Value::Int(value);
    }
    if let Some(value) = number.as_u64() {
        return Value::Int(value as i64);
    }
    Value::Float(number.as_f64().unwrap_or_default())
}

/// A key becomes an integer only when its first byte looks numeric
/// and the full text parses; anything else stays text verbatim.
fn classify_key(text: &str, options: &DecodeOptions) -> Key {
    if options.coerce_numeric_keys
        && matches!(text.as_bytes().first(), Some(b) if *b == b'-' || b.is_ascii_digit())
    {
        if let Some(value) = parse_i64_exact(text) {
            return Key::Int(value);
        }
    }
    Key::Str(SmolStr::new(text))
}
