//! 响应封装解包
//!
//! CloudStack 把每个响应都包在一个单键对象里，例如
//! `{"createaffinitygroupresponse": {...}}`，异步任务的 `jobresult`
//! 也是同样的结构（`{"affinitygroup": {...}}`）。这里的函数只负责取出
//! 唯一的内层值，不关心键名。

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{CsError, Result};

/// 顶层对象：条目数（含重复键）和第一个值
struct Envelope {
    entries: usize,
    first: Option<Box<RawValue>>,
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EnvelopeVisitor;

        impl<'de> Visitor<'de> for EnvelopeVisitor {
            type Value = Envelope;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Envelope, A::Error> {
                let mut envelope = Envelope {
                    entries: 0,
                    first: None,
                };
                while let Some(_key) = map.next_key::<IgnoredAny>()? {
                    envelope.entries += 1;
                    if envelope.first.is_none() {
                        envelope.first = Some(map.next_value::<Box<RawValue>>()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(envelope)
            }
        }

        deserializer.deserialize_map(EnvelopeVisitor)
    }
}

/// 从原始 JSON 字节中取出唯一内层值（保留原始字节）
///
/// 重复的顶层键按多个条目计数。
pub fn unwrap_raw(raw: &[u8]) -> Result<Box<RawValue>> {
    let envelope: Envelope = serde_json::from_slice(raw)
        .map_err(|e| CsError::MalformedEnvelope(format!("不是 JSON 对象: {}", e)))?;

    if envelope.entries != 1 {
        return Err(CsError::MalformedEnvelope(format!(
            "期望 1 个顶层键，实际 {} 个",
            envelope.entries
        )));
    }

    envelope
        .first
        .ok_or_else(|| CsError::MalformedEnvelope("顶层键丢失".to_string()))
}

/// 对已解析的值做同样的解包
pub fn unwrap_value(value: Value) -> Result<Value> {
    match value {
        Value::Object(map) => unwrap_map(map),
        other => Err(CsError::MalformedEnvelope(format!(
            "期望 JSON 对象，实际为 {}",
            kind_of(&other)
        ))),
    }
}

fn unwrap_map(map: Map<String, Value>) -> Result<Value> {
    if map.len() != 1 {
        return Err(CsError::MalformedEnvelope(format!(
            "期望 1 个顶层键，实际 {} 个",
            map.len()
        )));
    }

    map.into_iter()
        .next()
        .map(|(_, v)| v)
        .ok_or_else(|| CsError::MalformedEnvelope("顶层键丢失".to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_raw_single_key() {
        let raw = br#"{"createaffinitygroupresponse": {"id": "X", "jobid": "J"}}"#;
        let inner = unwrap_raw(raw).unwrap();
        let value: Value = serde_json::from_str(inner.get()).unwrap();
        assert_eq!(value, json!({"id": "X", "jobid": "J"}));
    }

    #[test]
    fn test_unwrap_raw_preserves_bytes() {
        let raw = br#"{"outer": {"b":2,"a":1}}"#;
        let inner = unwrap_raw(raw).unwrap();
        assert_eq!(inner.get(), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn test_unwrap_is_idempotent() {
        let raw = br#"{"affinitygroup": {"id": "x", "name": "g"}}"#;
        let first = unwrap_raw(raw).unwrap();
        let second = unwrap_raw(raw).unwrap();
        assert_eq!(first.get(), second.get());
    }

    #[test]
    fn test_unwrap_raw_two_keys_rejected() {
        let err = unwrap_raw(br#"{"a": 1, "b": 2}"#).unwrap_err();
        assert!(matches!(err, CsError::MalformedEnvelope(_)));
    }

    #[test]
    fn test_unwrap_raw_duplicate_key_rejected() {
        let err = unwrap_raw(br#"{"a": 1, "a": 2}"#).unwrap_err();
        match err {
            CsError::MalformedEnvelope(msg) => assert!(msg.contains("2")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_raw_empty_object_rejected() {
        let err = unwrap_raw(b"{}").unwrap_err();
        assert!(matches!(err, CsError::MalformedEnvelope(_)));
    }

    #[test]
    fn test_unwrap_raw_non_object_rejected() {
        let cases: [&[u8]; 4] = [b"[1, 2]", b"42", b"\"text\"", b"not json"];
        for raw in cases {
            let err = unwrap_raw(raw).unwrap_err();
            assert!(matches!(err, CsError::MalformedEnvelope(_)));
        }
    }

    #[test]
    fn test_unwrap_value_scalar_inner() {
        let value = unwrap_value(json!({"success": true})).unwrap();
        assert_eq!(value, json!(true));
    }

    #[test]
    fn test_unwrap_value_rejects() {
        assert!(matches!(
            unwrap_value(json!({"a": 1, "b": 2})),
            Err(CsError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            unwrap_value(json!([{"a": 1}])),
            Err(CsError::MalformedEnvelope(_))
        ));
    }
}
