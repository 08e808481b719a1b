//! 服务端字段类型兼容
//!
//! 部分字段服务端时而返回字符串、时而返回原生类型：
//! - 布尔值可能是 `"true"` / `"false"`
//! - 部分数字 ID（如 `ostypeid`）可能是浮点数
//! - 部分列表字段（如提供点的 `startip`）旧版本返回单个字符串
//!
//! 用法：`#[serde(default, deserialize_with = "coerce::opt_bool_or_string")]`

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Number, Value};

/// 接受 `true` 或 `"true"`（不区分大小写）
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_bool(&value).map_err(de::Error::custom)
}

/// 可选版本，`null` 视为 `None`
pub fn opt_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => to_bool(&value).map(Some).map_err(de::Error::custom),
    }
}

/// 接受字符串或数字，数字转为十进制文本
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    to_string(&value).map_err(de::Error::custom)
}

/// 可选版本，`null` 视为 `None`
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => to_string(&value).map(Some).map_err(de::Error::custom),
    }
}

/// 接受单个字符串或字符串列表，缺失或 `null` 为空列表
pub fn seq_or_string<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(de::Error::custom),
        Some(value) => to_string(&value).map(|s| vec![s]).map_err(de::Error::custom),
    }
}

fn to_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(format!("无法解析为布尔值: {}", other)),
    }
}

fn to_string(value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_text(n)),
        other => Err(format!("无法解析为字符串: {}", other)),
    }
}

/// 整数值的浮点数不带小数部分
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Quirky {
        #[serde(deserialize_with = "bool_or_string")]
        flag: bool,

        #[serde(default, deserialize_with = "opt_bool_or_string")]
        maybe: Option<bool>,

        #[serde(deserialize_with = "string_or_number")]
        ostypeid: String,

        #[serde(default, deserialize_with = "opt_string_or_number")]
        other: Option<String>,

        #[serde(default, deserialize_with = "seq_or_string")]
        ips: Vec<String>,
    }

    #[test]
    fn test_bool_from_string() {
        let q: Quirky = serde_json::from_value(json!({
            "flag": "TRUE", "maybe": "false", "ostypeid": "abc"
        }))
        .unwrap();
        assert!(q.flag);
        assert_eq!(q.maybe, Some(false));
        assert_eq!(q.other, None);
    }

    #[test]
    fn test_native_values() {
        let q: Quirky = serde_json::from_value(json!({
            "flag": false, "maybe": true, "ostypeid": "4f3c", "other": null
        }))
        .unwrap();
        assert!(!q.flag);
        assert_eq!(q.maybe, Some(true));
        assert_eq!(q.ostypeid, "4f3c");
        assert_eq!(q.other, None);
    }

    #[test]
    fn test_float_id_to_string() {
        let q: Quirky = serde_json::from_value(json!({
            "flag": true, "ostypeid": 142.0, "other": 7.5
        }))
        .unwrap();
        assert_eq!(q.ostypeid, "142");
        assert_eq!(q.other.as_deref(), Some("7.5"));

        let q: Quirky = serde_json::from_value(json!({"flag": true, "ostypeid": 99})).unwrap();
        assert_eq!(q.ostypeid, "99");
    }

    #[test]
    fn test_seq_or_string() {
        let q: Quirky = serde_json::from_value(json!({
            "flag": true, "ostypeid": "1", "ips": "10.0.0.1"
        }))
        .unwrap();
        assert_eq!(q.ips, vec!["10.0.0.1"]);

        let q: Quirky = serde_json::from_value(json!({
            "flag": true, "ostypeid": "1", "ips": ["10.0.0.1", "10.0.1.1"]
        }))
        .unwrap();
        assert_eq!(q.ips.len(), 2);

        let q: Quirky = serde_json::from_value(json!({"flag": true, "ostypeid": "1"})).unwrap();
        assert!(q.ips.is_empty());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_value::<Quirky>(json!({"flag": "yes", "ostypeid": "1"})).is_err());
        assert!(serde_json::from_value::<Quirky>(json!({"flag": true, "ostypeid": [1]})).is_err());
    }
}
