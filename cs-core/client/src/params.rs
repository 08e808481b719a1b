//! 请求参数编码
//!
//! 各操作的参数都是带 `Option` 字段的结构体，通过 serde 序列化后由
//! [`encode`] 统一转换为表单键值对。转换规则：
//!
//! - `None` 字段不输出
//! - 字符串原样输出，数字输出十进制文本，布尔输出 `true`/`false`
//! - 列表用逗号连接
//! - 字符串映射展开为 `name[i].key` / `name[i].value`，按键排序

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{CsError, Result};

/// 已编码的请求参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置参数（覆盖已有值）
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// 链式设置
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// 移除参数，返回原值
    pub fn reset(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// 将参数结构体编码为表单参数
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Params> {
    let value = serde_json::to_value(value).map_err(|e| CsError::Encode(e.to_string()))?;

    let object = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Params::new()),
        other => {
            return Err(CsError::Encode(format!(
                "参数必须是结构体或映射，实际为 {}",
                other
            )))
        }
    };

    let mut params = Params::new();
    for (key, field) in object {
        encode_field(&mut params, &key, field)?;
    }
    Ok(params)
}

fn encode_field(params: &mut Params, key: &str, field: Value) -> Result<()> {
    match field {
        Value::Null => {}
        Value::Array(items) => {
            let parts = items
                .into_iter()
                .map(|item| scalar(key, item))
                .collect::<Result<Vec<_>>>()?;
            params.set(key, parts.join(","));
        }
        Value::Object(map) => encode_map(params, key, map)?,
        other => {
            params.set(key, scalar(key, other)?);
        }
    }
    Ok(())
}

fn encode_map(params: &mut Params, key: &str, map: Map<String, Value>) -> Result<()> {
    // serde_json::Map 默认按键排序
    for (i, (name, value)) in map.into_iter().enumerate() {
        params.set(format!("{}[{}].key", key, i), name);
        params.set(format!("{}[{}].value", key, i), scalar(key, value)?);
    }
    Ok(())
}

fn scalar(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CsError::Encode(format!(
            "参数 {} 含不支持的嵌套值: {}",
            key, other
        ))),
    }
}
