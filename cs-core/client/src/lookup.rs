//! 名称/ID 查找辅助
//!
//! 服务端的 `name` 过滤是模糊匹配，可能返回多个结果。匹配规则：
//! - 0 个结果：`NotFound`
//! - 1 个结果：直接返回
//! - 多个结果：取名称完全相等的唯一一项，否则 `Ambiguous`

use crate::error::{CsError, Result};

/// 可按名称/ID 查找的资源
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// 按名称选出唯一资源
pub fn select_by_name<T: Named>(kind: &str, name: &str, items: Vec<T>) -> Result<T> {
    let count = items.len();
    match count {
        0 => Err(not_found(kind, name)),
        1 => items.into_iter().next().ok_or_else(|| not_found(kind, name)),
        _ => {
            let mut exact: Vec<T> = items.into_iter().filter(|i| i.name() == name).collect();
            if exact.len() == 1 {
                Ok(exact.remove(0))
            } else {
                Err(CsError::Ambiguous {
                    kind: kind.to_string(),
                    key: name.to_string(),
                    count,
                })
            }
        }
    }
}

/// 按 ID 选出唯一资源
pub fn select_by_id<T: Named>(kind: &str, id: &str, items: Vec<T>) -> Result<T> {
    let count = items.len();
    match count {
        0 => Err(not_found(kind, id)),
        1 => items.into_iter().next().ok_or_else(|| not_found(kind, id)),
        _ => Err(CsError::Ambiguous {
            kind: kind.to_string(),
            key: id.to_string(),
            count,
        }),
    }
}

fn not_found(kind: &str, key: &str) -> CsError {
    CsError::NotFound {
        kind: kind.to_string(),
        key: key.to_string(),
    }
}

/// 为带 `id`/`name` 字段的模型实现 [`Named`]
macro_rules! impl_named {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::lookup::Named for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

pub(crate) use impl_named;
