//! CloudStack 数据模型
//!
//! 每个服务一个子模块，包含请求参数结构体、响应结构体及其
//! [`ApiCommand`](crate::command::ApiCommand) 绑定。
//!
//! 响应结构体统一加 `#[serde(default)]`：异步命令在非 `async_mode`
//! 下只返回 `id`/`jobid`，其余字段需要能缺省。

use serde::{Deserialize, Serialize};

use crate::coerce;

pub mod affinity_group;
pub mod alert;
pub mod async_job;
pub mod cluster;
pub mod configuration;
pub mod image_store;
pub mod network_offering;
pub mod pod;
pub mod template;
pub mod vlan;

/// 删除类操作的通用结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessResponse {
    /// 服务端可能返回 `"true"` 字符串
    #[serde(deserialize_with = "coerce::bool_or_string")]
    pub success: bool,

    pub displaytext: Option<String>,

    pub jobid: Option<String>,

    pub jobstatus: Option<i64>,
}
