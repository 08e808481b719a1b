//! CloudStack 客户端错误定义

use serde::de::DeserializeOwned;
use thiserror::Error;

/// CloudStack 客户端错误类型
#[derive(Error, Debug)]
pub enum CsError {
    /// 网络层失败，不在本层重试
    #[error("传输错误: {0}")]
    Transport(String),

    /// 非 2xx 且响应体不是 CloudStack 错误格式
    #[error("HTTP 错误 [{0}]: {1}")]
    Http(u16, String),

    /// 服务端返回的结构化错误
    #[error("服务端错误 [{code}/{cs_code}]: {text}")]
    Server {
        code: i64,
        cs_code: i64,
        text: String,
    },

    /// 异步任务以失败状态结束
    #[error("异步任务 {job_id} 失败 [{code}]: {text}")]
    AsyncJobFailed {
        job_id: String,
        code: i64,
        text: String,
    },

    /// 轮询超时，`partial` 保留提交时服务端立即返回的字段
    #[error("等待异步任务 {job_id} 超时")]
    AsyncTimeout {
        job_id: String,
        partial: serde_json::Value,
    },

    #[error("响应封装格式错误: {0}")]
    MalformedEnvelope(String),

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("参数编码错误: {0}")]
    Encode(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("未找到 {kind}: {key}")]
    NotFound { kind: String, key: String },

    #[error("{kind} 匹配不唯一: {key} (共 {count} 个结果)")]
    Ambiguous {
        kind: String,
        key: String,
        count: usize,
    },
}

impl CsError {
    /// 是否为轮询超时
    pub fn is_timeout(&self) -> bool {
        matches!(self, CsError::AsyncTimeout { .. })
    }

    /// 超时时取回提交阶段的部分结果
    ///
    /// 服务端在任务完成前通常已经分配了资源 ID，调用方可以借此继续跟踪。
    /// 非超时错误或无法解析为 `T` 时返回 `None`。
    ///
    /// ```ignore
    /// match client.affinity_group().create(&params).await {
    ///     Err(e) if e.is_timeout() => {
    ///         let partial: AffinityGroup = e.partial_result().unwrap();
    ///         println!("仍在创建: {:?}", partial.id);
    ///     }
    ///     other => { other?; }
    /// }
    /// ```
    pub fn partial_result<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            CsError::AsyncTimeout { partial, .. } => serde_json::from_value(partial.clone()).ok(),
            _ => None,
        }
    }

    /// 任务 ID（仅异步相关错误携带）
    pub fn job_id(&self) -> Option<&str> {
        match self {
            CsError::AsyncJobFailed { job_id, .. } | CsError::AsyncTimeout { job_id, .. } => {
                Some(job_id)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CsError {
    fn from(e: reqwest::Error) -> Self {
        CsError::Transport(e.to_string())
    }
}

/// CloudStack 客户端结果类型
pub type Result<T> = std::result::Result<T, CsError>;
