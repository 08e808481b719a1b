//! CloudStack API 客户端
//!
//! 提供与 Apache CloudStack 管理服务器 API 交互的客户端实现。
//!
//! # 功能
//!
//! - **命令分发** (`CsClient::request`): 类型化参数编码、外层封装解包、错误识别
//! - **异步任务** (`AsyncJobCoordinator`): 提交后自动轮询 `queryAsyncJobResult`，
//!   解包 `jobresult` 并与提交结果合并；超时时保留部分结果
//! - **服务 API**: 亲和组、告警、集群、全局配置、镜像存储、网络方案、
//!   提供点、模板、VLAN IP 段
//! - **名称查找**: `get_id` / `get_by_name` / `get_by_id`
//! - **配置加载** (`ClientConfig`): 默认值 < 配置文件 < 环境变量
//!
//! # 示例
//!
//! ```ignore
//! use cs_client::{ClientConfig, CsClient};
//! use cs_client::models::affinity_group::CreateAffinityGroupParams;
//!
//! let client = CsClient::new(ClientConfig::load()?)?;
//!
//! // 创建亲和组，默认等待异步任务完成
//! let params = CreateAffinityGroupParams::new("web", "host anti-affinity");
//! let group = client.affinity_group().create(&params).await?;
//!
//! // 按名称查询模板 ID
//! let id = client.template().get_id("CentOS 7", "featured", Some("zone-1")).await?;
//! ```

pub mod api;
pub mod client;
pub mod coerce;
pub mod command;
pub mod config;
pub mod coordinator;
pub mod envelope;
pub mod error;
pub mod lookup;
pub mod models;
pub mod params;
pub mod transport;

pub use client::CsClient;
pub use command::{ApiCommand, ResponseShape};
pub use config::ClientConfig;
pub use coordinator::AsyncJobCoordinator;
pub use error::{CsError, Result};
pub use lookup::Named;
pub use params::Params;
pub use transport::{HttpTransport, Transport};

#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;

// 导出 API 模块
pub use api::{
    AffinityGroupApi, AlertApi, AsyncJobApi, ClusterApi, ConfigurationApi, ImageStoreApi,
    NetworkOfferingApi, PodApi, TemplateApi, VlanApi,
};

// 导出常用数据模型
pub use models::async_job::{JobStatus, QueryAsyncJobResultResponse};
pub use models::SuccessResponse;
