//! CloudStack 服务 API 模块
//!
//! 每个服务一个借用句柄，通过 `CsClient` 上的同名方法获取：
//! - 异步任务 (AsyncJobApi)
//! - 亲和组管理 (AffinityGroupApi)
//! - 告警管理 (AlertApi)
//! - 集群管理 (ClusterApi)
//! - 全局配置 (ConfigurationApi)
//! - 镜像存储管理 (ImageStoreApi)
//! - 网络方案管理 (NetworkOfferingApi)
//! - 提供点管理 (PodApi)
//! - 模板管理 (TemplateApi)
//! - VLAN IP 段管理 (VlanApi)

pub mod async_job;
pub mod affinity_group;
pub mod alert;
pub mod cluster;
pub mod configuration;
pub mod image_store;
pub mod network_offering;
pub mod pod;
pub mod template;
pub mod vlan;

pub use async_job::AsyncJobApi;
pub use affinity_group::AffinityGroupApi;
pub use alert::AlertApi;
pub use cluster::ClusterApi;
pub use configuration::ConfigurationApi;
pub use image_store::ImageStoreApi;
pub use network_offering::NetworkOfferingApi;
pub use pod::PodApi;
pub use template::TemplateApi;
pub use vlan::VlanApi;
