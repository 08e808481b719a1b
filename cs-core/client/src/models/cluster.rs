//! 集群模型

use serde::{Deserialize, Serialize};

use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// 集群信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    /// 集群 ID
    pub id: String,

    /// 集群名称
    pub name: String,

    /// `Enabled` / `Disabled`
    pub allocationstate: Option<String>,

    /// `CloudManaged` / `ExternalManaged`
    pub clustertype: Option<String>,

    pub hypervisortype: Option<String>,

    pub managedstate: Option<String>,

    /// 超分比，服务端以字符串返回
    pub cpuovercommitratio: Option<String>,

    pub memoryovercommitratio: Option<String>,

    pub podid: Option<String>,

    pub podname: Option<String>,

    pub zoneid: Option<String>,

    pub zonename: Option<String>,
}

impl_named!(Cluster);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListClustersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocationstate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clustertype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managedstate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcapacities: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListClustersResponse {
    pub count: usize,

    #[serde(rename = "cluster")]
    pub clusters: Vec<Cluster>,
}

/// updateCluster 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClusterParams {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clustername: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocationstate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clustertype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managedstate: Option<String>,
}

impl UpdateClusterParams {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteClusterParams {
    pub id: String,
}

api_command!(ListClustersParams => ListClustersResponse, "listClusters", sync, Flat);
api_command!(UpdateClusterParams => Cluster, "updateCluster", sync, Wrapped);
api_command!(DeleteClusterParams => SuccessResponse, "deleteCluster", sync, Flat);
