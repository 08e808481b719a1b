//! 集群管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::cluster::{Cluster, DeleteClusterParams, ListClustersParams, UpdateClusterParams};
use crate::models::SuccessResponse;

const KIND: &str = "cluster";

/// 集群管理 API
pub struct ClusterApi<'a> {
    client: &'a CsClient,
}

impl<'a> ClusterApi<'a> {
    /// 创建新的集群 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 查询集群列表
    pub async fn list(&self, params: &ListClustersParams) -> Result<Vec<Cluster>> {
        info!("查询集群列表");
        let response = self.client.request(params).await?;
        Ok(response.clusters)
    }

    /// 更新集群
    pub async fn update(&self, params: &UpdateClusterParams) -> Result<Cluster> {
        info!("更新集群: {}", params.id);
        self.client.request(params).await
    }

    /// 删除集群
    pub async fn delete(&self, cluster_id: &str) -> Result<SuccessResponse> {
        info!("删除集群: {}", cluster_id);
        self.client
            .request(&DeleteClusterParams { id: cluster_id.to_string() })
            .await
    }

    pub async fn get_id(&self, name: &str) -> Result<String> {
        Ok(self.get_by_name(name).await?.id)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Cluster> {
        info!("按名称查询集群: {}", name);
        let params = ListClustersParams {
            name: Some(name.to_string()),
            ..Default::default()
        };
        lookup::select_by_name(KIND, name, self.list(&params).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Cluster> {
        info!("按 ID 查询集群: {}", id);
        let params = ListClustersParams {
            id: Some(id.to_string()),
            ..Default::default()
        };
        lookup::select_by_id(KIND, id, self.list(&params).await?)
    }
}
