//! 提供点管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::pod::{CreatePodParams, DeletePodParams, ListPodsParams, Pod, UpdatePodParams};
use crate::models::SuccessResponse;

const KIND: &str = "pod";

/// 提供点管理 API
pub struct PodApi<'a> {
    client: &'a CsClient,
}

impl<'a> PodApi<'a> {
    /// 创建新的提供点 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 创建提供点
    pub async fn create(&self, params: &CreatePodParams) -> Result<Pod> {
        info!("创建提供点: {} (zone={})", params.name, params.zoneid);
        self.client.request(params).await
    }

    /// 更新提供点
    pub async fn update(&self, params: &UpdatePodParams) -> Result<Pod> {
        info!("更新提供点: {}", params.id);
        self.client.request(params).await
    }

    /// 删除提供点
    pub async fn delete(&self, pod_id: &str) -> Result<SuccessResponse> {
        info!("删除提供点: {}", pod_id);
        self.client
            .request(&DeletePodParams { id: pod_id.to_string() })
            .await
    }

    /// 查询提供点列表
    pub async fn list(&self, params: &ListPodsParams) -> Result<Vec<Pod>> {
        info!("查询提供点列表");
        let response = self.client.request(params).await?;
        Ok(response.pods)
    }

    pub async fn get_id(&self, name: &str) -> Result<String> {
        Ok(self.get_by_name(name).await?.id)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Pod> {
        let params = ListPodsParams {
            name: Some(name.to_string()),
            ..Default::default()
        };
        lookup::select_by_name(KIND, name, self.list(&params).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Pod> {
        let params = ListPodsParams {
            id: Some(id.to_string()),
            ..Default::default()
        };
        lookup::select_by_id(KIND, id, self.list(&params).await?)
    }
}
