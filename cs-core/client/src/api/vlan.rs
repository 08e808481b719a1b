//! VLAN IP 段管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::vlan::{
    CreateVlanIpRangeParams, DeleteVlanIpRangeParams, ListVlanIpRangesParams, VlanIpRange,
};
use crate::models::SuccessResponse;

/// VLAN IP 段管理 API
pub struct VlanApi<'a> {
    client: &'a CsClient,
}

impl<'a> VlanApi<'a> {
    /// 创建新的 VLAN API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 创建 IP 段
    pub async fn create(&self, params: &CreateVlanIpRangeParams) -> Result<VlanIpRange> {
        info!(
            "创建 VLAN IP 段: {} - {}",
            params.startip.as_deref().unwrap_or("-"),
            params.endip.as_deref().unwrap_or("-")
        );
        self.client.request(params).await
    }

    /// 删除 IP 段
    pub async fn delete(&self, range_id: &str) -> Result<SuccessResponse> {
        info!("删除 VLAN IP 段: {}", range_id);
        self.client
            .request(&DeleteVlanIpRangeParams { id: range_id.to_string() })
            .await
    }

    /// 查询 IP 段列表
    pub async fn list(&self, params: &ListVlanIpRangesParams) -> Result<Vec<VlanIpRange>> {
        info!("查询 VLAN IP 段列表");
        let response = self.client.request(params).await?;
        Ok(response.ranges)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VlanIpRange> {
        let params = ListVlanIpRangesParams {
            id: Some(id.to_string()),
            ..Default::default()
        };
        lookup::select_by_id("vlan ip range", id, self.list(&params).await?)
    }
}
