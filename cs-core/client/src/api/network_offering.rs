//! 网络方案管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::network_offering::{
    CreateNetworkOfferingParams, DeleteNetworkOfferingParams, ListNetworkOfferingsParams,
    NetworkOffering, UpdateNetworkOfferingParams,
};
use crate::models::SuccessResponse;

const KIND: &str = "network offering";

/// 网络方案管理 API
pub struct NetworkOfferingApi<'a> {
    client: &'a CsClient,
}

impl<'a> NetworkOfferingApi<'a> {
    /// 创建新的网络方案 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 创建网络方案
    pub async fn create(&self, params: &CreateNetworkOfferingParams) -> Result<NetworkOffering> {
        info!("创建网络方案: {} ({})", params.name, params.guestiptype);
        self.client.request(params).await
    }

    /// 更新网络方案
    pub async fn update(&self, params: &UpdateNetworkOfferingParams) -> Result<NetworkOffering> {
        info!("更新网络方案: {}", params.id.as_deref().unwrap_or("-"));
        self.client.request(params).await
    }

    /// 删除网络方案
    pub async fn delete(&self, offering_id: &str) -> Result<SuccessResponse> {
        info!("删除网络方案: {}", offering_id);
        self.client
            .request(&DeleteNetworkOfferingParams { id: offering_id.to_string() })
            .await
    }

    /// 查询网络方案列表
    pub async fn list(&self, params: &ListNetworkOfferingsParams) -> Result<Vec<NetworkOffering>> {
        info!("查询网络方案列表");
        let response = self.client.request(params).await?;
        Ok(response.network_offerings)
    }

    pub async fn get_id(&self, name: &str) -> Result<String> {
        Ok(self.get_by_name(name).await?.id)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<NetworkOffering> {
        let params = ListNetworkOfferingsParams {
            name: Some(name.to_string()),
            ..Default::default()
        };
        lookup::select_by_name(KIND, name, self.list(&params).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<NetworkOffering> {
        let params = ListNetworkOfferingsParams {
            id: Some(id.to_string()),
            ..Default::default()
        };
        lookup::select_by_id(KIND, id, self.list(&params).await?)
    }
}
