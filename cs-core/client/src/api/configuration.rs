//! 全局配置 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::models::configuration::{
    Capabilities, Configuration, ListCapabilitiesParams, ListConfigurationsParams,
    UpdateConfigurationParams,
};

/// 全局配置 API
pub struct ConfigurationApi<'a> {
    client: &'a CsClient,
}

impl<'a> ConfigurationApi<'a> {
    /// 创建新的配置 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 查询配置项
    pub async fn list(&self, params: &ListConfigurationsParams) -> Result<Vec<Configuration>> {
        info!("查询配置项");
        let response = self.client.request(params).await?;
        Ok(response.configurations)
    }

    /// 修改配置项
    pub async fn update(&self, params: &UpdateConfigurationParams) -> Result<Configuration> {
        info!("修改配置项: {}", params.name);
        self.client.request(params).await
    }

    /// 查询平台能力
    pub async fn capabilities(&self) -> Result<Capabilities> {
        info!("查询平台能力");
        self.client.request(&ListCapabilitiesParams::default()).await
    }
}
