//! 告警管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::models::alert::{
    Alert, AlertFilter, ArchiveAlertsParams, DeleteAlertsParams, GenerateAlertParams,
    ListAlertsParams,
};
use crate::models::SuccessResponse;

/// 告警管理 API
pub struct AlertApi<'a> {
    client: &'a CsClient,
}

impl<'a> AlertApi<'a> {
    /// 创建新的告警 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 查询告警列表
    pub async fn list(&self, params: &ListAlertsParams) -> Result<Vec<Alert>> {
        info!("查询告警列表");
        let response = self.client.request(params).await?;
        Ok(response.alerts)
    }

    /// 归档告警
    pub async fn archive(&self, filter: AlertFilter) -> Result<SuccessResponse> {
        info!("归档告警");
        self.client.request(&ArchiveAlertsParams { filter }).await
    }

    /// 删除告警
    pub async fn delete(&self, filter: AlertFilter) -> Result<SuccessResponse> {
        info!("删除告警");
        self.client.request(&DeleteAlertsParams { filter }).await
    }

    /// 生成一条自定义告警
    pub async fn generate(&self, params: &GenerateAlertParams) -> Result<SuccessResponse> {
        info!("生成告警: {} (type={})", params.name, params.alert_type);
        self.client.request(params).await
    }
}
