//! 模板管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::template::{
    CopyTemplateParams, DeleteTemplateParams, ListTemplatesParams, Template, UpdateTemplateParams,
};
use crate::models::SuccessResponse;

const KIND: &str = "template";

/// 模板管理 API
pub struct TemplateApi<'a> {
    client: &'a CsClient,
}

impl<'a> TemplateApi<'a> {
    /// 创建新的模板 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 查询模板列表
    pub async fn list(&self, params: &ListTemplatesParams) -> Result<Vec<Template>> {
        info!("查询模板列表: filter={}", params.templatefilter);
        let response = self.client.request(params).await?;
        Ok(response.templates)
    }

    /// 更新模板属性
    pub async fn update(&self, params: &UpdateTemplateParams) -> Result<Template> {
        info!("更新模板: {}", params.id);
        self.client.request(params).await
    }

    /// 删除模板
    pub async fn delete(&self, params: &DeleteTemplateParams) -> Result<SuccessResponse> {
        info!("删除模板: {}", params.id);
        self.client.request(params).await
    }

    /// 跨区域复制模板
    pub async fn copy(&self, params: &CopyTemplateParams) -> Result<Template> {
        info!("复制模板: {}", params.id);
        self.client.request(params).await
    }

    /// 按名称查询模板 ID
    ///
    /// 同一模板在每个区域各有一条记录，多区域环境下需要给出 `zone_id`。
    pub async fn get_id(&self, name: &str, filter: &str, zone_id: Option<&str>) -> Result<String> {
        Ok(self.get_by_name(name, filter, zone_id).await?.id)
    }

    pub async fn get_by_name(&self, name: &str, filter: &str, zone_id: Option<&str>) -> Result<Template> {
        let mut params = ListTemplatesParams::new(filter).zone(zone_id);
        params.name = Some(name.to_string());
        lookup::select_by_name(KIND, name, self.list(&params).await?)
    }

    pub async fn get_by_id(&self, id: &str, filter: &str, zone_id: Option<&str>) -> Result<Template> {
        let mut params = ListTemplatesParams::new(filter).zone(zone_id);
        params.id = Some(id.to_string());
        lookup::select_by_id(KIND, id, self.list(&params).await?)
    }
}
