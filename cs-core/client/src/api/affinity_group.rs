//! 亲和组管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::affinity_group::{
    AffinityGroup, AffinityGroupType, CreateAffinityGroupParams, DeleteAffinityGroupParams,
    ListAffinityGroupTypesParams, ListAffinityGroupsParams, UpdateVmAffinityGroupParams,
    VirtualMachineSummary,
};
use crate::models::SuccessResponse;

const KIND: &str = "affinity group";

/// 亲和组管理 API
pub struct AffinityGroupApi<'a> {
    client: &'a CsClient,
}

impl<'a> AffinityGroupApi<'a> {
    /// 创建新的亲和组 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 创建亲和组
    ///
    /// 关闭 `async_mode` 时只有 `id`、`jobid` 有值。
    pub async fn create(&self, params: &CreateAffinityGroupParams) -> Result<AffinityGroup> {
        info!("创建亲和组: {} ({})", params.name, params.group_type);
        self.client.request(params).await
    }

    /// 删除亲和组
    pub async fn delete(&self, params: &DeleteAffinityGroupParams) -> Result<SuccessResponse> {
        info!(
            "删除亲和组: {}",
            params.id.as_deref().or(params.name.as_deref()).unwrap_or("-")
        );
        self.client.request(params).await
    }

    /// 查询亲和组列表
    pub async fn list(&self, params: &ListAffinityGroupsParams) -> Result<Vec<AffinityGroup>> {
        info!("查询亲和组列表");
        let response = self.client.request(params).await?;
        Ok(response.affinity_groups)
    }

    /// 查询支持的亲和组类型
    pub async fn list_types(&self) -> Result<Vec<AffinityGroupType>> {
        info!("查询亲和组类型");
        let response = self
            .client
            .request(&ListAffinityGroupTypesParams::default())
            .await?;
        Ok(response.types)
    }

    /// 更新虚拟机所属亲和组
    pub async fn update_vm(&self, params: &UpdateVmAffinityGroupParams) -> Result<VirtualMachineSummary> {
        info!("更新虚拟机亲和组: {}", params.id);
        self.client.request(params).await
    }

    /// 按名称查询亲和组 ID
    pub async fn get_id(&self, name: &str) -> Result<String> {
        Ok(self.get_by_name(name).await?.id)
    }

    /// 按名称查询亲和组
    pub async fn get_by_name(&self, name: &str) -> Result<AffinityGroup> {
        info!("按名称查询亲和组: {}", name);
        let params = ListAffinityGroupsParams {
            name: Some(name.to_string()),
            listall: Some(true),
            ..Default::default()
        };
        let items = self.client.request(&params).await?.affinity_groups;
        lookup::select_by_name(KIND, name, items)
    }

    /// 按 ID 查询亲和组
    pub async fn get_by_id(&self, id: &str) -> Result<AffinityGroup> {
        info!("按 ID 查询亲和组: {}", id);
        let params = ListAffinityGroupsParams {
            id: Some(id.to_string()),
            listall: Some(true),
            ..Default::default()
        };
        let items = self.client.request(&params).await?.affinity_groups;
        lookup::select_by_id(KIND, id, items)
    }
}
