//! 镜像存储管理 API

use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::lookup;
use crate::models::image_store::{
    AddImageStoreParams, DeleteImageStoreParams, ImageStore, ListImageStoresParams,
};
use crate::models::SuccessResponse;

const KIND: &str = "image store";

/// 镜像存储管理 API
pub struct ImageStoreApi<'a> {
    client: &'a CsClient,
}

impl<'a> ImageStoreApi<'a> {
    /// 创建新的镜像存储 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 添加镜像存储
    pub async fn add(&self, params: &AddImageStoreParams) -> Result<ImageStore> {
        info!("添加镜像存储: {} ({})", params.name.as_deref().unwrap_or("-"), params.provider);
        self.client.request(params).await
    }

    /// 查询镜像存储列表
    pub async fn list(&self, params: &ListImageStoresParams) -> Result<Vec<ImageStore>> {
        info!("查询镜像存储列表");
        let response = self.client.request(params).await?;
        Ok(response.image_stores)
    }

    /// 删除镜像存储
    pub async fn delete(&self, store_id: &str) -> Result<SuccessResponse> {
        info!("删除镜像存储: {}", store_id);
        self.client
            .request(&DeleteImageStoreParams { id: store_id.to_string() })
            .await
    }

    pub async fn get_id(&self, name: &str) -> Result<String> {
        Ok(self.get_by_name(name).await?.id)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<ImageStore> {
        let params = ListImageStoresParams {
            name: Some(name.to_string()),
            ..Default::default()
        };
        lookup::select_by_name(KIND, name, self.list(&params).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ImageStore> {
        let params = ListImageStoresParams {
            id: Some(id.to_string()),
            ..Default::default()
        };
        lookup::select_by_id(KIND, id, self.list(&params).await?)
    }
}
