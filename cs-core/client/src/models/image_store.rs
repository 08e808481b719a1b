//! 镜像存储（二级存储）模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::coerce;
use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// 镜像存储信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageStore {
    pub id: String,

    pub name: String,

    /// `NFS` / `S3` / `Swift` 等
    pub providername: Option<String>,

    pub protocol: Option<String>,

    /// `ZONE` / `REGION`
    pub scope: Option<String>,

    pub url: Option<String>,

    pub zoneid: Option<String>,

    pub zonename: Option<String>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub readonly: Option<bool>,
}

impl_named!(ImageStore);

/// addImageStore 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddImageStoreParams {
    /// 存储提供者名称
    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    /// 提供者相关参数，编码为 `details[i].key/value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl AddImageStoreParams {
    pub fn nfs(name: &str, url: &str, zone_id: &str) -> Self {
        Self {
            provider: "NFS".to_string(),
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            zoneid: Some(zone_id.to_string()),
            details: None,
        }
    }

    pub fn detail(mut self, key: &str, value: &str) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListImageStoresParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListImageStoresResponse {
    pub count: usize,

    #[serde(rename = "imagestore")]
    pub image_stores: Vec<ImageStore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteImageStoreParams {
    pub id: String,
}

api_command!(AddImageStoreParams => ImageStore, "addImageStore", sync, Wrapped);
api_command!(ListImageStoresParams => ListImageStoresResponse, "listImageStores", sync, Flat);
api_command!(DeleteImageStoreParams => SuccessResponse, "deleteImageStore", sync, Flat);
