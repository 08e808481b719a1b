//! 提供点（Pod）模型

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// Pod 信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    pub id: String,

    pub name: String,

    pub zoneid: String,

    pub zonename: Option<String>,

    pub gateway: Option<String>,

    pub netmask: Option<String>,

    /// 旧版本返回单个字符串，新版本返回列表
    #[serde(deserialize_with = "coerce::seq_or_string")]
    pub startip: Vec<String>,

    #[serde(deserialize_with = "coerce::seq_or_string")]
    pub endip: Vec<String>,

    /// `Enabled` / `Disabled`
    pub allocationstate: Option<String>,
}

impl_named!(Pod);

/// createPod 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePodParams {
    pub name: String,

    pub zoneid: String,

    pub gateway: String,

    pub netmask: String,

    /// 管理网段起始 IP
    pub startip: String,

    /// 省略时服务端只分配 `startip` 一个地址
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocationstate: Option<String>,
}

impl CreatePodParams {
    pub fn new(name: &str, zone_id: &str, gateway: &str, netmask: &str, start_ip: &str) -> Self {
        Self {
            name: name.to_string(),
            zoneid: zone_id.to_string(),
            gateway: gateway.to_string(),
            netmask: netmask.to_string(),
            startip: start_ip.to_string(),
            endip: None,
            allocationstate: None,
        }
    }

    pub fn end_ip(mut self, end_ip: &str) -> Self {
        self.endip = Some(end_ip.to_string());
        self
    }
}

/// updatePod 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePodParams {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub startip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocationstate: Option<String>,
}

impl UpdatePodParams {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePodParams {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPodsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocationstate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcapacities: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPodsResponse {
    pub count: usize,

    #[serde(rename = "pod")]
    pub pods: Vec<Pod>,
}

api_command!(CreatePodParams => Pod, "createPod", sync, Wrapped);
api_command!(UpdatePodParams => Pod, "updatePod", sync, Wrapped);
api_command!(DeletePodParams => SuccessResponse, "deletePod", sync, Flat);
api_command!(ListPodsParams => ListPodsResponse, "listPods", sync, Flat);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pod_ip_ranges_both_forms() {
        let old: Pod = serde_json::from_value(json!({
            "id": "p1", "name": "pod-1", "zoneid": "z1",
            "startip": "10.0.0.10", "endip": "10.0.0.20"
        }))
        .unwrap();
        assert_eq!(old.startip, vec!["10.0.0.10"]);
        assert_eq!(old.endip, vec!["10.0.0.20"]);

        let new: Pod = serde_json::from_value(json!({
            "id": "p1", "name": "pod-1", "zoneid": "z1",
            "startip": ["10.0.0.10", "10.0.1.10"]
        }))
        .unwrap();
        assert_eq!(new.startip.len(), 2);
        assert!(new.endip.is_empty());
    }
}
