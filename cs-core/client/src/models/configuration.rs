//! 全局配置模型

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::command::api_command;

/// 配置项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// 配置名，如 `expunge.delay`
    pub name: String,

    pub value: Option<String>,

    pub category: Option<String>,

    pub description: Option<String>,

    /// 作用域：`zone` / `cluster` / `account` 等
    pub scope: Option<String>,

    /// 作用域对象 ID
    pub id: Option<String>,

    /// 修改后是否立即生效
    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isdynamic: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConfigurationsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusterid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storageid: Option<String>,

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
pub struct ListConfigurationsResponse {
    pub count: usize,

    #[serde(rename = "configuration")]
    pub configurations: Vec<Configuration>,
}

/// updateConfiguration 参数，作用域 ID 最多给一个
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateConfigurationParams {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusterid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storageid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,
}

impl UpdateConfigurationParams {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    pub fn zone(mut self, zone_id: &str) -> Self {
        self.zoneid = Some(zone_id.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCapabilitiesParams {}

/// 平台能力
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub cloudstackversion: String,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub securitygroupsenabled: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub userpublictemplateenabled: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub allowusercreateprojects: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub projectinviterequired: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub kvmsnapshotenabled: Option<bool>,

    #[serde(rename = "supportELB")]
    pub support_elb: Option<String>,

    pub apilimitinterval: Option<i64>,

    pub apilimitmax: Option<i64>,

    pub customdiskofferingmaxsize: Option<i64>,

    pub customdiskofferingminsize: Option<i64>,
}

api_command!(ListConfigurationsParams => ListConfigurationsResponse, "listConfigurations", sync, Flat);
api_command!(UpdateConfigurationParams => Configuration, "updateConfiguration", sync, Wrapped);
api_command!(ListCapabilitiesParams => Capabilities, "listCapabilities", sync, Wrapped);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;
    use serde_json::json;

    #[test]
    fn test_capabilities_string_flags() {
        let caps: Capabilities = serde_json::from_value(json!({
            "cloudstackversion": "4.19.0.0",
            "securitygroupsenabled": "false",
            "allowusercreateprojects": true,
            "supportELB": "false",
            "apilimitmax": 25
        }))
        .unwrap();

        assert_eq!(caps.cloudstackversion, "4.19.0.0");
        assert_eq!(caps.securitygroupsenabled, Some(false));
        assert_eq!(caps.allowusercreateprojects, Some(true));
        assert_eq!(caps.kvmsnapshotenabled, None);
        assert_eq!(caps.apilimitmax, Some(25));
    }

    #[test]
    fn test_empty_params() {
        assert!(ListCapabilitiesParams::default().to_params().unwrap().is_empty());
    }

    #[test]
    fn test_update_params() {
        let params = UpdateConfigurationParams::new("expunge.delay", "60")
            .zone("z1")
            .to_params()
            .unwrap();
        assert_eq!(params.get("name"), Some("expunge.delay"));
        assert_eq!(params.get("value"), Some("60"));
        assert_eq!(params.get("zoneid"), Some("z1"));
    }
}
