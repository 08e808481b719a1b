//! 网络方案模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::coerce;
use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// 网络方案信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOffering {
    pub id: String,

    pub name: String,

    pub displaytext: Option<String>,

    /// `Isolated` / `Shared` / `L2`
    pub guestiptype: Option<String>,

    pub traffictype: Option<String>,

    /// `Enabled` / `Disabled` / `Inactive`
    pub state: Option<String>,

    /// `Required` / `Optional` / `Unavailable`
    pub availability: Option<String>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isdefault: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub ispersistent: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub specifyvlan: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub conservemode: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub forvpc: Option<bool>,

    /// Mbps
    pub networkrate: Option<i64>,

    pub serviceofferingid: Option<String>,

    pub tags: Option<String>,

    pub created: Option<String>,
}

impl_named!(NetworkOffering);

/// createNetworkOffering 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNetworkOfferingParams {
    pub name: String,

    pub displaytext: String,

    pub guestiptype: String,

    pub traffictype: String,

    /// 支持的服务列表，如 `Dhcp,Dns,SourceNat`
    pub supportedservices: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conservemode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub egressdefaultpolicy: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ispersistent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifyvlan: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifyipranges: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forvpc: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub networkrate: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serviceofferingid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl CreateNetworkOfferingParams {
    pub fn new(
        name: &str,
        displaytext: &str,
        guestiptype: &str,
        traffictype: &str,
        supportedservices: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            displaytext: displaytext.to_string(),
            guestiptype: guestiptype.to_string(),
            traffictype: traffictype.to_string(),
            supportedservices,
            ..Default::default()
        }
    }
}

/// updateNetworkOffering 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNetworkOfferingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaytext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortkey: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxconnections: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepaliveenabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl UpdateNetworkOfferingParams {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNetworkOfferingParams {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNetworkOfferingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guestiptype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffictype: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isdefault: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forvpc: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListNetworkOfferingsResponse {
    pub count: usize,

    #[serde(rename = "networkoffering")]
    pub network_offerings: Vec<NetworkOffering>,
}

api_command!(CreateNetworkOfferingParams => NetworkOffering, "createNetworkOffering", sync, Wrapped);
api_command!(UpdateNetworkOfferingParams => NetworkOffering, "updateNetworkOffering", sync, Wrapped);
api_command!(DeleteNetworkOfferingParams => SuccessResponse, "deleteNetworkOffering", sync, Flat);
api_command!(ListNetworkOfferingsParams => ListNetworkOfferingsResponse, "listNetworkOfferings", sync, Flat);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;
    use serde_json::json;

    #[test]
    fn test_create_params_services_joined() {
        let mut p = CreateNetworkOfferingParams::new(
            "isolated-nat",
            "Isolated with NAT",
            "Isolated",
            "Guest",
            vec!["Dhcp".into(), "Dns".into(), "SourceNat".into()],
        );
        p.conservemode = Some(false);

        let params = p.to_params().unwrap();
        assert_eq!(params.get("supportedservices"), Some("Dhcp,Dns,SourceNat"));
        assert_eq!(params.get("conservemode"), Some("false"));
        assert!(!params.contains("networkrate"));
    }

    #[test]
    fn test_parse_offering_string_flags() {
        let offering: NetworkOffering = serde_json::from_value(json!({
            "id": "o1", "name": "isolated-nat", "isdefault": "true", "specifyvlan": false
        }))
        .unwrap();
        assert_eq!(offering.isdefault, Some(true));
        assert_eq!(offering.specifyvlan, Some(false));
    }
}
