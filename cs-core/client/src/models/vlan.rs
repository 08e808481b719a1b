//! VLAN IP 段模型

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::command::api_command;
use crate::lookup::Named;
use crate::models::SuccessResponse;

/// VLAN IP 段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanIpRange {
    pub id: String,

    /// VLAN 标签，如 `vlan://100` 或 `untagged`
    pub vlan: Option<String>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub forvirtualnetwork: Option<bool>,

    pub gateway: Option<String>,

    pub netmask: Option<String>,

    pub startip: Option<String>,

    pub endip: Option<String>,

    pub ip6gateway: Option<String>,

    pub ip6cidr: Option<String>,

    pub networkid: Option<String>,

    pub physicalnetworkid: Option<String>,

    pub podid: Option<String>,

    pub zoneid: Option<String>,

    pub account: Option<String>,

    pub domainid: Option<String>,
}

// IP 段没有名称，按 ID 查找即可
impl Named for VlanIpRange {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }
}

/// createVlanIpRange 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVlanIpRangeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forvirtualnetwork: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub startip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6gateway: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6cidr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub networkid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physicalnetworkid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,
}

impl CreateVlanIpRangeParams {
    /// 公共网络 IPv4 段
    pub fn public_ipv4(
        zone_id: &str,
        vlan: &str,
        gateway: &str,
        netmask: &str,
        start_ip: &str,
        end_ip: &str,
    ) -> Self {
        Self {
            zoneid: Some(zone_id.to_string()),
            vlan: Some(vlan.to_string()),
            forvirtualnetwork: Some(true),
            gateway: Some(gateway.to_string()),
            netmask: Some(netmask.to_string()),
            startip: Some(start_ip.to_string()),
            endip: Some(end_ip.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteVlanIpRangeParams {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListVlanIpRangesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forvirtualnetwork: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub networkid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physicalnetworkid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<String>,

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
pub struct ListVlanIpRangesResponse {
    pub count: usize,

    #[serde(rename = "vlaniprange")]
    pub ranges: Vec<VlanIpRange>,
}

api_command!(CreateVlanIpRangeParams => VlanIpRange, "createVlanIpRange", sync, Wrapped);
api_command!(DeleteVlanIpRangeParams => SuccessResponse, "deleteVlanIpRange", sync, Flat);
api_command!(ListVlanIpRangesParams => ListVlanIpRangesResponse, "listVlanIpRanges", sync, Flat);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;

    #[test]
    fn test_public_ipv4_params() {
        let params = CreateVlanIpRangeParams::public_ipv4(
            "z1",
            "vlan://100",
            "203.0.113.1",
            "255.255.255.0",
            "203.0.113.10",
            "203.0.113.50",
        )
        .to_params()
        .unwrap();

        assert_eq!(params.get("forvirtualnetwork"), Some("true"));
        assert_eq!(params.get("vlan"), Some("vlan://100"));
        assert!(!params.contains("podid"));
    }
}
