//! 亲和组模型

use serde::{Deserialize, Serialize};

use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// 亲和组信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityGroup {
    /// 亲和组 ID
    pub id: String,

    /// 亲和组名称
    pub name: String,

    /// 类型，如 `host affinity` / `host anti-affinity`
    #[serde(rename = "type")]
    pub group_type: String,

    pub description: Option<String>,

    pub account: Option<String>,

    pub domain: Option<String>,

    pub domainid: Option<String>,

    pub project: Option<String>,

    pub projectid: Option<String>,

    /// 组内虚拟机 ID
    #[serde(rename = "virtualmachineIds")]
    pub virtual_machine_ids: Vec<String>,

    pub jobid: Option<String>,

    pub jobstatus: Option<i64>,
}

impl_named!(AffinityGroup);

/// createAffinityGroup 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAffinityGroupParams {
    /// 亲和组名称
    pub name: String,

    /// 亲和组类型
    #[serde(rename = "type")]
    pub group_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectid: Option<String>,
}

impl CreateAffinityGroupParams {
    pub fn new(name: &str, group_type: &str) -> Self {
        Self {
            name: name.to_string(),
            group_type: group_type.to_string(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn project(mut self, project_id: &str) -> Self {
        self.projectid = Some(project_id.to_string());
        self
    }
}

/// deleteAffinityGroup 参数，`id` 与 `name` 二选一
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAffinityGroupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectid: Option<String>,
}

impl DeleteAffinityGroupParams {
    pub fn by_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    pub fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// listAffinityGroups 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAffinityGroupsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listall: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtualmachineid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

/// listAffinityGroups 结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAffinityGroupsResponse {
    pub count: usize,

    #[serde(rename = "affinitygroup")]
    pub affinity_groups: Vec<AffinityGroup>,
}

/// listAffinityGroupTypes 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAffinityGroupTypesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityGroupType {
    #[serde(rename = "type")]
    pub group_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAffinityGroupTypesResponse {
    pub count: usize,

    #[serde(rename = "affinityGroupType")]
    pub types: Vec<AffinityGroupType>,
}

/// updateVMAffinityGroup 参数
///
/// 虚拟机必须处于停止状态；`affinitygroupids` 与 `affinitygroupnames` 二选一，
/// 传入空列表表示移出所有亲和组。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVmAffinityGroupParams {
    /// 虚拟机 ID
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinitygroupids: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinitygroupnames: Option<Vec<String>>,
}

impl UpdateVmAffinityGroupParams {
    pub fn with_ids(vm_id: &str, group_ids: Vec<String>) -> Self {
        Self {
            id: vm_id.to_string(),
            affinitygroupids: Some(group_ids),
            affinitygroupnames: None,
        }
    }

    pub fn with_names(vm_id: &str, group_names: Vec<String>) -> Self {
        Self {
            id: vm_id.to_string(),
            affinitygroupids: None,
            affinitygroupnames: Some(group_names),
        }
    }
}

/// updateVMAffinityGroup 返回的虚拟机摘要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachineSummary {
    pub id: String,

    pub name: String,

    pub displayname: Option<String>,

    pub state: Option<String>,

    pub zoneid: Option<String>,

    #[serde(rename = "affinitygroup")]
    pub affinity_groups: Vec<AffinityGroup>,

    pub jobid: Option<String>,

    pub jobstatus: Option<i64>,
}

api_command!(CreateAffinityGroupParams => AffinityGroup, "createAffinityGroup", job, Wrapped);
api_command!(DeleteAffinityGroupParams => SuccessResponse, "deleteAffinityGroup", job, Flat);
api_command!(ListAffinityGroupsParams => ListAffinityGroupsResponse, "listAffinityGroups", sync, Flat);
api_command!(ListAffinityGroupTypesParams => ListAffinityGroupTypesResponse, "listAffinityGroupTypes", sync, Flat);
api_command!(UpdateVmAffinityGroupParams => VirtualMachineSummary, "updateVMAffinityGroup", job, Wrapped);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;

    #[test]
    fn test_create_params_encoding() {
        let params = CreateAffinityGroupParams::new("web", "host anti-affinity")
            .description("front tier")
            .to_params()
            .unwrap();

        assert_eq!(params.get("name"), Some("web"));
        assert_eq!(params.get("type"), Some("host anti-affinity"));
        assert_eq!(params.get("description"), Some("front tier"));
        assert!(!params.contains("projectid"));
    }

    #[test]
    fn test_update_vm_clears_groups() {
        let params = UpdateVmAffinityGroupParams::with_ids("vm-1", vec![])
            .to_params()
            .unwrap();
        assert_eq!(params.get("affinitygroupids"), Some(""));
        assert!(!params.contains("affinitygroupnames"));
    }

    #[test]
    fn test_parse_affinity_group() {
        let group: AffinityGroup = serde_json::from_str(
            r#"{"id": "X", "name": "testAffinityGroup", "type": "host affinity",
                "virtualmachineIds": ["vm-1"]}"#,
        )
        .unwrap();
        assert_eq!(group.group_type, "host affinity");
        assert_eq!(group.virtual_machine_ids, vec!["vm-1"]);
    }
}
