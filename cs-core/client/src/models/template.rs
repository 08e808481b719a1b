//! 模板模型

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::command::api_command;
use crate::lookup::impl_named;
use crate::models::SuccessResponse;

/// 模板信息
///
/// 同一模板在多个区域各有一条记录，`id` 相同而 `zoneid` 不同。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: String,

    pub name: String,

    pub displaytext: Option<String>,

    /// 部分版本以数字返回
    #[serde(deserialize_with = "coerce::opt_string_or_number")]
    pub ostypeid: Option<String>,

    pub ostypename: Option<String>,

    pub format: Option<String>,

    pub hypervisor: Option<String>,

    pub templatetype: Option<String>,

    pub status: Option<String>,

    pub size: Option<i64>,

    pub zoneid: Option<String>,

    pub zonename: Option<String>,

    pub account: Option<String>,

    pub domainid: Option<String>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isready: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub ispublic: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isfeatured: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isextractable: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub isdynamicallyscalable: Option<bool>,

    #[serde(deserialize_with = "coerce::opt_bool_or_string")]
    pub passwordenabled: Option<bool>,

    pub created: Option<String>,

    pub jobid: Option<String>,

    pub jobstatus: Option<i64>,
}

impl_named!(Template);

/// listTemplates 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplatesParams {
    /// `featured` / `self` / `selfexecutable` / `sharedexecutable` /
    /// `executable` / `community` / `all`
    pub templatefilter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub showremoved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

impl ListTemplatesParams {
    pub fn new(filter: &str) -> Self {
        Self {
            templatefilter: filter.to_string(),
            ..Default::default()
        }
    }

    pub fn zone(mut self, zone_id: Option<&str>) -> Self {
        self.zoneid = zone_id.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTemplatesResponse {
    pub count: usize,

    #[serde(rename = "template")]
    pub templates: Vec<Template>,
}

/// updateTemplate 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateParams {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaytext: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ostypeid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwordenabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isdynamicallyscalable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortkey: Option<i64>,
}

impl UpdateTemplateParams {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }
}

/// deleteTemplate 参数，不给 `zoneid` 时从所有区域删除
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTemplateParams {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub forced: Option<bool>,
}

/// copyTemplate 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyTemplateParams {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcezoneid: Option<String>,

    /// 目标区域列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destzoneids: Option<Vec<String>>,
}

impl CopyTemplateParams {
    pub fn new(id: &str, source_zone: &str, dest_zones: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            sourcezoneid: Some(source_zone.to_string()),
            destzoneids: Some(dest_zones),
        }
    }
}

api_command!(ListTemplatesParams => ListTemplatesResponse, "listTemplates", sync, Flat);
api_command!(UpdateTemplateParams => Template, "updateTemplate", sync, Wrapped);
api_command!(DeleteTemplateParams => SuccessResponse, "deleteTemplate", job, Flat);
api_command!(CopyTemplateParams => Template, "copyTemplate", job, Wrapped);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ApiCommand;
    use serde_json::json;

    #[test]
    fn test_template_quirky_fields() {
        let t: Template = serde_json::from_value(json!({
            "id": "t1",
            "name": "CentOS 7",
            "ostypeid": 142,
            "isdynamicallyscalable": "false",
            "passwordenabled": true,
            "isready": "true"
        }))
        .unwrap();

        assert_eq!(t.ostypeid.as_deref(), Some("142"));
        assert_eq!(t.isdynamicallyscalable, Some(false));
        assert_eq!(t.passwordenabled, Some(true));
        assert_eq!(t.isready, Some(true));
    }

    #[test]
    fn test_list_params_filter_and_zone() {
        let params = ListTemplatesParams::new("featured").zone(Some("z1")).to_params().unwrap();
        assert_eq!(params.get("templatefilter"), Some("featured"));
        assert_eq!(params.get("zoneid"), Some("z1"));

        let params = ListTemplatesParams::new("self").zone(None).to_params().unwrap();
        assert!(!params.contains("zoneid"));
    }

    #[test]
    fn test_copy_dest_zones() {
        let params = CopyTemplateParams::new("t1", "z1", vec!["z2".into(), "z3".into()])
            .to_params()
            .unwrap();
        assert_eq!(params.get("destzoneids"), Some("z2,z3"));
    }
}
