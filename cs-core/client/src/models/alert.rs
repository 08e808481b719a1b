//! 告警模型

use serde::{Deserialize, Serialize};

use crate::command::api_command;
use crate::models::SuccessResponse;

/// 告警信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub id: String,

    pub name: String,

    pub description: String,

    /// 发送时间
    pub sent: Option<String>,

    /// 告警类型码
    #[serde(rename = "type")]
    pub alert_type: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAlertsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAlertsResponse {
    pub count: usize,

    #[serde(rename = "alert")]
    pub alerts: Vec<Alert>,
}

/// archiveAlerts / deleteAlerts 的筛选条件
///
/// 至少给出 `ids` 或 `alert_type`/日期范围之一，否则服务端拒绝。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,

    /// 格式 `yyyy-MM-dd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startdate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enddate: Option<String>,
}

impl AlertFilter {
    pub fn ids(ids: Vec<String>) -> Self {
        Self {
            ids: Some(ids),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_none()
            && self.alert_type.is_none()
            && self.startdate.is_none()
            && self.enddate.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveAlertsParams {
    #[serde(flatten)]
    pub filter: AlertFilter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAlertsParams {
    #[serde(flatten)]
    pub filter: AlertFilter,
}

/// generateAlert 参数（仅管理员）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateAlertParams {
    pub name: String,

    pub description: String,

    /// 告警类型码，需大于服务端保留值
    #[serde(rename = "type")]
    pub alert_type: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podid: Option<String>,
}

impl GenerateAlertParams {
    pub fn new(name: &str, description: &str, alert_type: i64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            alert_type,
            ..Default::default()
        }
    }
}

api_command!(ListAlertsParams => ListAlertsResponse, "listAlerts", sync, Flat);
api_command!(ArchiveAlertsParams => SuccessResponse, "archiveAlerts", sync, Flat);
api_command!(DeleteAlertsParams => SuccessResponse, "deleteAlerts", sync, Flat);
api_command!(GenerateAlertParams => SuccessResponse, "generateAlert", job, Flat);
