//! 告警命令

use anyhow::{Context, Result};
use cs_client::models::alert::{Alert, ListAlertsParams};
use cs_client::CsClient;

use crate::commands::output::{cell, output_formatted, TableRow};
use crate::AlertAction;

impl TableRow for Alert {
    fn headers() -> Vec<&'static str> {
        vec!["SENT", "TYPE", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            cell(self.sent.as_deref()),
            self.alert_type.to_string(),
            self.description.clone(),
        ]
    }
}

pub async fn handle(client: &CsClient, action: AlertAction) -> Result<()> {
    match action {
        AlertAction::List { alert_type, format } => {
            let params = ListAlertsParams {
                alert_type,
                ..Default::default()
            };
            let alerts = client.alert().list(&params).await.context("查询告警失败")?;

            output_formatted(&alerts, &format)
        }
    }
}
