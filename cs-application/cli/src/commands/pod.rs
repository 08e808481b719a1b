//! 提供点命令

use anyhow::{Context, Result};
use cs_client::models::pod::{ListPodsParams, Pod};
use cs_client::CsClient;

use crate::commands::output::{cell, output_formatted, TableRow};
use crate::PodAction;

impl TableRow for Pod {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "ZONE", "GATEWAY", "STATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.zonename.clone().unwrap_or_else(|| self.zoneid.clone()),
            cell(self.gateway.as_deref()),
            cell(self.allocationstate.as_deref()),
        ]
    }
}

pub async fn handle(client: &CsClient, action: PodAction) -> Result<()> {
    match action {
        PodAction::List { zone, format } => {
            let params = ListPodsParams {
                zoneid: zone,
                ..Default::default()
            };
            let pods = client.pod().list(&params).await.context("查询提供点失败")?;

            output_formatted(&pods, &format)
        }
    }
}
