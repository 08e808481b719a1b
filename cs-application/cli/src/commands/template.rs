//! 模板命令

use anyhow::{Context, Result};
use cs_client::models::template::{ListTemplatesParams, Template};
use cs_client::CsClient;

use crate::commands::output::{cell, output_formatted, TableRow};
use crate::TemplateAction;

impl TableRow for Template {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "ZONE", "HYPERVISOR", "READY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            cell(self.zonename.as_deref()),
            cell(self.hypervisor.as_deref()),
            self.isready.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
        ]
    }
}

pub async fn handle(client: &CsClient, action: TemplateAction) -> Result<()> {
    match action {
        TemplateAction::List {
            filter,
            zone,
            format,
        } => {
            let params = ListTemplatesParams::new(&filter).zone(zone.as_deref());
            let templates = client
                .template()
                .list(&params)
                .await
                .with_context(|| format!("查询模板失败: filter={}", filter))?;

            output_formatted(&templates, &format)
        }
    }
}
