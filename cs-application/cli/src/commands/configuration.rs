//! 全局配置命令

use anyhow::{Context, Result};
use colored::Colorize;
use cs_client::models::configuration::{
    Configuration, ListConfigurationsParams, UpdateConfigurationParams,
};
use cs_client::CsClient;

use crate::commands::output::{cell, output_formatted, print_json, TableRow};
use crate::ConfigAction;

impl TableRow for Configuration {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "VALUE", "CATEGORY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            cell(self.value.as_deref()),
            cell(self.category.as_deref()),
        ]
    }
}

pub async fn handle(client: &CsClient, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::List { name, format } => {
            let params = ListConfigurationsParams {
                name,
                ..Default::default()
            };
            let configs = client
                .configuration()
                .list(&params)
                .await
                .context("查询配置项失败")?;

            output_formatted(&configs, &format)
        }
        ConfigAction::Set { name, value, zone } => {
            let mut params = UpdateConfigurationParams::new(&name, &value);
            if let Some(zone) = &zone {
                params = params.zone(zone);
            }

            let updated = client
                .configuration()
                .update(&params)
                .await
                .with_context(|| format!("修改配置项失败: {}", name))?;

            eprintln!(
                "{} {} = {}",
                "✓".green().bold(),
                updated.name.cyan(),
                cell(updated.value.as_deref()).yellow()
            );
            if updated.isdynamic == Some(false) {
                eprintln!("  {}", "该配置需要重启管理服务器后生效".bright_black());
            }
            print_json(&updated)
        }
    }
}
