//! 亲和组命令

use anyhow::{Context, Result};
use colored::Colorize;
use cs_client::models::affinity_group::{
    AffinityGroup, CreateAffinityGroupParams, DeleteAffinityGroupParams, ListAffinityGroupsParams,
};
use cs_client::CsClient;

use crate::commands::common::report_timeout;
use crate::commands::output::{output_formatted, print_json, TableRow};
use crate::AffinityGroupAction;

impl TableRow for AffinityGroup {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TYPE", "VMS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.group_type.clone(),
            self.virtual_machine_ids.len().to_string(),
        ]
    }
}

pub async fn handle(client: &CsClient, action: AffinityGroupAction) -> Result<()> {
    match action {
        AffinityGroupAction::List { name, format } => list(client, name, &format).await,
        AffinityGroupAction::Create {
            name,
            group_type,
            description,
        } => create(client, &name, &group_type, description.as_deref()).await,
        AffinityGroupAction::Delete { name, id } => delete(client, name, id).await,
    }
}

async fn list(client: &CsClient, name: Option<String>, format: &str) -> Result<()> {
    let params = ListAffinityGroupsParams {
        name,
        listall: Some(true),
        ..Default::default()
    };
    let groups = client
        .affinity_group()
        .list(&params)
        .await
        .context("查询亲和组失败")?;

    output_formatted(&groups, format)
}

async fn create(
    client: &CsClient,
    name: &str,
    group_type: &str,
    description: Option<&str>,
) -> Result<()> {
    let mut params = CreateAffinityGroupParams::new(name, group_type);
    if let Some(description) = description {
        params = params.description(description);
    }

    match client.affinity_group().create(&params).await {
        Ok(group) => {
            eprintln!(
                "{} 亲和组 {} 创建成功 ({})",
                "✓".green().bold(),
                group.name.cyan().bold(),
                group.id.yellow()
            );
            print_json(&group)
        }
        Err(e) => match report_timeout(&e) {
            Some(partial) => print_json(&partial),
            None => Err(e).with_context(|| format!("创建亲和组失败: {}", name)),
        },
    }
}

async fn delete(client: &CsClient, name: Option<String>, id: Option<String>) -> Result<()> {
    let params = match (&id, &name) {
        (Some(id), _) => DeleteAffinityGroupParams::by_id(id),
        (None, Some(name)) => DeleteAffinityGroupParams::by_name(name),
        (None, None) => anyhow::bail!("需要指定 --name 或 --id"),
    };
    let target = id.or(name).unwrap_or_default();

    let result = client
        .affinity_group()
        .delete(&params)
        .await
        .with_context(|| format!("删除亲和组失败: {}", target))?;

    if result.success {
        eprintln!("{} 亲和组 {} 已删除", "✓".green().bold(), target.cyan());
    } else {
        eprintln!("{} 删除亲和组 {} 未成功", "✗".red().bold(), target.cyan());
    }
    print_json(&result)
}
