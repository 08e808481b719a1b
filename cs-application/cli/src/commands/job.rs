//! 异步任务命令

use anyhow::{Context, Result};
use colored::Colorize;
use cs_client::CsClient;

use crate::commands::output::print_json;
use crate::JobAction;

pub async fn handle(client: &CsClient, action: JobAction) -> Result<()> {
    match action {
        JobAction::Query { id } => query(client, &id).await,
        JobAction::Wait { id } => wait(client, &id).await,
    }
}

async fn query(client: &CsClient, job_id: &str) -> Result<()> {
    let job = client
        .async_job()
        .query(job_id)
        .await
        .with_context(|| format!("查询任务失败: {}", job_id))?;

    print_json(&job)
}

async fn wait(client: &CsClient, job_id: &str) -> Result<()> {
    eprintln!("{} 等待任务 {}", "…".bright_black(), job_id.cyan());

    let result = client
        .async_job()
        .wait(job_id)
        .await
        .with_context(|| format!("等待任务失败: {}", job_id))?;

    eprintln!("{} 任务 {} 已完成", "✓".green().bold(), job_id.cyan());
    print_json(&result)
}
