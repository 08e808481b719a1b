//! 任意命令

use anyhow::{Context, Result};
use cs_client::CsClient;

use crate::commands::common::{parse_params, report_timeout};
use crate::commands::output::print_json;

pub async fn handle(client: &CsClient, command: &str, args: &[String]) -> Result<()> {
    let params = parse_params(args)?;

    match client.execute_raw(command, &params).await {
        Ok(value) => print_json(&value),
        Err(e) => match report_timeout(&e) {
            Some(partial) => print_json(&partial),
            None => Err(e).with_context(|| format!("执行命令失败: {}", command)),
        },
    }
}
