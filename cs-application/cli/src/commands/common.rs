//! 公共工具函数模块
//!
//! 提供各命令模块共享的功能，包括：
//! - 客户端配置加载和创建
//! - `key=value` 参数解析

use anyhow::{bail, Context, Result};
use colored::Colorize;
use cs_client::{ClientConfig, CsClient, CsError, Params};
use std::path::Path;
use tracing::info;

/// 加载配置并创建客户端
pub fn create_client(config_path: Option<&Path>) -> Result<CsClient> {
    let config = match config_path {
        Some(path) => ClientConfig::load_with_file(path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
        None => ClientConfig::load().context("加载配置失败")?,
    };

    info!("使用 API 入口: {}", config.base_url);
    CsClient::new(config).context("创建 CloudStack 客户端失败")
}

/// 解析 `key=value` 形式的参数列表
pub fn parse_params(args: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("参数格式应为 key=value: {}", arg);
        };
        if key.is_empty() {
            bail!("参数名不能为空: {}", arg);
        }
        params.set(key, value);
    }
    Ok(params)
}

/// 打印异步任务超时提示，返回部分结果
pub fn report_timeout(err: &CsError) -> Option<serde_json::Value> {
    if let CsError::AsyncTimeout { job_id, partial } = err {
        eprintln!(
            "{} 任务 {} 尚未完成，可稍后执行 {}",
            "⚠".yellow().bold(),
            job_id.cyan(),
            format!("csctl job wait {}", job_id).bright_black()
        );
        return Some(partial.clone());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let params = parse_params(&[
            "available=true".to_string(),
            "name=a=b".to_string(),
            "keyword=".to_string(),
        ])
        .unwrap();

        assert_eq!(params.get("available"), Some("true"));
        assert_eq!(params.get("name"), Some("a=b"));
        assert_eq!(params.get("keyword"), Some(""));
    }

    #[test]
    fn test_parse_params_rejects_bad_input() {
        assert!(parse_params(&["novalue".to_string()]).is_err());
        assert!(parse_params(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_report_timeout_returns_partial() {
        let err = CsError::AsyncTimeout {
            job_id: "J".to_string(),
            partial: serde_json::json!({"id": "X", "jobid": "J"}),
        };
        assert_eq!(report_timeout(&err).unwrap()["id"], "X");
        assert!(report_timeout(&CsError::Parse("x".into())).is_none());
    }
}
