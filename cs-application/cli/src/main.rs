//! csctl - CloudStack 命令行工具

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "csctl")]
#[command(about = "CloudStack 管理 API 命令行工具", long_about = None)]
#[command(version)]
struct Cli {
    /// 日志级别，不指定时读取 RUST_LOG
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// 配置文件路径 (toml/yaml/json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 异步任务
    Job {
        #[command(subcommand)]
        action: JobAction,
    },

    /// 亲和组管理
    AffinityGroup {
        #[command(subcommand)]
        action: AffinityGroupAction,
    },

    /// 模板管理
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// 全局配置
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// 提供点管理
    Pod {
        #[command(subcommand)]
        action: PodAction,
    },

    /// 告警管理
    Alert {
        #[command(subcommand)]
        action: AlertAction,
    },

    /// 发送任意命令
    Raw {
        /// CloudStack 命令名，如 listZones
        command: String,

        /// 参数，格式 key=value
        params: Vec<String>,
    },
}

#[derive(Subcommand)]
enum JobAction {
    /// 查询一次任务状态
    Query {
        /// 任务 ID
        id: String,
    },
    /// 等待任务结束
    Wait {
        /// 任务 ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AffinityGroupAction {
    /// 列出亲和组
    List {
        /// 按名称过滤
        #[arg(long)]
        name: Option<String>,
        /// 输出格式: table, json, yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// 创建亲和组
    Create {
        /// 名称
        name: String,
        /// 类型
        #[arg(long = "type", short = 't', default_value = "host anti-affinity")]
        group_type: String,
        /// 描述
        #[arg(long)]
        description: Option<String>,
    },
    /// 删除亲和组
    Delete {
        /// 名称
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        name: Option<String>,
        /// ID
        #[arg(long)]
        id: Option<String>,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// 列出模板
    List {
        /// 模板过滤器: featured, self, executable, community, all 等
        #[arg(long)]
        filter: String,
        /// 区域 ID
        #[arg(long)]
        zone: Option<String>,
        /// 输出格式: table, json, yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// 列出配置项
    List {
        /// 配置名 (模糊匹配)
        #[arg(long)]
        name: Option<String>,
        /// 输出格式: table, json, yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// 修改配置项
    Set {
        /// 配置名
        name: String,
        /// 新值
        value: String,
        /// 区域 ID
        #[arg(long)]
        zone: Option<String>,
    },
}

#[derive(Subcommand)]
enum PodAction {
    /// 列出提供点
    List {
        /// 区域 ID
        #[arg(long)]
        zone: Option<String>,
        /// 输出格式: table, json, yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

#[derive(Subcommand)]
enum AlertAction {
    /// 列出告警
    List {
        /// 告警类型码
        #[arg(long = "type")]
        alert_type: Option<String>,
        /// 输出格式: table, json, yaml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志，输出到 stderr 以免干扰 JSON 结果
    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("csctl 启动");

    let client = commands::common::create_client(cli.config.as_deref())?;

    // 处理命令
    match cli.command {
        Commands::Job { action } => commands::job::handle(&client, action).await?,
        Commands::AffinityGroup { action } => {
            commands::affinity_group::handle(&client, action).await?
        }
        Commands::Template { action } => commands::template::handle(&client, action).await?,
        Commands::Config { action } => commands::configuration::handle(&client, action).await?,
        Commands::Pod { action } => commands::pod::handle(&client, action).await?,
        Commands::Alert { action } => commands::alert::handle(&client, action).await?,
        Commands::Raw { command, params } => commands::raw::handle(&client, &command, &params).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_template_list() {
        let cli = Cli::try_parse_from([
            "csctl", "template", "list", "--filter", "featured", "--zone", "z1",
        ])
        .unwrap();

        match cli.command {
            Commands::Template {
                action: TemplateAction::List { filter, zone, format },
            } => {
                assert_eq!(filter, "featured");
                assert_eq!(zone.as_deref(), Some("z1"));
                assert_eq!(format, "json");
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_parse_raw_with_global_flags() {
        let cli = Cli::try_parse_from([
            "csctl", "raw", "listZones", "available=true", "--log-level", "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Raw { command, params } => {
                assert_eq!(command, "listZones");
                assert_eq!(params, vec!["available=true"]);
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_delete_requires_name_or_id() {
        assert!(Cli::try_parse_from(["csctl", "affinity-group", "delete"]).is_err());
        assert!(Cli::try_parse_from(["csctl", "affinity-group", "delete", "--id", "a1"]).is_ok());
    }
}
