//! 客户端配置
//!
//! 支持从多个源加载:
//! - 环境变量 (优先级最高)
//! - 配置文件 (TOML/YAML/JSON)
//! - 默认值 (优先级最低)
//!
//! 配置文件搜索路径 (按优先级):
//! 1. `CS_CONFIG` 环境变量指定的路径
//! 2. `./cloudstack.toml` (当前目录)
//! 3. `~/.config/cloudstack/config.toml` (用户配置目录)
//! 4. `/etc/cloudstack/config.toml` (系统配置目录)

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{CsError, Result};

/// CloudStack 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API 入口，如 `https://cloud.example.com/client/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API Key（作为 `apikey` 参数发送）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// 为 true 时自动轮询异步任务直到结束
    #[serde(default = "default_async_mode")]
    pub async_mode: bool,

    /// 轮询间隔（毫秒）
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// 异步任务等待上限（秒）
    #[serde(default = "default_async_timeout")]
    pub async_timeout: u64,

    /// 连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// 请求超时（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// 是否验证 SSL 证书
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            async_mode: default_async_mode(),
            poll_interval_ms: default_poll_interval_ms(),
            async_timeout: default_async_timeout(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            verify_ssl: default_verify_ssl(),
        }
    }
}

// 默认值函数
fn default_base_url() -> String {
    "http://localhost:8080/client/api".to_string()
}

fn default_async_mode() -> bool {
    true
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_async_timeout() -> u64 {
    300
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    60
}

fn default_verify_ssl() -> bool {
    true
}

impl ClientConfig {
    /// 指定入口地址，其余取默认值
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn async_timeout(&self) -> Duration {
        Duration::from_secs(self.async_timeout)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// 从多个源加载配置 (优先级: 环境变量 > 配置文件 > 默认值)
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                debug!("Loading config from: {:?}", path);
                Self::load_from_file(&path)?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// 从指定文件加载配置，再叠加环境变量
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// 从指定文件加载配置 (按扩展名选择格式)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CsError::Config(format!("读取配置文件失败 {:?}: {}", path, e)))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| CsError::Config(format!("解析 TOML 配置失败 {:?}: {}", path, e))),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| CsError::Config(format!("解析 YAML 配置失败 {:?}: {}", path, e))),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CsError::Config(format!("解析 JSON 配置失败 {:?}: {}", path, e))),
            _ => Err(CsError::Config(format!("不支持的配置文件格式: {:?}", path))),
        }
    }

    /// 查找配置文件 (按优先级搜索)
    fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = env::var("CS_CONFIG") {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }

        let local = PathBuf::from("./cloudstack.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user = home.join(".config/cloudstack/config.toml");
            if user.exists() {
                return Some(user);
            }
        }

        #[cfg(target_os = "linux")]
        {
            let system = PathBuf::from("/etc/cloudstack/config.toml");
            if system.exists() {
                return Some(system);
            }
        }

        None
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_vars(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// 按给定的查找函数覆盖配置，便于测试时不触碰进程环境
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CS_API_URL") {
            self.base_url = url;
        }
        if let Some(key) = lookup("CS_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(mode) = lookup("CS_ASYNC_MODE") {
            self.async_mode = parse_env("CS_ASYNC_MODE", &mode)?;
        }
        if let Some(interval) = lookup("CS_POLL_INTERVAL_MS") {
            self.poll_interval_ms = parse_env("CS_POLL_INTERVAL_MS", &interval)?;
        }
        if let Some(timeout) = lookup("CS_ASYNC_TIMEOUT") {
            self.async_timeout = parse_env("CS_ASYNC_TIMEOUT", &timeout)?;
        }
        if let Some(verify) = lookup("CS_VERIFY_SSL") {
            self.verify_ssl = parse_env("CS_VERIFY_SSL", &verify)?;
        }
        Ok(())
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(CsError::Config("base_url 不能为空".to_string()));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| CsError::Config(format!("base_url 无效 {}: {}", self.base_url, e)))?;

        if self.poll_interval_ms == 0 {
            return Err(CsError::Config("poll_interval_ms 必须大于 0".to_string()));
        }
        if self.async_timeout == 0 {
            return Err(CsError::Config("async_timeout 必须大于 0".to_string()));
        }
        Ok(())
    }

    /// 保存配置到文件 (按扩展名选择格式)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CsError::Config(format!("创建配置目录失败 {:?}: {}", parent, e)))?;
        }

        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| CsError::Config(e.to_string()))?,
            Some("yaml") | Some("yml") => {
                serde_yaml::to_string(self).map_err(|e| CsError::Config(e.to_string()))?
            }
            Some("json") => {
                serde_json::to_string_pretty(self).map_err(|e| CsError::Config(e.to_string()))?
            }
            _ => return Err(CsError::Config(format!("不支持的配置文件格式: {:?}", path))),
        };

        fs::write(path, content)
            .map_err(|e| CsError::Config(format!("写入配置文件失败 {:?}: {}", path, e)))
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CsError::Config(format!("环境变量 {} 的值无效: {}", name, value)))
}
