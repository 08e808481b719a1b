//! HTTP 传输层
//!
//! 客户端只依赖 [`Transport`] trait：给定命令名和参数，返回成功响应的原始字节。
//! 默认实现 [`HttpTransport`] 使用 reqwest 以表单方式 POST 到 API 入口。

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{CsError, Result};
use crate::params::Params;

/// 请求发送接口
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送一次命令，返回 2xx 响应体
    async fn send(&self, command: &str, params: &Params) -> Result<Vec<u8>>;
}

/// CloudStack 错误负载
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub errorcode: i64,

    #[serde(default)]
    pub cserrorcode: i64,

    #[serde(default)]
    pub errortext: String,
}

impl ErrorPayload {
    /// 尝试从已解包的响应对象中识别错误
    pub fn detect(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        if !object.contains_key("errorcode") || !object.contains_key("errortext") {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn into_error(self) -> CsError {
        CsError::Server {
            code: self.errorcode,
            cs_code: self.cserrorcode,
            text: self.errortext,
        }
    }
}

/// 基于 reqwest 的传输实现
pub struct HttpTransport {
    /// API 入口
    base_url: String,

    /// HTTP 客户端
    http_client: Client,

    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| CsError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            http_client,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn form(&self, command: &str, params: &Params) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        form.push(("command".to_string(), command.to_string()));
        form.push(("response".to_string(), "json".to_string()));
        if let Some(key) = &self.api_key {
            form.push(("apikey".to_string(), key.clone()));
        }
        form
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, command: &str, params: &Params) -> Result<Vec<u8>> {
        debug!("CloudStack API 请求: {} {}", command, self.base_url);

        let response = self
            .http_client
            .post(&self.base_url)
            .form(&self.form(command, params))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error = server_error(&body)
                .unwrap_or_else(|| CsError::Http(status.as_u16(), String::from_utf8_lossy(&body).into_owned()));
            warn!("API 请求失败: {} - {}", command, error);
            return Err(error);
        }

        Ok(body.to_vec())
    }
}

/// 非 2xx 响应体是否为 `{"xxxresponse": {"errorcode": .., "errortext": ..}}`
fn server_error(body: &[u8]) -> Option<CsError> {
    let inner = envelope::unwrap_raw(body).ok()?;
    let payload: ErrorPayload = serde_json::from_str(inner.get()).ok()?;
    Some(payload.into_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(&ClientConfig::new("http://192.168.1.11:8080/client/api"));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_form_contains_command_and_key() {
        let mut config = ClientConfig::default();
        config.api_key = Some("abc".to_string());
        let transport = HttpTransport::new(&config).unwrap();

        let form = transport.form("listPods", &Params::new().with("zoneid", "z1"));
        assert!(form.contains(&("command".to_string(), "listPods".to_string())));
        assert!(form.contains(&("response".to_string(), "json".to_string())));
        assert!(form.contains(&("apikey".to_string(), "abc".to_string())));
        assert!(form.contains(&("zoneid".to_string(), "z1".to_string())));
    }

    #[test]
    fn test_server_error_detection() {
        let body = br#"{"createpodresponse": {"uuidList": [], "errorcode": 431, "cserrorcode": 4350, "errortext": "bad netmask"}}"#;
        match server_error(body) {
            Some(CsError::Server { code, cs_code, text }) => {
                assert_eq!(code, 431);
                assert_eq!(cs_code, 4350);
                assert_eq!(text, "bad netmask");
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert!(server_error(b"<html>gateway</html>").is_none());
    }

    #[test]
    fn test_error_payload_detect() {
        assert!(ErrorPayload::detect(&json!({"errorcode": 530, "errortext": "x"})).is_some());
        assert!(ErrorPayload::detect(&json!({"id": "x"})).is_none());
        assert!(ErrorPayload::detect(&json!("x")).is_none());
    }
}
