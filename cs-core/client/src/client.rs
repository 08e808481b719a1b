//! CloudStack 客户端核心实现

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::{
    AffinityGroupApi, AlertApi, AsyncJobApi, ClusterApi, ConfigurationApi, ImageStoreApi,
    NetworkOfferingApi, PodApi, TemplateApi, VlanApi,
};
use crate::command::{ApiCommand, ResponseShape};
use crate::config::ClientConfig;
use crate::coordinator::AsyncJobCoordinator;
use crate::envelope;
use crate::error::{CsError, Result};
use crate::models::async_job::QueryAsyncJobResultResponse;
use crate::params::Params;
use crate::transport::{ErrorPayload, HttpTransport, Transport};

/// CloudStack 客户端
///
/// 只持有只读配置和传输层，可在多个任务间共享。
pub struct CsClient {
    transport: Arc<dyn Transport>,

    config: ClientConfig,
}

impl CsClient {
    /// 使用默认 HTTP 传输创建客户端
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        info!("CloudStack 客户端: {} (async_mode={})", config.base_url, config.async_mode);
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// 使用自定义传输创建客户端
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 是否自动等待异步任务
    pub fn is_async_mode(&self) -> bool {
        self.config.async_mode
    }

    pub(crate) fn coordinator(&self) -> AsyncJobCoordinator<'_> {
        AsyncJobCoordinator::new(self.transport.as_ref(), &self.config)
    }

    /// 获取异步任务 API
    pub fn async_job(&self) -> AsyncJobApi<'_> {
        AsyncJobApi::new(self)
    }

    /// 获取亲和组管理 API
    pub fn affinity_group(&self) -> AffinityGroupApi<'_> {
        AffinityGroupApi::new(self)
    }

    /// 获取告警管理 API
    pub fn alert(&self) -> AlertApi<'_> {
        AlertApi::new(self)
    }

    /// 获取集群管理 API
    pub fn cluster(&self) -> ClusterApi<'_> {
        ClusterApi::new(self)
    }

    /// 获取全局配置 API
    pub fn configuration(&self) -> ConfigurationApi<'_> {
        ConfigurationApi::new(self)
    }

    /// 获取镜像存储管理 API
    pub fn image_store(&self) -> ImageStoreApi<'_> {
        ImageStoreApi::new(self)
    }

    /// 获取网络方案管理 API
    pub fn network_offering(&self) -> NetworkOfferingApi<'_> {
        NetworkOfferingApi::new(self)
    }

    /// 获取提供点管理 API
    pub fn pod(&self) -> PodApi<'_> {
        PodApi::new(self)
    }

    /// 获取模板管理 API
    pub fn template(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }

    /// 获取 VLAN IP 段管理 API
    pub fn vlan(&self) -> VlanApi<'_> {
        VlanApi::new(self)
    }

    /// 发送一个类型化命令
    ///
    /// 异步命令在 `async_mode` 下会等待任务完成；否则返回的结构中只有
    /// 服务端立即给出的字段（通常是 `id` 和 `jobid`）。
    pub async fn request<C: ApiCommand>(&self, command: &C) -> Result<C::Response> {
        let params = command.to_params()?;
        debug!("CloudStack 命令: {} ({} 个参数)", C::NAME, params.len());

        let body = self.transport.send(C::NAME, &params).await?;
        let payload = submission(&body)?;

        let payload = if C::ASYNC {
            self.coordinator().complete(payload, C::SHAPE).await?
        } else {
            match C::SHAPE {
                ResponseShape::Wrapped => envelope::unwrap_value(payload)?,
                ResponseShape::Flat => payload,
            }
        };

        serde_json::from_value(payload).map_err(|e| {
            warn!("{} 响应解析失败: {}", C::NAME, e);
            CsError::Parse(format!("{}: {}", C::NAME, e))
        })
    }

    /// 发送未做类型封装的命令
    ///
    /// 返回去掉外层封装的对象。只有任务提交响应（带 jobid、不带 jobstatus）
    /// 才按 `async_mode` 等待，结果不再解包；`queryAsyncJobResult` 这类
    /// 状态文档原样返回。
    pub async fn execute_raw(&self, command: &str, params: &Params) -> Result<Value> {
        debug!("CloudStack 原始命令: {}", command);
        let body = self.transport.send(command, params).await?;
        let payload = submission(&body)?;

        if payload.get("jobstatus").is_some() {
            return Ok(payload);
        }
        self.coordinator().complete(payload, ResponseShape::Flat).await
    }

    /// 查询一次异步任务状态
    pub async fn query_async_job_result(&self, job_id: &str) -> Result<QueryAsyncJobResultResponse> {
        self.coordinator().query(job_id).await
    }

    /// 等待异步任务结束，返回原始 `jobresult`
    ///
    /// 适用于关闭 `async_mode` 后自行决定何时等待的调用方。
    pub async fn wait_for_job(&self, job_id: &str) -> Result<Value> {
        info!("等待异步任务: {}", job_id);
        self.coordinator().wait(job_id).await
    }
}

/// 去掉 `<command>response` 外层并识别错误负载
fn submission(body: &[u8]) -> Result<Value> {
    let inner = envelope::unwrap_raw(body)?;
    let value: Value =
        serde_json::from_str(inner.get()).map_err(|e| CsError::Parse(e.to_string()))?;

    if let Some(payload) = ErrorPayload::detect(&value) {
        return Err(payload.into_error());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pod::{CreatePodParams, ListPodsParams};
    use crate::transport::MockTransport;
    use serde_json::json;

    fn client_with(transport: MockTransport, async_mode: bool) -> CsClient {
        let config = ClientConfig {
            async_mode,
            ..Default::default()
        };
        CsClient::with_transport(config, Arc::new(transport))
    }

    #[test]
    fn test_client_creation() {
        let client = CsClient::new(ClientConfig::new("http://192.168.1.11:8080/client/api"));
        assert!(client.is_ok());

        let client = CsClient::new(ClientConfig::new(""));
        assert!(matches!(client, Err(CsError::Config(_))));
    }

    #[tokio::test]
    async fn test_sync_wrapped_command() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|command, params| {
                command == "createPod" && params.get("name") == Some("pod-1") && !params.contains("endip")
            })
            .times(1)
            .returning(|_, _| {
                Ok(br#"{"createpodresponse": {"pod": {"id": "p1", "name": "pod-1", "zoneid": "z1"}}}"#.to_vec())
            });

        let client = client_with(transport, true);
        let params = CreatePodParams::new("pod-1", "z1", "10.0.0.1", "255.255.255.0", "10.0.0.10");
        let pod = client.request(&params).await.unwrap();
        assert_eq!(pod.id, "p1");
        assert_eq!(pod.zoneid, "z1");
    }

    #[tokio::test]
    async fn test_sync_flat_list() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_, _| {
            Ok(br#"{"listpodsresponse": {"count": 2, "pod": [{"id": "a", "name": "a"}, {"id": "b", "name": "b"}]}}"#.to_vec())
        });

        let client = client_with(transport, true);
        let list = client.request(&ListPodsParams::default()).await.unwrap();
        assert_eq!(list.count, 2);
        assert_eq!(list.pods.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_list() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_, _| Ok(br#"{"listpodsresponse": {}}"#.to_vec()));

        let client = client_with(transport, true);
        let list = client.request(&ListPodsParams::default()).await.unwrap();
        assert_eq!(list.count, 0);
        assert!(list.pods.is_empty());
    }

    #[tokio::test]
    async fn test_error_payload_in_success_body() {
        let mut transport = MockTransport::new();
        transport.expect_send().returning(|_, _| {
            Ok(br#"{"listpodsresponse": {"errorcode": 401, "errortext": "unable to verify user credentials"}}"#.to_vec())
        });

        let client = client_with(transport, true);
        let err = client.request(&ListPodsParams::default()).await.unwrap_err();
        assert!(matches!(err, CsError::Server { code: 401, .. }));
    }

    #[tokio::test]
    async fn test_execute_raw_without_job() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|command, params| command == "listZones" && params.get("available") == Some("true"))
            .returning(|_, _| Ok(br#"{"listzonesresponse": {"count": 0}}"#.to_vec()));

        let client = client_with(transport, true);
        let value = client
            .execute_raw("listZones", &Params::new().with("available", true))
            .await
            .unwrap();
        assert_eq!(value, json!({"count": 0}));
    }

    #[tokio::test]
    async fn test_execute_raw_job_status_not_polled() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|command, params| command == "queryAsyncJobResult" && params.get("jobid") == Some("J"))
            .times(1)
            .returning(|_, _| {
                Ok(br#"{"queryasyncjobresultresponse": {"jobid": "J", "jobstatus": 2, "jobresultcode": 530, "jobresult": {"errorcode": 530, "errortext": "no capacity"}}}"#.to_vec())
            });

        let client = client_with(transport, true);
        let value = client
            .execute_raw("queryAsyncJobResult", &Params::new().with("jobid", "J"))
            .await
            .unwrap();
        assert_eq!(value["jobstatus"], 2);
        assert_eq!(value["jobresult"]["errortext"], "no capacity");
    }

    #[tokio::test]
    async fn test_execute_raw_submission_waits_for_job() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|command, _| command == "deleteAffinityGroup")
            .times(1)
            .returning(|_, _| Ok(br#"{"deleteaffinitygroupresponse": {"jobid": "D"}}"#.to_vec()));
        transport
            .expect_send()
            .withf(|command, params| command == "queryAsyncJobResult" && params.get("jobid") == Some("D"))
            .times(1)
            .returning(|_, _| {
                Ok(br#"{"queryasyncjobresultresponse": {"jobid": "D", "jobstatus": 1, "jobresult": {"success": true}}}"#.to_vec())
            });

        let client = client_with(transport, true);
        let value = client
            .execute_raw("deleteAffinityGroup", &Params::new().with("name", "g"))
            .await
            .unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["jobid"], "D");
    }
}
