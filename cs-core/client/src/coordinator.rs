//! 异步任务协调器
//!
//! CloudStack 的变更类操作大多只返回一个 jobid，真正的结果要通过
//! `queryAsyncJobResult` 轮询获得。协调器在 `async_mode` 开启时接管这一过程，
//! 让调用方拿到与同步调用相同形态的结果。
//!
//! 单次调用的状态流转：`Submitted -> Polling -> {Succeeded, Failed, TimedOut}`。
//! 只重试"任务未完成"，传输错误立即返回。

use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::command::{ApiCommand, ResponseShape};
use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{CsError, Result};
use crate::models::async_job::{JobStatus, QueryAsyncJobResultParams, QueryAsyncJobResultResponse};
use crate::transport::{ErrorPayload, Transport};

/// 异步任务协调器
pub struct AsyncJobCoordinator<'a> {
    transport: &'a dyn Transport,

    /// 是否等待任务完成
    async_mode: bool,

    poll_interval: Duration,

    timeout: Duration,
}

impl<'a> AsyncJobCoordinator<'a> {
    pub fn new(transport: &'a dyn Transport, config: &ClientConfig) -> Self {
        Self {
            transport,
            async_mode: config.async_mode,
            poll_interval: config.poll_interval(),
            timeout: config.async_timeout(),
        }
    }

    /// 处理一次提交的即时响应
    ///
    /// - 非 `async_mode` 或响应中没有 jobid：原样返回
    /// - 否则轮询到终态，把任务结果合并到即时响应之上
    /// - 超时返回 [`CsError::AsyncTimeout`]，其中保留即时响应
    pub async fn complete(&self, submission: Value, shape: ResponseShape) -> Result<Value> {
        if !self.async_mode {
            return Ok(submission);
        }

        let job_id = match submission.get("jobid").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Ok(submission),
        };

        match self.wait(&job_id).await {
            Ok(result) => {
                let result = match shape {
                    ResponseShape::Wrapped => envelope::unwrap_value(result)?,
                    ResponseShape::Flat => result,
                };
                merge(submission, result)
            }
            Err(CsError::AsyncTimeout { job_id, .. }) => Err(CsError::AsyncTimeout {
                job_id,
                partial: submission,
            }),
            Err(e) => Err(e),
        }
    }

    /// 轮询任务直到终态，返回原始 `jobresult`
    ///
    /// 至少查询一次；超时错误中的 `partial` 为 `Null`。
    pub async fn wait(&self, job_id: &str) -> Result<Value> {
        let start = Instant::now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            let job = self.query(job_id).await?;
            debug!("任务 {} 第 {} 次查询: jobstatus={}", job_id, attempts, job.jobstatus);

            match job.status() {
                Some(JobStatus::Pending) => {}
                Some(JobStatus::Succeeded) => {
                    info!("任务 {} 完成 (查询 {} 次)", job_id, attempts);
                    return Ok(job.jobresult.unwrap_or(Value::Null));
                }
                Some(JobStatus::Failed) => {
                    let error = failure(job_id, &job);
                    warn!("{}", error);
                    return Err(error);
                }
                None => {
                    return Err(CsError::MalformedEnvelope(format!(
                        "任务 {} 返回未知状态 {}",
                        job_id, job.jobstatus
                    )));
                }
            }

            let elapsed = start.elapsed();
            if elapsed >= self.timeout {
                warn!("任务 {} 在 {:?} 内未完成", job_id, self.timeout);
                return Err(CsError::AsyncTimeout {
                    job_id: job_id.to_string(),
                    partial: Value::Null,
                });
            }

            tokio::time::sleep(self.poll_interval.min(self.timeout - elapsed)).await;
        }
    }

    /// 查询一次任务状态
    pub async fn query(&self, job_id: &str) -> Result<QueryAsyncJobResultResponse> {
        let params = QueryAsyncJobResultParams::new(job_id).to_params()?;
        let body = self
            .transport
            .send(QueryAsyncJobResultParams::NAME, &params)
            .await?;

        let inner = envelope::unwrap_raw(&body)?;
        let value: Value =
            serde_json::from_str(inner.get()).map_err(|e| CsError::Parse(e.to_string()))?;

        if let Some(payload) = ErrorPayload::detect(&value) {
            return Err(payload.into_error());
        }

        serde_json::from_value(value).map_err(|e| CsError::Parse(e.to_string()))
    }
}

fn failure(job_id: &str, job: &QueryAsyncJobResultResponse) -> CsError {
    let result = job.jobresult.as_ref();
    let code = result
        .and_then(|r| r.get("errorcode"))
        .and_then(Value::as_i64)
        .unwrap_or(job.jobresultcode);
    let text = result
        .and_then(|r| r.get("errortext"))
        .and_then(Value::as_str)
        .unwrap_or("未知错误")
        .to_string();

    CsError::AsyncJobFailed {
        job_id: job_id.to_string(),
        code,
        text,
    }
}

/// 任务结果字段覆盖即时响应字段
fn merge(submission: Value, result: Value) -> Result<Value> {
    let mut merged = match submission {
        Value::Object(map) => map,
        other => {
            return Err(CsError::MalformedEnvelope(format!(
                "即时响应不是 JSON 对象: {}",
                other
            )))
        }
    };

    match result {
        Value::Object(fields) => {
            for (key, value) in fields {
                merged.insert(key, value);
            }
        }
        other => {
            return Err(CsError::MalformedEnvelope(format!(
                "任务结果不是 JSON 对象: {}",
                other
            )))
        }
    }

    merged
        .entry("jobstatus")
        .or_insert(Value::from(JobStatus::Succeeded.code()));
    Ok(Value::Object(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use mockall::Sequence;
    use serde_json::json;

    fn config(async_mode: bool) -> ClientConfig {
        ClientConfig {
            async_mode,
            poll_interval_ms: 1000,
            async_timeout: 5,
            ..Default::default()
        }
    }

    fn job_body(status: i64, result: Value) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "queryasyncjobresultresponse": {
                "jobid": "J",
                "jobstatus": status,
                "jobresult": result,
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_sync_mode_returns_submission() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let cfg = config(false);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let submission = json!({"id": "X", "jobid": "J"});

        let result = coordinator
            .complete(submission.clone(), ResponseShape::Wrapped)
            .await
            .unwrap();
        assert_eq!(result, submission);
    }

    #[tokio::test]
    async fn test_no_job_id_returns_submission() {
        let mut transport = MockTransport::new();
        transport.expect_send().never();

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let submission = json!({"id": "X", "name": "sync"});

        let result = coordinator
            .complete(submission.clone(), ResponseShape::Flat)
            .await
            .unwrap();
        assert_eq!(result, submission);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_success() {
        let mut transport = MockTransport::new();
        let mut seq = Sequence::new();

        transport
            .expect_send()
            .withf(|command, params| command == "queryAsyncJobResult" && params.get("jobid") == Some("J"))
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(job_body(0, Value::Null)));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(job_body(
                    1,
                    json!({"affinitygroup": {"id": "X", "name": "testAffinityGroup", "type": "host affinity"}}),
                ))
            });

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let result = coordinator
            .complete(json!({"id": "X", "jobid": "J"}), ResponseShape::Wrapped)
            .await
            .unwrap();

        assert_eq!(result["name"], "testAffinityGroup");
        assert_eq!(result["type"], "host affinity");
        assert_eq!(result["jobid"], "J");
        assert_eq!(result["jobstatus"], 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_job() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _| Ok(job_body(2, json!({"errorcode": 530, "errortext": "no capacity"}))));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let err = coordinator
            .complete(json!({"jobid": "J"}), ResponseShape::Wrapped)
            .await
            .unwrap_err();

        match err {
            CsError::AsyncJobFailed { job_id, code, text } => {
                assert_eq!(job_id, "J");
                assert_eq!(code, 530);
                assert_eq!(text, "no capacity");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_keeps_partial() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_, _| Ok(job_body(0, Value::Null)));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let err = coordinator
            .complete(json!({"id": "X", "jobid": "J"}), ResponseShape::Wrapped)
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.job_id(), Some("J"));
        let partial: Value = err.partial_result().unwrap();
        assert_eq!(partial["id"], "X");
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_error_not_retried() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _| Err(CsError::Transport("connection reset".to_string())));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let err = coordinator
            .complete(json!({"jobid": "J"}), ResponseShape::Flat)
            .await
            .unwrap_err();
        assert!(matches!(err, CsError::Transport(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_flat_result_merges_without_unwrap() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _| Ok(job_body(1, json!({"success": true, "displaytext": "deleted"}))));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let result = coordinator
            .complete(json!({"jobid": "J"}), ResponseShape::Flat)
            .await
            .unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["displaytext"], "deleted");
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrapped_result_must_be_single_key() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _| Ok(job_body(1, json!({"a": 1, "b": 2}))));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let err = coordinator
            .complete(json!({"jobid": "J"}), ResponseShape::Wrapped)
            .await
            .unwrap_err();
        assert!(matches!(err, CsError::MalformedEnvelope(_)));
    }

    #[test]
    fn test_merge_rejects_non_object_submission() {
        let err = merge(json!(["X"]), json!({"id": "X"})).unwrap_err();
        assert!(matches!(err, CsError::MalformedEnvelope(_)));

        let merged = merge(json!({"id": "X", "jobid": "J"}), json!({"name": "g"})).unwrap();
        assert_eq!(merged, json!({"id": "X", "jobid": "J", "name": "g", "jobstatus": 1}));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_status_is_malformed() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_, _| Ok(job_body(9, Value::Null)));

        let cfg = config(true);
        let coordinator = AsyncJobCoordinator::new(&transport, &cfg);
        let err = coordinator.wait("J").await.unwrap_err();
        assert!(matches!(err, CsError::MalformedEnvelope(_)));
    }
}
