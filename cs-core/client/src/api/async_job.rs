//! 异步任务 API

use serde_json::Value;
use tracing::info;

use crate::client::CsClient;
use crate::error::Result;
use crate::models::async_job::{
    ListAsyncJobsParams, QueryAsyncJobResultParams, QueryAsyncJobResultResponse,
};

/// 异步任务 API
pub struct AsyncJobApi<'a> {
    client: &'a CsClient,
}

impl<'a> AsyncJobApi<'a> {
    /// 创建新的异步任务 API 实例
    pub(crate) fn new(client: &'a CsClient) -> Self {
        Self { client }
    }

    /// 查询一次任务状态，不等待
    pub async fn query(&self, job_id: &str) -> Result<QueryAsyncJobResultResponse> {
        info!("查询异步任务: {}", job_id);
        self.client
            .request(&QueryAsyncJobResultParams::new(job_id))
            .await
    }

    /// 查询当前账户的任务列表
    pub async fn list(&self, params: &ListAsyncJobsParams) -> Result<Vec<QueryAsyncJobResultResponse>> {
        info!("查询异步任务列表");
        let response = self.client.request(params).await?;
        Ok(response.async_jobs)
    }

    /// 轮询直到任务结束，返回 `jobresult`
    pub async fn wait(&self, job_id: &str) -> Result<Value> {
        self.client.wait_for_job(job_id).await
    }
}
