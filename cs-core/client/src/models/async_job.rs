//! 异步任务模型

use serde::{Deserialize, Serialize};

use crate::command::api_command;

/// 任务状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(JobStatus::Pending),
            1 => Some(JobStatus::Succeeded),
            2 => Some(JobStatus::Failed),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            JobStatus::Pending => 0,
            JobStatus::Succeeded => 1,
            JobStatus::Failed => 2,
        }
    }

    /// 成功或失败都是终态
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

/// queryAsyncJobResult 参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAsyncJobResultParams {
    pub jobid: String,
}

impl QueryAsyncJobResultParams {
    pub fn new(jobid: &str) -> Self {
        Self {
            jobid: jobid.to_string(),
        }
    }
}

/// 任务查询结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryAsyncJobResultResponse {
    #[serde(default)]
    pub jobid: String,

    pub jobstatus: i64,

    #[serde(default)]
    pub jobresultcode: i64,

    #[serde(default)]
    pub jobresulttype: Option<String>,

    /// 成功时为结果对象，失败时为 `{"errorcode", "errortext"}`
    #[serde(default)]
    pub jobresult: Option<serde_json::Value>,

    #[serde(default)]
    pub jobinstanceid: Option<String>,

    #[serde(default)]
    pub jobinstancetype: Option<String>,

    #[serde(default)]
    pub jobprocstatus: Option<i64>,

    #[serde(default)]
    pub cmd: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub completed: Option<String>,

    #[serde(default)]
    pub accountid: Option<String>,

    #[serde(default)]
    pub userid: Option<String>,
}

impl QueryAsyncJobResultResponse {
    pub fn status(&self) -> Option<JobStatus> {
        JobStatus::from_code(self.jobstatus)
    }
}

api_command!(QueryAsyncJobResultParams => QueryAsyncJobResultResponse, "queryAsyncJobResult", sync, Flat);

/// listAsyncJobs 参数
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAsyncJobsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listall: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub startdate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagesize: Option<i64>,
}

/// listAsyncJobs 结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAsyncJobsResponse {
    #[serde(default)]
    pub count: usize,

    #[serde(default, rename = "asyncjobs")]
    pub async_jobs: Vec<QueryAsyncJobResultResponse>,
}

api_command!(ListAsyncJobsParams => ListAsyncJobsResponse, "listAsyncJobs", sync, Flat);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_status_codes() {
        assert_eq!(JobStatus::from_code(0), Some(JobStatus::Pending));
        assert_eq!(JobStatus::from_code(1), Some(JobStatus::Succeeded));
        assert_eq!(JobStatus::from_code(2), Some(JobStatus::Failed));
        assert_eq!(JobStatus::from_code(7), None);
        assert!(!JobStatus::Pending.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn test_parse_job_response() {
        let job: QueryAsyncJobResultResponse = serde_json::from_value(json!({
            "jobid": "J",
            "jobstatus": 1,
            "jobresultcode": 0,
            "jobresulttype": "object",
            "jobresult": {"affinitygroup": {"id": "X"}},
            "cmd": "org.apache.cloudstack.api.command.user.affinitygroup.CreateAffinityGroupCmd"
        }))
        .unwrap();

        assert_eq!(job.status(), Some(JobStatus::Succeeded));
        assert_eq!(job.jobresult.unwrap()["affinitygroup"]["id"], "X");
    }
}
