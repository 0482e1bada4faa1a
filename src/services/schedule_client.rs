//! 排期服务客户端 - 业务能力层
//!
//! 只负责"把请求体发给排期服务并取回结果"，不关心表单和状态

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::SubmitError;
use crate::models::{Schedule, ScheduleResponse, SubmissionPayload};

/// 排期服务
///
/// 提交控制器只依赖这个 trait，测试中可以替换为内存实现
pub trait ScheduleService {
    /// 创建排期
    fn create_schedule(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<Schedule, SubmitError>> + Send;
}

/// 基于 HTTP 的排期服务客户端
pub struct HttpScheduleClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScheduleClient {
    /// 按配置创建客户端（带请求超时）
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(
            config.schedule_api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// 使用自定义地址和超时创建客户端
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScheduleService for HttpScheduleClient {
    async fn create_schedule(&self, payload: &SubmissionPayload) -> Result<Schedule, SubmitError> {
        debug!(
            "发送排期请求: {} | 科目数: {} | 每日时长: {}",
            self.endpoint,
            payload.subjects.len(),
            payload.daily_hours
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("排期请求失败: {}", e);
                SubmitError::connectivity(e)
            })?;

        let status = response.status();

        // 响应体不是 JSON 时同样视为没有拿到可用响应
        let body: ScheduleResponse = response.json().await.map_err(|e| {
            warn!("无法解析排期响应 (HTTP {}): {}", status.as_u16(), e);
            SubmitError::connectivity(e)
        })?;

        debug!("排期响应: HTTP {}", status.as_u16());

        if !status.is_success() {
            return Err(SubmitError::service(status.as_u16(), body.error));
        }

        body.schedule
            .ok_or_else(|| SubmitError::service(status.as_u16(), body.error))
    }
}
