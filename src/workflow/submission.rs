//! 提交流程 - 流程层
//!
//! 核心职责：管理一次"生成学习计划"请求的生命周期
//!
//! 状态流转：
//! 1. Idle → Submitting：清空旧的错误和排期，先做本地校验
//! 2. 校验失败 → Idle（带错误提示，不发请求）
//! 3. Submitting → Success / Failure
//! 4. 请求被取消 → Idle
//!
//! Success 和 Failure 都允许再次提交。界面层可以用 `begin` / `finish`
//! 分两步驱动，在请求进行中读取状态和按钮文字。

use tracing::{error, info, warn};

use crate::error::{PlannerError, SubmitError};
use crate::models::{FormState, Schedule, SubmissionPayload};
use crate::services::{normalize, ScheduleService};

/// 提交按钮文字（空闲时）
pub const SUBMIT_LABEL: &str = "Generate Study Plan";
/// 提交按钮文字（请求进行中）
pub const SUBMITTING_LABEL: &str = "Generating Schedule...";

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// 空闲（包括本地校验失败后）
    Idle,
    /// 请求进行中
    Submitting,
    /// 已拿到排期
    Success,
    /// 请求失败
    Failure,
}

/// 提交控制器
///
/// - 持有排期服务
/// - 保存最近一次的错误提示和排期结果
/// - 同一时间最多一个请求
pub struct SubmissionController<S> {
    service: S,
    status: SubmissionStatus,
    error: Option<String>,
    schedule: Option<Schedule>,
}

impl<S: ScheduleService> SubmissionController<S> {
    /// 创建新的提交控制器
    pub fn new(service: S) -> Self {
        Self {
            service,
            status: SubmissionStatus::Idle,
            error: None,
            schedule: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// 当前显示的错误提示
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 最近一次成功取回的排期
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// 是否允许发起提交
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    /// 提交按钮上显示的文字
    pub fn action_label(&self) -> &'static str {
        if self.status == SubmissionStatus::Submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// 开始一次提交：清空旧的错误和排期，做本地校验
    ///
    /// # 返回
    /// 校验通过时状态变为 `Submitting` 并返回请求体；
    /// 校验失败（状态回到 `Idle` 并带提示）或已有请求在进行中时返回 `None`
    pub fn begin(&mut self, form: &FormState) -> Option<SubmissionPayload> {
        if !self.can_submit() {
            warn!("⚠️ 已有排期请求在进行中，忽略本次提交");
            return None;
        }

        self.error = None;
        self.schedule = None;

        match normalize(form) {
            Ok(payload) => {
                info!(
                    "📤 提交学习计划: {} 个科目, 每日 {} 小时",
                    payload.subjects.len(),
                    payload.daily_hours
                );
                self.status = SubmissionStatus::Submitting;
                Some(payload)
            }
            Err(e) => {
                info!("表单校验未通过: {}", e);
                self.error = Some(PlannerError::from(e).user_message());
                self.status = SubmissionStatus::Idle;
                None
            }
        }
    }

    /// 结束进行中的提交，记录排期或错误提示
    ///
    /// 不在 `Submitting` 状态时忽略（例如请求已被取消）
    pub fn finish(&mut self, result: Result<Schedule, SubmitError>) -> SubmissionStatus {
        if self.status != SubmissionStatus::Submitting {
            warn!("⚠️ 没有进行中的排期请求，忽略本次结果");
            return self.status;
        }

        match result {
            Ok(schedule) => {
                info!("✓ 排期生成成功，共 {} 天", schedule.len());
                self.schedule = Some(schedule);
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                error!("❌ 排期生成失败: {:?}", e);
                self.error = Some(PlannerError::from(e).user_message());
                self.status = SubmissionStatus::Failure;
            }
        }

        self.status
    }

    /// 校验并提交表单（`begin` → 请求 → `finish`）
    ///
    /// 返回的 future 在请求途中被丢弃时，状态回到 `Idle`，可以再次提交
    ///
    /// # 返回
    /// 返回提交结束后的状态
    pub async fn submit(&mut self, form: &FormState) -> SubmissionStatus {
        let Some(payload) = self.begin(form) else {
            return self.status;
        };

        let mut in_flight = InFlight {
            controller: &mut *self,
            settled: false,
        };
        let result = in_flight.controller.service.create_schedule(&payload).await;
        in_flight.controller.finish(result);
        in_flight.settled = true;
        drop(in_flight);

        self.status
    }
}

impl<S> SubmissionController<S> {
    /// 放弃进行中的提交，状态回到 `Idle`
    pub fn cancel(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            warn!("⚠️ 排期请求被取消");
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// 进行中的请求，未正常结束就被丢弃时取消提交
struct InFlight<'a, S> {
    controller: &'a mut SubmissionController<S>,
    settled: bool,
}

impl<S> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            self.controller.cancel();
        }
    }
}
