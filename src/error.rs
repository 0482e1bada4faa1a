use thiserror::Error;

/// 校验失败提示：清洗后没有任何有效科目
pub const NO_VALID_SUBJECTS_MESSAGE: &str = "Please add at least one subject with chapters.";
/// 校验失败提示：每日学习时长无效
pub const INVALID_DAILY_HOURS_MESSAGE: &str = "Please enter valid daily study hours.";
/// 服务端返回失败且未给出 `error` 字段时的兜底提示
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to generate the schedule.";
/// 无法获得服务端响应时的提示
pub const CONNECTIVITY_MESSAGE: &str = "Error connecting to server.";

/// 本地校验错误（永远不会发出网络请求）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 清洗后科目列表为空
    #[error("{}", NO_VALID_SUBJECTS_MESSAGE)]
    NoValidSubjects,
    /// 每日时长缺失、为零、为负或不是有限数
    #[error("{}", INVALID_DAILY_HOURS_MESSAGE)]
    InvalidDailyHours,
}

/// 提交排期请求时的远端错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 服务端给出了失败响应
    #[error("{message}")]
    Service { status: u16, message: String },
    /// 没有拿到可用的响应（网络故障、超时、响应体无法解析）
    ///
    /// `reason` 只用于日志，对用户始终显示统一提示
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity { reason: String },
}

impl SubmitError {
    /// 根据服务端返回的错误信息构造服务错误，缺失时使用兜底提示
    pub fn service(status: u16, message: Option<String>) -> Self {
        SubmitError::Service {
            status,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| SERVICE_FALLBACK_MESSAGE.to_string()),
        }
    }

    /// 创建连接错误
    pub fn connectivity(reason: impl std::fmt::Display) -> Self {
        SubmitError::Connectivity {
            reason: reason.to_string(),
        }
    }
}

/// 学习计划组件的错误类型
///
/// 所有错误都在提交控制器处被消化，最终只以一条提示文字呈现
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl PlannerError {
    /// 面向用户的提示文字
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
