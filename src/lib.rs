//! # Study Planner
//!
//! 收集科目、考试日期和章节，提交给远端排期服务并展示返回的学习时间表
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 表单状态 `FormState` 及其编辑操作、请求体、排期结果
//! - `models/loaders` - 从 TOML 计划文件加载表单
//!
//! ### ② 业务能力层（Services）
//! - `validator` - 清洗并校验表单，生成 `SubmissionPayload`
//! - `schedule_client` - `ScheduleService` trait 及其 HTTP 实现
//! - `renderer` - 按日期排序并渲染时间表
//!
//! ### ③ 流程层（Workflow）
//! - `SubmissionController` - Idle → Submitting → Success / Failure
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 读取配置和计划文件，提交并输出时间表
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{PlannerError, SubmitError, ValidationError};
pub use models::{FormEdit, FormState, Schedule, Subject, SubjectField, SubmissionPayload, Task};
pub use orchestrator::App;
pub use services::{normalize, HttpScheduleClient, ScheduleService};
pub use workflow::{SubmissionController, SubmissionStatus};
