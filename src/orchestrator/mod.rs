//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! planner_app (加载计划文件、输出时间表)
//!     ↓
//! workflow::SubmissionController (一次提交的生命周期)
//!     ↓
//! services (能力层：validator / schedule_client / renderer)
//!     ↓
//! models (表单状态、请求体、排期)
//! ```

pub mod planner_app;

pub use planner_app::App;
