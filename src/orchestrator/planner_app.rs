//! 学习计划应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：输出启动信息、创建排期服务客户端
//! 2. **加载表单**：从计划文件读取科目、考试日期和章节
//! 3. **提交**：委托 `SubmissionController` 完成校验和请求
//! 4. **展示**：把排期渲染为文本表格输出到标准输出

use crate::config::Config;
use crate::models::{load_plan_file, FormState, Schedule};
use crate::services::renderer;
use crate::services::HttpScheduleClient;
use crate::utils::logging::{log_form_loaded, log_startup, print_schedule_stats};
use crate::workflow::{SubmissionController, SubmissionStatus};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    controller: SubmissionController<HttpScheduleClient>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client = HttpScheduleClient::new(&config)?;

        Ok(Self {
            config,
            controller: SubmissionController::new(client),
        })
    }

    /// 运行应用主逻辑：加载计划文件 → 提交 → 输出时间表
    pub async fn run(mut self) -> Result<()> {
        info!("\n📁 正在读取计划文件: {}", self.config.plan_file);
        let form = load_plan_file(
            Path::new(&self.config.plan_file),
            self.config.default_daily_hours,
        )
        .await?;

        let schedule = self.generate(&form).await?;
        print_schedule_stats(schedule);

        if schedule.is_empty() {
            warn!("⚠️ 排期服务返回了空的时间表");
        }
        print!("{}", renderer::render_table(Some(schedule)));

        Ok(())
    }

    /// 提交表单并返回排期，失败时以面向用户的提示作为错误
    pub async fn generate(&mut self, form: &FormState) -> Result<&Schedule> {
        log_form_loaded(form);

        match self.controller.submit(form).await {
            SubmissionStatus::Success => self
                .controller
                .schedule()
                .ok_or_else(|| anyhow::anyhow!("排期结果缺失")),
            _ => {
                let message = self
                    .controller
                    .error()
                    .unwrap_or(crate::error::SERVICE_FALLBACK_MESSAGE)
                    .to_string();
                anyhow::bail!(message)
            }
        }
    }
}
