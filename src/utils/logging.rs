//! 日志工具模块
//!
//! 提供启动和结果统计的日志输出

use tracing::info;

use crate::config::Config;
use crate::models::{FormState, Schedule};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 学习计划生成器启动");
    info!("🌐 排期服务: {}", config.schedule_api_url);
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录表单概况
pub fn log_form_loaded(form: &FormState) {
    let chapters: usize = form.subjects().iter().map(|s| s.chapters.len()).sum();
    info!(
        "✓ 表单包含 {} 个科目, {} 个章节",
        form.subjects().len(),
        chapters
    );
    for (index, subject) in form.subjects().iter().enumerate() {
        info!(
            "  {}. {} | 考试日期: {} | 章节: {}",
            index + 1,
            truncate_text(&subject.name, 30),
            subject
                .exam_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "未填写".to_string()),
            subject.chapters.len()
        );
    }
}

/// 打印排期统计
pub fn print_schedule_stats(schedule: &Schedule) {
    let (tasks, hours) = schedule
        .days()
        .flat_map(|(_, tasks)| tasks.iter())
        .fold((0usize, 0f64), |(n, h), task| (n + 1, h + task.hours));

    info!("\n{}", "=".repeat(60));
    info!("📊 排期统计");
    info!("📅 天数: {}", schedule.len());
    info!("📚 任务数: {}", tasks);
    info!("⏳ 总时长: {} 小时", hours);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
