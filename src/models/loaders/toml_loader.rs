use crate::models::form::FormState;
use crate::models::subject::Subject;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 计划文件的结构
#[derive(Debug, Deserialize)]
struct PlanFile {
    #[serde(default)]
    daily_hours: Option<f64>,
    #[serde(default)]
    subjects: Vec<Subject>,
}

/// 解析 TOML 文本为表单状态
///
/// 未填写 `daily_hours` 时使用 `default_daily_hours`
pub fn parse_plan(content: &str, default_daily_hours: f64) -> Result<FormState> {
    let plan: PlanFile = toml::from_str(content).context("无法解析计划文件")?;

    Ok(FormState::from_parts(
        plan.subjects,
        plan.daily_hours.or(Some(default_daily_hours)),
    ))
}

/// 从 TOML 文件加载表单状态
pub async fn load_plan_file(path: &Path, default_daily_hours: f64) -> Result<FormState> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取计划文件: {}", path.display()))?;

    let state = parse_plan(&content, default_daily_hours)
        .with_context(|| format!("无法解析计划文件: {}", path.display()))?;

    tracing::info!(
        "成功加载 {} 个科目: {}",
        state.subjects().len(),
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(state)
}
