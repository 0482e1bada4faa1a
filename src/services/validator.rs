//! 表单校验与清洗 - 业务能力层
//!
//! 只负责把原始表单状态变成可提交的请求体，不关心网络

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{CleanSubject, FormState, Subject, SubmissionPayload};

/// 清洗并校验表单
///
/// 1. 名称去除首尾空白，章节只保留去除空白后非空的项
/// 2. 丢弃名称为空、缺少考试日期或没有有效章节的科目
/// 3. 先检查科目，再检查每日时长
pub fn normalize(state: &FormState) -> Result<SubmissionPayload, ValidationError> {
    let subjects: Vec<CleanSubject> = state
        .subjects()
        .iter()
        .enumerate()
        .filter_map(|(index, subject)| {
            let cleaned = clean_subject(subject);
            if cleaned.is_none() {
                debug!("丢弃无效科目 #{}: {:?}", index + 1, subject.name);
            }
            cleaned
        })
        .collect();

    if subjects.is_empty() {
        return Err(ValidationError::NoValidSubjects);
    }

    let daily_hours = state
        .daily_hours()
        .filter(|hours| is_valid_daily_hours(*hours))
        .ok_or(ValidationError::InvalidDailyHours)?;

    Ok(SubmissionPayload {
        subjects,
        daily_hours,
    })
}

fn clean_subject(subject: &Subject) -> Option<CleanSubject> {
    let name = subject.name.trim();
    if name.is_empty() {
        return None;
    }
    let exam_date = subject.exam_date?;

    let chapters: Vec<String> = subject
        .chapters
        .iter()
        .filter(|c| !c.trim().is_empty())
        .cloned()
        .collect();
    if chapters.is_empty() {
        return None;
    }

    Some(CleanSubject {
        name: name.to_string(),
        exam_date,
        chapters,
    })
}

fn is_valid_daily_hours(hours: f64) -> bool {
    hours.is_finite() && hours > 0.0
}
