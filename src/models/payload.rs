use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::FormState;
use super::subject::Subject;

/// 清洗后的科目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSubject {
    pub name: String,
    pub exam_date: NaiveDate,
    pub chapters: Vec<String>,
}

/// 发送给排期服务的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub subjects: Vec<CleanSubject>,
    pub daily_hours: f64,
}

impl From<CleanSubject> for Subject {
    fn from(subject: CleanSubject) -> Self {
        Subject {
            name: subject.name,
            exam_date: Some(subject.exam_date),
            chapters: subject.chapters,
        }
    }
}

impl From<SubmissionPayload> for FormState {
    fn from(payload: SubmissionPayload) -> Self {
        FormState::from_parts(
            payload.subjects.into_iter().map(Subject::from).collect(),
            Some(payload.daily_hours),
        )
    }
}
