use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 某一天的一项学习任务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub subject: String,
    pub chapter: String,
    pub hours: f64,
}

/// 排期结果：日期字符串 → 当天的任务列表（保持服务端顺序）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<String, Vec<Task>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一天的任务，已存在的日期会被覆盖
    pub fn insert(&mut self, date: impl Into<String>, tasks: Vec<Task>) {
        self.days.insert(date.into(), tasks);
    }

    pub fn tasks_on(&self, date: &str) -> Option<&[Task]> {
        self.days.get(date).map(Vec::as_slice)
    }

    /// 所有日期及其任务（按字符串顺序，显示顺序见 `renderer`）
    pub fn days(&self) -> impl Iterator<Item = (&str, &[Task])> {
        self.days.iter().map(|(d, t)| (d.as_str(), t.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// 排期服务的响应体
///
/// 成功时带 `schedule`，失败时可能带 `error`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub schedule: Option<Schedule>,
    #[serde(default)]
    pub error: Option<String>,
}
