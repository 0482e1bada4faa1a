//! 排期结果展示 - 业务能力层
//!
//! 把服务端返回的排期整理成按日期升序排列的视图

use chrono::NaiveDate;

use crate::models::{Schedule, Task};

/// 表头
const DATE_HEADER: &str = "Date";
const TOPICS_HEADER: &str = "Study Topics";

/// 一天的展示行
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow<'a> {
    pub date: &'a str,
    pub tasks: &'a [Task],
}

/// 按日历日期升序返回所有日期
///
/// 无法解析为 `YYYY-MM-DD` 的键排在所有合法日期之后，彼此按字符串顺序
pub fn sorted_dates(schedule: &Schedule) -> Vec<&str> {
    let mut dates: Vec<(Option<NaiveDate>, &str)> = schedule
        .days()
        .map(|(date, _)| (NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(), date))
        .collect();

    dates.sort_by(|(a_date, a_key), (b_date, b_key)| match (a_date, b_date) {
        (Some(a), Some(b)) => a.cmp(b).then_with(|| a_key.cmp(b_key)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a_key.cmp(b_key),
    });

    dates.into_iter().map(|(_, key)| key).collect()
}

/// 按日期排好序的展示行，没有排期时为空
pub fn rows(schedule: Option<&Schedule>) -> Vec<ScheduleRow<'_>> {
    let Some(schedule) = schedule else {
        return Vec::new();
    };

    sorted_dates(schedule)
        .into_iter()
        .map(|date| ScheduleRow {
            date,
            tasks: schedule.tasks_on(date).unwrap_or_default(),
        })
        .collect()
}

/// 时长标签：`1 hr`、`2 hrs`、`0.5 hr`
pub fn hours_label(hours: f64) -> String {
    let unit = if hours > 1.0 { "hrs" } else { "hr" };
    format!("{} {}", hours, unit)
}

/// 单个任务的展示文本，例如 `Math: Algebra (2 hrs)`
pub fn format_task(task: &Task) -> String {
    format!("{}: {} ({})", task.subject, task.chapter, hours_label(task.hours))
}

/// 渲染为纯文本两列表格，没有排期时返回空串
pub fn render_table(schedule: Option<&Schedule>) -> String {
    let rows = rows(schedule);
    if schedule.is_none() {
        return String::new();
    }

    let width = rows
        .iter()
        .map(|row| row.date.chars().count())
        .max()
        .unwrap_or(0)
        .max(DATE_HEADER.len());

    let mut out = String::new();
    out.push_str(&format!("{:<width$} | {}\n", DATE_HEADER, TOPICS_HEADER));
    out.push_str(&format!("{}-+-{}\n", "-".repeat(width), "-".repeat(TOPICS_HEADER.len())));

    for row in rows {
        if row.tasks.is_empty() {
            out.push_str(&format!("{:<width$} |\n", row.date));
            continue;
        }
        for (i, task) in row.tasks.iter().enumerate() {
            let date = if i == 0 { row.date } else { "" };
            out.push_str(&format!("{:<width$} | {}\n", date, format_task(task)));
        }
    }

    out
}
