use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 表单中的一个科目（原始输入，未清洗）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// 科目名称
    #[serde(default)]
    pub name: String,
    /// 考试日期，日期输入框被清空时为 `None`
    #[serde(default)]
    pub exam_date: Option<NaiveDate>,
    /// 章节列表，顺序即显示顺序
    #[serde(default)]
    pub chapters: Vec<String>,
}

impl Subject {
    /// 新建空白科目：空名称、给定日期、一个空章节
    pub fn blank(exam_date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            exam_date: Some(exam_date),
            chapters: vec![String::new()],
        }
    }

    /// 章节列表为空时补一个空章节
    pub(crate) fn ensure_chapter_slot(&mut self) {
        if self.chapters.is_empty() {
            self.chapters.push(String::new());
        }
    }
}

/// 可单独编辑的科目字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectField {
    /// 科目名称
    Name(String),
    /// 考试日期
    ExamDate(Option<NaiveDate>),
}

impl SubjectField {
    /// 从日期输入框的文本构造考试日期字段
    ///
    /// 空串或无法解析为 `YYYY-MM-DD` 的文本都视为未填写
    pub fn exam_date_from_input(input: &str) -> Self {
        SubjectField::ExamDate(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok())
    }
}
