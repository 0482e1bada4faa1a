//! 表单状态
//!
//! `FormState` 是一个值：每个编辑操作都消费旧状态并返回新状态，
//! 不存在共享的可变结构。
//!
//! 不变量：
//! - 科目列表至少保留一个科目
//! - 每个科目至少保留一个章节输入框

use chrono::NaiveDate;

use super::subject::{Subject, SubjectField};

/// 默认每日学习时长（小时）
pub const DEFAULT_DAILY_HOURS: f64 = 4.0;

/// 今天的日期（本地时区）
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// 一次编辑的描述
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    /// 修改科目的名称或考试日期
    SubjectField { index: usize, field: SubjectField },
    /// 修改某个章节的文本
    Chapter {
        subject_index: usize,
        chapter_index: usize,
        value: String,
    },
    /// 在末尾追加一个空白科目，考试日期为给定日期
    AddSubject { exam_date: NaiveDate },
    /// 删除科目
    RemoveSubject { index: usize },
    /// 给科目追加一个空章节
    AddChapter { subject_index: usize },
    /// 删除章节
    RemoveChapter {
        subject_index: usize,
        chapter_index: usize,
    },
    /// 修改每日学习时长
    DailyHours(Option<f64>),
}

/// 学习计划表单状态
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    subjects: Vec<Subject>,
    daily_hours: Option<f64>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// 初始状态：一个空白科目（考试日期为今天），默认每日时长
    pub fn new() -> Self {
        Self::starting_on(today())
    }

    /// 以指定日期作为"今天"创建初始状态
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            subjects: vec![Subject::blank(today)],
            daily_hours: Some(DEFAULT_DAILY_HOURS),
        }
    }

    /// 由已有数据构造，空列表会被补齐以满足不变量
    pub fn from_parts(subjects: Vec<Subject>, daily_hours: Option<f64>) -> Self {
        let mut subjects = subjects;
        if subjects.is_empty() {
            subjects.push(Subject::blank(today()));
        }
        for subject in &mut subjects {
            subject.ensure_chapter_slot();
        }
        Self {
            subjects,
            daily_hours,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn daily_hours(&self) -> Option<f64> {
        self.daily_hours
    }

    /// 应用一次编辑
    #[must_use]
    pub fn apply(self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::SubjectField { index, field } => self.edit_subject_field(index, field),
            FormEdit::Chapter {
                subject_index,
                chapter_index,
                value,
            } => self.edit_chapter(subject_index, chapter_index, value),
            FormEdit::AddSubject { exam_date } => self.add_subject_dated(exam_date),
            FormEdit::RemoveSubject { index } => self.remove_subject(index),
            FormEdit::AddChapter { subject_index } => self.add_chapter(subject_index),
            FormEdit::RemoveChapter {
                subject_index,
                chapter_index,
            } => self.remove_chapter(subject_index, chapter_index),
            FormEdit::DailyHours(value) => self.set_daily_hours(value),
        }
    }

    /// 替换科目的某个字段，索引越界时不做任何修改
    #[must_use]
    pub fn edit_subject_field(mut self, index: usize, field: SubjectField) -> Self {
        if let Some(subject) = self.subjects.get_mut(index) {
            match field {
                SubjectField::Name(name) => subject.name = name,
                SubjectField::ExamDate(date) => subject.exam_date = date,
            }
        }
        self
    }

    /// 替换章节文本，索引越界时不做任何修改
    #[must_use]
    pub fn edit_chapter(
        mut self,
        subject_index: usize,
        chapter_index: usize,
        value: impl Into<String>,
    ) -> Self {
        if let Some(chapter) = self
            .subjects
            .get_mut(subject_index)
            .and_then(|s| s.chapters.get_mut(chapter_index))
        {
            *chapter = value.into();
        }
        self
    }

    /// 追加空白科目，考试日期为今天
    #[must_use]
    pub fn add_subject(self) -> Self {
        self.add_subject_dated(today())
    }

    /// 追加空白科目，考试日期为给定日期
    #[must_use]
    pub fn add_subject_dated(mut self, exam_date: NaiveDate) -> Self {
        self.subjects.push(Subject::blank(exam_date));
        self
    }

    /// 是否允许删除科目（只剩一个时不允许）
    pub fn can_remove_subject(&self) -> bool {
        self.subjects.len() > 1
    }

    /// 删除科目；只剩一个或索引越界时不做任何修改
    #[must_use]
    pub fn remove_subject(mut self, index: usize) -> Self {
        if self.can_remove_subject() && index < self.subjects.len() {
            self.subjects.remove(index);
        }
        self
    }

    /// 给科目追加空章节
    #[must_use]
    pub fn add_chapter(mut self, subject_index: usize) -> Self {
        if let Some(subject) = self.subjects.get_mut(subject_index) {
            subject.chapters.push(String::new());
        }
        self
    }

    /// 是否允许删除该科目的章节（只剩一个时不允许）
    pub fn can_remove_chapter(&self, subject_index: usize) -> bool {
        self.subjects
            .get(subject_index)
            .is_some_and(|s| s.chapters.len() > 1)
    }

    /// 删除章节；只剩一个或索引越界时不做任何修改
    #[must_use]
    pub fn remove_chapter(mut self, subject_index: usize, chapter_index: usize) -> Self {
        if self.can_remove_chapter(subject_index) {
            let chapters = &mut self.subjects[subject_index].chapters;
            if chapter_index < chapters.len() {
                chapters.remove(chapter_index);
            }
        }
        self
    }

    /// 修改每日学习时长
    #[must_use]
    pub fn set_daily_hours(mut self, value: Option<f64>) -> Self {
        self.daily_hours = value;
        self
    }
}
