use crate::models::common::PaginationQuery;
use crate::models::school_years::Semester;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 培养方案实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct Curriculum {
    pub id: i64,
    pub course_id: i64,
    pub code: String,
    pub description: Option<String>,
    /// 生效学年标签（如 "2025-2026"）
    pub school_year_label: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct Subject {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub lecture_units: f64,
    pub lab_units: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Subject {
    pub fn total_units(&self) -> f64 {
        self.lecture_units + self.lab_units
    }
}

// 培养方案内的科目条目（关联记录 + 科目详情）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct CurriculumSubjectEntry {
    pub id: i64,
    pub subject: Subject,
    pub year_level: i32,
    pub semester: Semester,
}

// 按年级-学期分组后的培养方案大纲
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct CurriculumOutline {
    pub curriculum: Curriculum,
    pub year_levels: Vec<YearLevelBlock>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct YearLevelBlock {
    pub year_level: i32,
    pub semesters: Vec<SemesterBlock>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct SemesterBlock {
    pub semester: Semester,
    pub subjects: Vec<CurriculumSubjectEntry>,
    pub total_units: f64,
}

// 培养方案创建/更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct CreateCurriculumRequest {
    pub course_id: i64,
    pub code: String,
    pub description: Option<String>,
    pub school_year_label: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct UpdateCurriculumRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub school_year_label: Option<String>,
}

// 科目创建/更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct CreateSubjectRequest {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub lecture_units: f64,
    #[serde(default)]
    pub lab_units: f64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct UpdateSubjectRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub lecture_units: Option<f64>,
    pub lab_units: Option<f64>,
}

// 科目列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 向培养方案分配科目
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/curriculum.ts")]
pub struct AssignSubjectRequest {
    pub subject_id: i64,
    pub year_level: i32,
    pub semester: Semester,
}
