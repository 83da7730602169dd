use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩状态：教师草稿 → 教师提交 → 注册员确认
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub enum GradeStatus {
    Draft,
    Submitted,
    Confirmed,
}

impl<'de> Deserialize<'de> for GradeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GradeStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的成绩状态: '{s}'. 支持的状态: draft, submitted, confirmed"
            ))
        })
    }
}

impl std::fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeStatus::Draft => write!(f, "draft"),
            GradeStatus::Submitted => write!(f, "submitted"),
            GradeStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

impl std::str::FromStr for GradeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(GradeStatus::Draft),
            "submitted" => Ok(GradeStatus::Submitted),
            "confirmed" => Ok(GradeStatus::Confirmed),
            _ => Err(format!("Invalid grade status: {s}")),
        }
    }
}

// 成绩记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub class_schedule_id: i64,
    pub midterm: Option<f64>,
    pub finals: Option<f64>,
    pub grade: Option<f64>,
    pub remarks: Option<String>,
    pub status: GradeStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 成绩录入页条目（学生信息 + 成绩）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub struct GradeEntry {
    #[serde(flatten)]
    #[ts(flatten)]
    pub grade: Grade,
    pub student_id: i64,
    pub student_name: String,
    pub student_username: String,
    /// 综合成绩（由期中/期末或单项成绩计算）
    pub cumulative: Option<f64>,
}

// 成绩录入请求（教师按学生保存）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub struct SaveGradeRequest {
    pub midterm: Option<f64>,
    pub finals: Option<f64>,
    pub grade: Option<f64>,
    pub remarks: Option<String>,
}

// 学生成绩单中的一行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub struct GradeReportRow {
    pub subject_code: String,
    pub subject_title: String,
    pub midterm: Option<f64>,
    pub finals: Option<f64>,
    pub cumulative: Option<f64>,
    pub remarks: Option<String>,
    pub status: GradeStatus,
}

// 学生成绩单（按注册记录）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/grade.ts")]
pub struct GradeReport {
    pub enrollment_id: i64,
    pub school_year_label: String,
    pub semester: crate::models::school_years::Semester,
    pub rows: Vec<GradeReportRow>,
    /// 备注汇总行："Contains failing marks" / "All passed" / "Mixed" / "Pending"
    pub remarks_summary: String,
}
