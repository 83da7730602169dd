use crate::models::common::PaginationQuery;
use crate::models::school_years::Semester;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 注册状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentStatus {
    Pending,
    Enrolled,
    Dropped,
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的注册状态: '{s}'. 支持的状态: pending, enrolled, dropped"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "pending"),
            EnrollmentStatus::Enrolled => write!(f, "enrolled"),
            EnrollmentStatus::Dropped => write!(f, "dropped"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EnrollmentStatus::Pending),
            "enrolled" => Ok(EnrollmentStatus::Enrolled),
            "dropped" => Ok(EnrollmentStatus::Dropped),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 注册记录实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub section_id: i64,
    pub school_year_id: i64,
    pub semester: Semester,
    pub status: EnrollmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 带展示信息的注册记录
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub student_name: String,
    pub student_username: String,
    pub course_code: String,
    pub section_name: String,
    pub school_year_label: String,
}

// 注册创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub section_id: i64,
    pub school_year_id: i64,
    pub semester: Semester,
}

// 注册列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub school_year_id: Option<i64>,
    pub semester: Option<Semester>,
    pub course_id: Option<i64>,
    pub section_id: Option<i64>,
    pub status: Option<EnrollmentStatus>,
    /// 按学生用户名/姓名模糊搜索
    pub search: Option<String>,
}
