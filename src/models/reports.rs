use crate::models::school_years::Semester;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 注册汇总查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/report.ts")]
pub struct EnrollmentSummaryParams {
    pub school_year_id: i64,
    pub semester: Semester,
}

// 单个学位项目的注册计数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/report.ts")]
pub struct CourseEnrollmentCount {
    pub course_id: i64,
    pub course_code: String,
    pub course_title: String,
    pub pending: i64,
    pub enrolled: i64,
    pub dropped: i64,
    pub total: i64,
}

// 注册汇总报表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/report.ts")]
pub struct EnrollmentSummaryResponse {
    pub courses: Vec<CourseEnrollmentCount>,
    pub total_pending: i64,
    pub total_enrolled: i64,
    pub total_dropped: i64,
    pub total: i64,
}

// 成绩分布报表（按课表）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/report.ts")]
pub struct GradeDistributionResponse {
    pub class_schedule_id: i64,
    /// 已有综合成绩的学生数
    pub graded_count: i64,
    /// 尚无综合成绩的学生数
    pub ungraded_count: i64,
    pub average: Option<f64>,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
    pub bands: Vec<GradeBand>,
}

// 分数段计数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/report.ts")]
pub struct GradeBand {
    /// 如 "90-100"
    pub label: String,
    pub count: i64,
}
