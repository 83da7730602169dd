use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班组实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/section.ts")]
pub struct Section {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub year_level: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/section.ts")]
pub struct CreateSectionRequest {
    pub course_id: i64,
    pub name: String,
    pub year_level: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/section.ts")]
pub struct UpdateSectionRequest {
    pub name: Option<String>,
    pub year_level: Option<i32>,
}

// 班组列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/section.ts")]
pub struct SectionListParams {
    pub course_id: Option<i64>,
    pub year_level: Option<i32>,
}
