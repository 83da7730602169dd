use crate::models::school_years::Semester;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课表条目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct ClassSchedule {
    pub id: i64,
    pub curriculum_subject_id: i64,
    pub faculty_id: i64,
    pub section_id: i64,
    pub school_year_id: i64,
    pub semester: Semester,
    pub room: String,
    /// 周一=1 … 周日=7
    pub day_of_week: i32,
    /// 当日起始分钟（如 8:30 → 510）
    pub start_minute: i32,
    pub end_minute: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ClassSchedule {
    /// 判断两个条目的时间段是否冲突（同日且区间相交，首尾相接不算）
    pub fn overlaps(&self, other: &ClassSchedule) -> bool {
        self.day_of_week == other.day_of_week
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }
}

// 带展示信息的课表条目（时间表、成绩录入页使用）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct ClassScheduleDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub schedule: ClassSchedule,
    pub subject_code: String,
    pub subject_title: String,
    pub section_name: String,
    pub faculty_name: String,
}

// 课表创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct CreateScheduleRequest {
    pub curriculum_subject_id: i64,
    pub faculty_id: i64,
    pub section_id: i64,
    pub school_year_id: i64,
    pub semester: Semester,
    pub room: String,
    pub day_of_week: i32,
    pub start_minute: i32,
    pub end_minute: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct UpdateScheduleRequest {
    pub faculty_id: Option<i64>,
    pub room: Option<String>,
    pub day_of_week: Option<i32>,
    pub start_minute: Option<i32>,
    pub end_minute: Option<i32>,
}

// 课表列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct ScheduleListParams {
    pub section_id: Option<i64>,
    pub faculty_id: Option<i64>,
    pub school_year_id: Option<i64>,
    pub semester: Option<Semester>,
}

// 教师时间表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct TimetableParams {
    pub school_year_id: i64,
    pub semester: Semester,
}

// 按星期分组的时间表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct TimetableDay {
    pub day_of_week: i32,
    pub entries: Vec<ClassScheduleDetail>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "frontend/src/types/generated/schedule.ts")]
pub struct TimetableResponse {
    pub days: Vec<TimetableDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(day: i32, start: i32, end: i32) -> ClassSchedule {
        ClassSchedule {
            id: 0,
            curriculum_subject_id: 1,
            faculty_id: 1,
            section_id: 1,
            school_year_id: 1,
            semester: Semester::First,
            room: "R101".to_string(),
            day_of_week: day,
            start_minute: start,
            end_minute: end,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_overlap_same_day() {
        assert!(schedule(1, 480, 570).overlaps(&schedule(1, 540, 630)));
        assert!(schedule(1, 540, 630).overlaps(&schedule(1, 480, 570)));
        // 完全包含
        assert!(schedule(1, 480, 660).overlaps(&schedule(1, 510, 570)));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        assert!(!schedule(1, 480, 570).overlaps(&schedule(1, 570, 660)));
        assert!(!schedule(1, 570, 660).overlaps(&schedule(1, 480, 570)));
    }

    #[test]
    fn test_different_day_no_overlap() {
        assert!(!schedule(1, 480, 570).overlaps(&schedule(2, 480, 570)));
    }
}
