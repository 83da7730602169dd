//! 排课时段校验与冲突检测

use crate::models::schedules::ClassSchedule;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// 校验 星期/起止分钟 是否构成合法时段
pub(crate) fn validate_time_slot(
    day_of_week: i32,
    start_minute: i32,
    end_minute: i32,
) -> Result<(), &'static str> {
    if !(1..=7).contains(&day_of_week) {
        return Err("Day of week must be between 1 (Monday) and 7 (Sunday)");
    }
    if !(0..MINUTES_PER_DAY).contains(&start_minute) || !(1..=MINUTES_PER_DAY).contains(&end_minute)
    {
        return Err("Start and end minutes must fall within a single day");
    }
    if start_minute >= end_minute {
        return Err("Start time must be earlier than end time");
    }
    Ok(())
}

/// 在候选集中查找与 `candidate` 冲突的条目，返回冲突条目 ID
///
/// `exclude_id` 用于更新场景排除自身。
pub(crate) fn find_conflict(
    candidate: &ClassSchedule,
    existing: &[ClassSchedule],
    exclude_id: Option<i64>,
) -> Option<i64> {
    existing
        .iter()
        .filter(|s| Some(s.id) != exclude_id)
        .find(|s| candidate.overlaps(s))
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::school_years::Semester;

    fn schedule(id: i64, day: i32, start: i32, end: i32) -> ClassSchedule {
        ClassSchedule {
            id,
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
    fn test_validate_time_slot() {
        assert!(validate_time_slot(1, 480, 570).is_ok());
        assert!(validate_time_slot(7, 0, 1440).is_ok());
        assert!(validate_time_slot(0, 480, 570).is_err());
        assert!(validate_time_slot(8, 480, 570).is_err());
        assert!(validate_time_slot(1, 570, 570).is_err());
        assert!(validate_time_slot(1, 600, 570).is_err());
        assert!(validate_time_slot(1, -10, 60).is_err());
        assert!(validate_time_slot(1, 0, 1441).is_err());
    }

    #[test]
    fn test_find_conflict_reports_overlapping_entry() {
        let existing = vec![schedule(10, 1, 480, 570), schedule(11, 2, 480, 570)];
        let candidate = schedule(0, 1, 540, 630);
        assert_eq!(find_conflict(&candidate, &existing, None), Some(10));
    }

    #[test]
    fn test_find_conflict_ignores_touching_and_other_days() {
        let existing = vec![schedule(10, 1, 480, 570)];
        assert_eq!(find_conflict(&schedule(0, 1, 570, 660), &existing, None), None);
        assert_eq!(find_conflict(&schedule(0, 3, 480, 570), &existing, None), None);
    }

    #[test]
    fn test_find_conflict_excludes_self_on_update() {
        let existing = vec![schedule(10, 1, 480, 570)];
        let candidate = schedule(10, 1, 500, 590);
        assert_eq!(find_conflict(&candidate, &existing, Some(10)), None);
    }
}
