use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeMap;

use super::ScheduleService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::{
        ClassScheduleDetail, ScheduleListParams, TimetableDay, TimetableParams, TimetableResponse,
    },
};

/// 按星期分组课表条目（条目保持 day/start 排序）
pub(crate) fn group_by_day(entries: Vec<ClassScheduleDetail>) -> Vec<TimetableDay> {
    let mut grouped: BTreeMap<i32, Vec<ClassScheduleDetail>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(entry.schedule.day_of_week)
            .or_default()
            .push(entry);
    }

    grouped
        .into_iter()
        .map(|(day_of_week, entries)| TimetableDay {
            day_of_week,
            entries,
        })
        .collect()
}

pub async fn faculty_timetable(
    service: &ScheduleService,
    query: TimetableParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let faculty_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    let storage = service.get_storage(request);

    let params = ScheduleListParams {
        section_id: None,
        faculty_id: Some(faculty_id),
        school_year_id: Some(query.school_year_id),
        semester: Some(query.semester),
    };

    match storage.list_schedules(params).await {
        Ok(entries) => {
            let response = TimetableResponse {
                days: group_by_day(entries),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Timetable retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build timetable: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedules::ClassSchedule;
    use crate::models::school_years::Semester;

    fn detail(day: i32, start: i32) -> ClassScheduleDetail {
        ClassScheduleDetail {
            schedule: ClassSchedule {
                id: 0,
                curriculum_subject_id: 1,
                faculty_id: 1,
                section_id: 1,
                school_year_id: 1,
                semester: Semester::First,
                room: "R101".to_string(),
                day_of_week: day,
                start_minute: start,
                end_minute: start + 60,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
            subject_code: "CS101".to_string(),
            subject_title: "Intro".to_string(),
            section_name: "A".to_string(),
            faculty_name: "Prof".to_string(),
        }
    }

    #[test]
    fn test_group_by_day() {
        let days = group_by_day(vec![detail(3, 480), detail(1, 480), detail(1, 600)]);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_of_week, 1);
        assert_eq!(days[0].entries.len(), 2);
        assert_eq!(days[1].day_of_week, 3);
    }

    #[test]
    fn test_group_by_day_empty() {
        assert!(group_by_day(Vec::new()).is_empty());
    }
}
