use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::GradeService;
use super::calc::cumulative_grade;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, schedules::ClassSchedule, users::entities::UserRole,
};
use crate::storage::Storage;

// 排课条目必须存在；教师只能访问自己名下的条目
pub(super) async fn load_owned_schedule(
    storage: &Arc<dyn Storage>,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> Result<ClassSchedule, HttpResponse> {
    let schedule = match storage.get_schedule_by_id(class_schedule_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleNotFound,
                "Schedule entry not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Schedule lookup failed: {e}"),
                )),
            );
        }
    };

    if RequireJWT::extract_user_role(request) == Some(UserRole::Faculty) {
        let user_id = RequireJWT::extract_user_id(request);
        if user_id != Some(schedule.faculty_id) {
            return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "You are not assigned to this class schedule",
            )));
        }
    }

    Ok(schedule)
}

pub async fn grade_sheet(
    service: &GradeService,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_owned_schedule(&storage, class_schedule_id, request).await {
        return Ok(response);
    }

    match storage.list_grades_for_schedule(class_schedule_id).await {
        Ok(mut entries) => {
            for entry in &mut entries {
                entry.cumulative = cumulative_grade(
                    entry.grade.midterm,
                    entry.grade.finals,
                    entry.grade.grade,
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                entries,
                "Grade sheet retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load grade sheet: {e}"),
            )),
        ),
    }
}
