use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, attendance::RecordAttendanceRequest, users::entities::UserRole,
};
use crate::storage::Storage;

/// 日期必须是合法的 YYYY-MM-DD
pub(super) fn validate_attendance_date(date: &str) -> Result<(), &'static str> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

// 课表必须存在；教师只能操作自己名下的课表
pub(super) async fn ensure_owned_schedule(
    storage: &Arc<dyn Storage>,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> Result<(), HttpResponse> {
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

    if RequireJWT::extract_user_role(request) == Some(UserRole::Faculty)
        && RequireJWT::extract_user_id(request) != Some(schedule.faculty_id)
    {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You are not assigned to this class schedule",
        )));
    }

    Ok(())
}

pub async fn record_attendance(
    service: &AttendanceService,
    class_schedule_id: i64,
    data: RecordAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_attendance_date(&data.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDateInvalid,
            msg,
        )));
    }

    if data.marks.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Attendance marks cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    if let Err(response) = ensure_owned_schedule(&storage, class_schedule_id, request).await {
        return Ok(response);
    }

    match storage
        .upsert_attendance(class_schedule_id, &data.date, &data.marks)
        .await
    {
        Ok(written) => {
            tracing::info!(
                "{} attendance rows recorded for schedule {} on {}",
                written,
                class_schedule_id,
                data.date
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(written, "Attendance recorded")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to record attendance: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_attendance_date() {
        assert!(validate_attendance_date("2025-09-01").is_ok());
        assert!(validate_attendance_date("2025-02-29").is_err());
        assert!(validate_attendance_date("01-09-2025").is_err());
        assert!(validate_attendance_date("2025/09/01").is_err());
        assert!(validate_attendance_date("").is_err());
    }
}
