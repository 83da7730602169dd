use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use super::record::{ensure_owned_schedule, validate_attendance_date};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_attendance(
    service: &AttendanceService,
    class_schedule_id: i64,
    date: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_attendance_date(&date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDateInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    if let Err(response) = ensure_owned_schedule(&storage, class_schedule_id, request).await {
        return Ok(response);
    }

    match storage.list_attendance(class_schedule_id, &date).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Attendance retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendance: {e}"),
            )),
        ),
    }
}

pub async fn attendance_summary(
    service: &AttendanceService,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_owned_schedule(&storage, class_schedule_id, request).await {
        return Ok(response);
    }

    match storage.attendance_summary(class_schedule_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Attendance summary retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build attendance summary: {e}"),
            )),
        ),
    }
}
