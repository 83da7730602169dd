use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use super::sheet::load_owned_schedule;
use crate::models::{ApiResponse, ErrorCode, grades::GradeStatus};

// 教师提交整张成绩表
pub async fn submit_grades(
    service: &GradeService,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_owned_schedule(&storage, class_schedule_id, request).await {
        return Ok(response);
    }

    match storage
        .transition_schedule_grades(class_schedule_id, GradeStatus::Draft, GradeStatus::Submitted)
        .await
    {
        Ok(0) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeStatusInvalid,
            "No draft grades to submit for this schedule",
        ))),
        Ok(count) => {
            tracing::info!(
                "{} grade rows submitted for schedule {}",
                count,
                class_schedule_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(count, "Grades submitted")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to submit grades: {e}"),
            )),
        ),
    }
}

// 注册员确认已提交的成绩
pub async fn confirm_grades(
    service: &GradeService,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_schedule_by_id(class_schedule_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleNotFound,
                "Schedule entry not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Schedule lookup failed: {e}"),
                )),
            );
        }
    }

    match storage
        .transition_schedule_grades(
            class_schedule_id,
            GradeStatus::Submitted,
            GradeStatus::Confirmed,
        )
        .await
    {
        Ok(0) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeStatusInvalid,
            "No submitted grades to confirm for this schedule",
        ))),
        Ok(count) => {
            tracing::info!(
                "{} grade rows confirmed for schedule {}",
                count,
                class_schedule_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(count, "Grades confirmed")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to confirm grades: {e}"),
            )),
        ),
    }
}
