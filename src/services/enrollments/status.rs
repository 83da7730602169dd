use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, enrollments::EnrollmentStatus};

pub async fn confirm_enrollment(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match storage.get_enrollment_by_id(id).await {
        Ok(Some(e)) => e,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment lookup failed: {e}"),
                )),
            );
        }
    };

    // 只有待处理的注册才能被确认
    if enrollment.status != EnrollmentStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentStatusInvalid,
            format!(
                "Enrollment is {} and can no longer be confirmed",
                enrollment.status
            ),
        )));
    }

    let confirmed = match storage
        .update_enrollment_status(id, EnrollmentStatus::Enrolled)
        .await
    {
        Ok(Some(e)) => e,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to confirm enrollment: {e}"),
                )),
            );
        }
    };

    // 为该学期班组的每个排课条目生成一条成绩草稿
    let schedule_ids: Vec<i64> = match storage
        .list_section_term_schedules(
            confirmed.section_id,
            confirmed.school_year_id,
            confirmed.semester,
        )
        .await
    {
        Ok(schedules) => schedules.into_iter().map(|s| s.id).collect(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Section schedule lookup failed: {e}"),
                )),
            );
        }
    };

    match storage.seed_draft_grades(confirmed.id, &schedule_ids).await {
        Ok(seeded) => {
            tracing::info!(
                "Enrollment {} confirmed, {} draft grade rows seeded",
                confirmed.id,
                seeded
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(confirmed, "Enrollment confirmed")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to seed draft grades: {e}"),
            )),
        ),
    }
}

pub async fn drop_enrollment(
    service: &EnrollmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match storage.get_enrollment_by_id(id).await {
        Ok(Some(e)) => e,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment lookup failed: {e}"),
                )),
            );
        }
    };

    if enrollment.status == EnrollmentStatus::Dropped {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentStatusInvalid,
            "Enrollment is already dropped",
        )));
    }

    match storage
        .update_enrollment_status(id, EnrollmentStatus::Dropped)
        .await
    {
        Ok(Some(dropped)) => {
            tracing::info!("Enrollment {} dropped", dropped.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(dropped, "Enrollment dropped")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to drop enrollment: {e}"),
            )),
        ),
    }
}
