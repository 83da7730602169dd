use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{
    ApiResponse, ErrorCode, enrollments::CreateEnrollmentRequest, users::entities::UserRole,
};

pub async fn create_enrollment(
    service: &EnrollmentService,
    data: CreateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 注册对象必须是学生账号
    match storage.get_user_by_id(data.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Target user is not a student",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    }

    // 班组必须存在且属于所选学位项目
    match storage.get_section_by_id(data.section_id).await {
        Ok(Some(section)) if section.course_id == data.course_id => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Section does not belong to the selected course",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                "Section not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Section lookup failed: {e}"),
                )),
            );
        }
    }

    // 一个学生一个学期只能有一条注册记录
    match storage
        .find_enrollment_for_term(data.student_id, data.school_year_id, data.semester)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentAlreadyExists,
                "Student is already enrolled for this term",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Enrollment lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_enrollment(data).await {
        Ok(enrollment) => {
            tracing::info!(
                "Enrollment {} created for student {}",
                enrollment.id,
                enrollment.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrollment created")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create enrollment: {e}"),
            )),
        ),
    }
}
