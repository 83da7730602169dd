use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CurriculumService;
use crate::models::{
    ApiResponse, ErrorCode,
    curricula::{CreateCurriculumRequest, UpdateCurriculumRequest},
};
use crate::utils::validate::validate_school_year_label;

pub async fn create_curriculum(
    service: &CurriculumService,
    data: CreateCurriculumRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Curriculum code is required",
        )));
    }

    if let Some(ref label) = data.school_year_label
        && let Err(msg) = validate_school_year_label(label)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SchoolYearLabelInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    // 所属学位项目必须存在
    match storage.get_course_by_id(data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_curriculum(data).await {
        Ok(curriculum) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(curriculum, "Curriculum created")))
        }
        Err(e) => {
            let msg = format!("Failed to create curriculum: {e}");
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::CurriculumAlreadyExists,
                    "Curriculum code already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn list_curricula(
    service: &CurriculumService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_curricula_by_course(course_id).await {
        Ok(curricula) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            curricula,
            "Curricula retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list curricula: {e}"),
            )),
        ),
    }
}

pub async fn update_curriculum(
    service: &CurriculumService,
    id: i64,
    data: UpdateCurriculumRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref label) = data.school_year_label
        && let Err(msg) = validate_school_year_label(label)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SchoolYearLabelInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_curriculum(id, data).await {
        Ok(Some(curriculum)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(curriculum, "Curriculum updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CurriculumNotFound,
            "Curriculum not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update curriculum: {e}"),
            )),
        ),
    }
}

pub async fn delete_curriculum(
    service: &CurriculumService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_curriculum(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Curriculum deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CurriculumNotFound,
            "Curriculum not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete curriculum: {e}"),
            )),
        ),
    }
}
