use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{
    ApiResponse, ErrorCode,
    sections::{CreateSectionRequest, SectionListParams, UpdateSectionRequest},
};
use crate::utils::validate::validate_year_level;

pub async fn create_section(
    service: &SectionService,
    data: CreateSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Section name is required",
        )));
    }

    if let Err(msg) = validate_year_level(data.year_level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
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

    match storage.create_section(data).await {
        Ok(section) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(section, "Section created")))
        }
        Err(e) => {
            let msg = format!("Failed to create section: {e}");
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SectionAlreadyExists,
                    "Section name already exists in this course",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn list_sections(
    service: &SectionService,
    query: SectionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_sections(query).await {
        Ok(sections) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sections,
            "Sections retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list sections: {e}"),
            )),
        ),
    }
}

pub async fn update_section(
    service: &SectionService,
    id: i64,
    data: UpdateSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(year_level) = data.year_level
        && let Err(msg) = validate_year_level(year_level)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_section(id, data).await {
        Ok(Some(section)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(section, "Section updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update section: {e}"),
            )),
        ),
    }
}

pub async fn delete_section(
    service: &SectionService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_section(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Section deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete section: {e}"),
            )),
        ),
    }
}
