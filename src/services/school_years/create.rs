use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode, school_years::CreateSchoolYearRequest};
use crate::utils::validate::validate_school_year_label;

pub async fn create_school_year(
    service: &SchoolYearService,
    data: CreateSchoolYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 标签格式校验："2025-2026" 且跨度为一年
    if let Err(msg) = validate_school_year_label(&data.label) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SchoolYearLabelInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    // 标签唯一
    match storage.get_school_year_by_label(&data.label).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SchoolYearAlreadyExists,
                "School year already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("School year lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_school_year(&data.label).await {
        Ok(school_year) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(school_year, "School year created"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create school year: {e}"),
            )),
        ),
    }
}
