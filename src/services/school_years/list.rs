use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_school_years(
    service: &SchoolYearService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_school_years().await {
        Ok(years) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            years,
            "School years retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list school years: {e}"),
            )),
        ),
    }
}
