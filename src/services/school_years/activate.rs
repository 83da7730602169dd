use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn activate_school_year(
    service: &SchoolYearService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.activate_school_year(id).await {
        Ok(true) => {
            tracing::info!("School year {} activated", id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("School year activated")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolYearNotFound,
            "School year not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to activate school year: {e}"),
            )),
        ),
    }
}
