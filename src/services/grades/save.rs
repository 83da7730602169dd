use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use super::sheet::load_owned_schedule;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{GradeStatus, SaveGradeRequest},
};
use crate::utils::validate::validate_mark;

pub async fn save_grade(
    service: &GradeService,
    grade_id: i64,
    data: SaveGradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    for mark in [data.midterm, data.finals, data.grade].into_iter().flatten() {
        if let Err(msg) = validate_mark(mark) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::GradeMarkInvalid, msg)));
        }
    }

    let storage = service.get_storage(request);

    let grade = match storage.get_grade_by_id(grade_id).await {
        Ok(Some(g)) => g,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GradeNotFound,
                "Grade record not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grade lookup failed: {e}"),
                )),
            );
        }
    };

    if let Err(response) = load_owned_schedule(&storage, grade.class_schedule_id, request).await {
        return Ok(response);
    }

    // 提交或确认后的成绩不再接受修改
    if grade.status != GradeStatus::Draft {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeStatusInvalid,
            format!("Grade is {} and can no longer be edited", grade.status),
        )));
    }

    match storage.save_grade(grade_id, data).await {
        Ok(Some(saved)) => Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "Grade saved"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GradeNotFound,
            "Grade record not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to save grade: {e}"),
            )),
        ),
    }
}
