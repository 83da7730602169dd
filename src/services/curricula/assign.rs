use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CurriculumService;
use crate::models::{ApiResponse, ErrorCode, curricula::AssignSubjectRequest};
use crate::utils::validate::validate_year_level;

pub async fn assign_subject(
    service: &CurriculumService,
    curriculum_id: i64,
    data: AssignSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_year_level(data.year_level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    // 培养方案必须存在
    match storage.get_curriculum_by_id(curriculum_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CurriculumNotFound,
                "Curriculum not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Curriculum lookup failed: {e}"),
                )),
            );
        }
    }

    // 同一科目在同一方案同一年级学期只能出现一次
    match storage.list_curriculum_subjects(curriculum_id).await {
        Ok(entries) => {
            let duplicate = entries.iter().any(|entry| {
                entry.subject.id == data.subject_id
                    && entry.year_level == data.year_level
                    && entry.semester == data.semester
            });
            if duplicate {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyAssigned,
                    "Subject is already assigned to this term",
                )));
            }
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Curriculum subjects lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.assign_subject(curriculum_id, data).await {
        Ok(entry) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(entry, "Subject assigned")))
        }
        Err(e) => {
            let msg = format!("Failed to assign subject: {e}");
            if msg.contains("not found") {
                Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::SubjectNotFound,
                    "Subject not found",
                )))
            } else if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyAssigned,
                    "Subject is already assigned to this term",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

pub async fn remove_subject(
    service: &CurriculumService,
    curriculum_id: i64,
    entry_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .remove_curriculum_subject(curriculum_id, entry_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Subject removed from curriculum",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Curriculum subject entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove curriculum subject: {e}"),
            )),
        ),
    }
}
