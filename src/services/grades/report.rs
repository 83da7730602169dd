use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use super::calc::{cumulative_grade, remarks_summary};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    grades::{GradeReport, GradeReportRow},
    users::entities::UserRole,
};

pub async fn grade_report(
    service: &GradeService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
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

    // 学生只能查看自己的成绩单
    if RequireJWT::extract_user_role(request) == Some(UserRole::Student)
        && RequireJWT::extract_user_id(request) != Some(enrollment.student_id)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own grade report",
        )));
    }

    let school_year_label = match storage.get_school_year_by_id(enrollment.school_year_id).await {
        Ok(Some(year)) => year.label,
        Ok(None) => String::new(),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("School year lookup failed: {e}"),
                )),
            );
        }
    };

    let grade_rows = match storage.list_grades_for_enrollment(enrollment_id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load grades: {e}"),
                )),
            );
        }
    };

    let all_remarks: Vec<Option<String>> = grade_rows
        .iter()
        .map(|row| row.grade.remarks.clone())
        .collect();

    let rows: Vec<GradeReportRow> = grade_rows
        .into_iter()
        .map(|row| GradeReportRow {
            subject_code: row.subject_code,
            subject_title: row.subject_title,
            midterm: row.grade.midterm,
            finals: row.grade.finals,
            cumulative: cumulative_grade(row.grade.midterm, row.grade.finals, row.grade.grade),
            remarks: row.grade.remarks,
            status: row.grade.status,
        })
        .collect();

    let report = GradeReport {
        enrollment_id,
        school_year_label,
        semester: enrollment.semester,
        rows,
        remarks_summary: remarks_summary(&all_remarks).to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        report,
        "Grade report retrieved successfully",
    )))
}
