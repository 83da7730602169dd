use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::ReportService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::Course,
    enrollments::EnrollmentStatus,
    reports::{CourseEnrollmentCount, EnrollmentSummaryParams, EnrollmentSummaryResponse},
};

/// 按学位项目聚合注册状态计数（无注册记录的项目也列出，计数为零）
pub(crate) fn summarize_by_course(
    rows: &[(i64, EnrollmentStatus)],
    courses: Vec<Course>,
) -> EnrollmentSummaryResponse {
    let mut per_course: HashMap<i64, (i64, i64, i64)> = HashMap::new();
    for (course_id, status) in rows {
        let counts = per_course.entry(*course_id).or_default();
        match status {
            EnrollmentStatus::Pending => counts.0 += 1,
            EnrollmentStatus::Enrolled => counts.1 += 1,
            EnrollmentStatus::Dropped => counts.2 += 1,
        }
    }

    let mut total_pending = 0;
    let mut total_enrolled = 0;
    let mut total_dropped = 0;

    let course_rows: Vec<CourseEnrollmentCount> = courses
        .into_iter()
        .map(|course| {
            let (pending, enrolled, dropped) =
                per_course.get(&course.id).copied().unwrap_or_default();
            total_pending += pending;
            total_enrolled += enrolled;
            total_dropped += dropped;
            CourseEnrollmentCount {
                course_id: course.id,
                course_code: course.code,
                course_title: course.title,
                pending,
                enrolled,
                dropped,
                total: pending + enrolled + dropped,
            }
        })
        .collect();

    EnrollmentSummaryResponse {
        courses: course_rows,
        total_pending,
        total_enrolled,
        total_dropped,
        total: total_pending + total_enrolled + total_dropped,
    }
}

pub async fn enrollment_summary(
    service: &ReportService,
    query: EnrollmentSummaryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let rows = match storage
        .list_term_enrollment_rows(query.school_year_id, query.semester)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load enrollment rows: {e}"),
                )),
            );
        }
    };

    match storage.list_all_courses().await {
        Ok(courses) => {
            let response = summarize_by_course(&rows, courses);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Enrollment summary retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load courses: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, code: &str) -> Course {
        Course {
            id,
            code: code.to_string(),
            title: format!("{code} title"),
            description: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summarize_counts_by_status() {
        let rows = vec![
            (1, EnrollmentStatus::Enrolled),
            (1, EnrollmentStatus::Enrolled),
            (1, EnrollmentStatus::Pending),
            (2, EnrollmentStatus::Dropped),
        ];
        let summary = summarize_by_course(&rows, vec![course(1, "BSCS"), course(2, "BSIT")]);

        assert_eq!(summary.courses[0].enrolled, 2);
        assert_eq!(summary.courses[0].pending, 1);
        assert_eq!(summary.courses[0].total, 3);
        assert_eq!(summary.courses[1].dropped, 1);
        assert_eq!(summary.total_enrolled, 2);
        assert_eq!(summary.total, 4);
    }

    #[test]
    fn test_summarize_lists_courses_without_enrollments() {
        let summary = summarize_by_course(&[], vec![course(1, "BSCS")]);
        assert_eq!(summary.courses.len(), 1);
        assert_eq!(summary.courses[0].total, 0);
        assert_eq!(summary.total, 0);
    }
}
