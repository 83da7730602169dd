use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::{
    ApiResponse, ErrorCode,
    reports::{GradeBand, GradeDistributionResponse},
};
use crate::services::grades::calc::{cumulative_grade, round2};

const BANDS: [(&str, f64, f64); 5] = [
    ("90-100", 90.0, 100.0),
    ("80-89", 80.0, 90.0),
    ("70-79", 70.0, 80.0),
    ("60-69", 60.0, 70.0),
    ("0-59", 0.0, 60.0),
];

/// 由综合成绩集合构建分布报表
pub(crate) fn build_distribution(
    class_schedule_id: i64,
    cumulatives: &[Option<f64>],
) -> GradeDistributionResponse {
    let graded: Vec<f64> = cumulatives.iter().flatten().copied().collect();
    let ungraded_count = (cumulatives.len() - graded.len()) as i64;

    let bands = BANDS
        .iter()
        .map(|(label, low, high)| GradeBand {
            label: label.to_string(),
            // 最高分段为闭区间，其余为左闭右开
            count: graded
                .iter()
                .filter(|g| {
                    if *high >= 100.0 {
                        **g >= *low && **g <= *high
                    } else {
                        **g >= *low && **g < *high
                    }
                })
                .count() as i64,
        })
        .collect();

    let (average, highest, lowest) = if graded.is_empty() {
        (None, None, None)
    } else {
        let sum: f64 = graded.iter().sum();
        let max = graded.iter().copied().fold(f64::MIN, f64::max);
        let min = graded.iter().copied().fold(f64::MAX, f64::min);
        (Some(round2(sum / graded.len() as f64)), Some(max), Some(min))
    };

    GradeDistributionResponse {
        class_schedule_id,
        graded_count: graded.len() as i64,
        ungraded_count,
        average,
        highest,
        lowest,
        bands,
    }
}

pub async fn grade_distribution(
    service: &ReportService,
    class_schedule_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_schedule_by_id(class_schedule_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ScheduleNotFound,
                "Schedule entry not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Schedule lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.list_grades_for_schedule(class_schedule_id).await {
        Ok(entries) => {
            let cumulatives: Vec<Option<f64>> = entries
                .iter()
                .map(|e| cumulative_grade(e.grade.midterm, e.grade.finals, e.grade.grade))
                .collect();
            let response = build_distribution(class_schedule_id, &cumulatives);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Grade distribution retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load grades: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_bands_and_stats() {
        let cumulatives = vec![
            Some(95.0),
            Some(90.0),
            Some(89.99),
            Some(70.0),
            Some(59.99),
            None,
        ];
        let dist = build_distribution(7, &cumulatives);

        assert_eq!(dist.graded_count, 5);
        assert_eq!(dist.ungraded_count, 1);
        assert_eq!(dist.bands[0].count, 2); // 90-100
        assert_eq!(dist.bands[1].count, 1); // 80-89
        assert_eq!(dist.bands[2].count, 1); // 70-79
        assert_eq!(dist.bands[3].count, 0); // 60-69
        assert_eq!(dist.bands[4].count, 1); // 0-59
        assert_eq!(dist.highest, Some(95.0));
        assert_eq!(dist.lowest, Some(59.99));
        assert_eq!(dist.average, Some(round2((95.0 + 90.0 + 89.99 + 70.0 + 59.99) / 5.0)));
    }

    #[test]
    fn test_distribution_empty_sheet() {
        let dist = build_distribution(7, &[]);
        assert_eq!(dist.graded_count, 0);
        assert_eq!(dist.ungraded_count, 0);
        assert_eq!(dist.average, None);
        assert!(dist.bands.iter().all(|b| b.count == 0));
    }
}
