use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeMap;

use super::CurriculumService;
use crate::models::{
    ApiResponse, ErrorCode,
    curricula::{CurriculumOutline, CurriculumSubjectEntry, SemesterBlock, YearLevelBlock},
    school_years::Semester,
};

fn semester_rank(semester: Semester) -> u8 {
    match semester {
        Semester::First => 0,
        Semester::Second => 1,
        Semester::Summer => 2,
    }
}

/// 把科目条目按 年级 → 学期 分组，并统计每学期总学分
pub(crate) fn group_outline(entries: Vec<CurriculumSubjectEntry>) -> Vec<YearLevelBlock> {
    let mut grouped: BTreeMap<i32, BTreeMap<u8, Vec<CurriculumSubjectEntry>>> = BTreeMap::new();

    for entry in entries {
        grouped
            .entry(entry.year_level)
            .or_default()
            .entry(semester_rank(entry.semester))
            .or_default()
            .push(entry);
    }

    grouped
        .into_iter()
        .map(|(year_level, semesters)| YearLevelBlock {
            year_level,
            semesters: semesters
                .into_values()
                .map(|subjects| {
                    let semester = subjects[0].semester;
                    let total_units = subjects.iter().map(|e| e.subject.total_units()).sum();
                    SemesterBlock {
                        semester,
                        subjects,
                        total_units,
                    }
                })
                .collect(),
        })
        .collect()
}

pub async fn curriculum_outline(
    service: &CurriculumService,
    curriculum_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let curriculum = match storage.get_curriculum_by_id(curriculum_id).await {
        Ok(Some(c)) => c,
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
    };

    match storage.list_curriculum_subjects(curriculum_id).await {
        Ok(entries) => {
            let outline = CurriculumOutline {
                curriculum,
                year_levels: group_outline(entries),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                outline,
                "Curriculum outline retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build curriculum outline: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curricula::Subject;

    fn entry(id: i64, year_level: i32, semester: Semester, lecture: f64, lab: f64) -> CurriculumSubjectEntry {
        CurriculumSubjectEntry {
            id,
            subject: Subject {
                id,
                code: format!("SUBJ{id}"),
                title: format!("Subject {id}"),
                lecture_units: lecture,
                lab_units: lab,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
            year_level,
            semester,
        }
    }

    #[test]
    fn test_group_outline_orders_and_sums() {
        let blocks = group_outline(vec![
            entry(1, 2, Semester::First, 3.0, 0.0),
            entry(2, 1, Semester::Second, 2.0, 1.0),
            entry(3, 1, Semester::First, 3.0, 1.0),
            entry(4, 1, Semester::First, 2.0, 0.0),
        ]);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].year_level, 1);
        assert_eq!(blocks[0].semesters[0].semester, Semester::First);
        assert_eq!(blocks[0].semesters[0].subjects.len(), 2);
        assert_eq!(blocks[0].semesters[0].total_units, 6.0);
        assert_eq!(blocks[0].semesters[1].semester, Semester::Second);
        assert_eq!(blocks[0].semesters[1].total_units, 3.0);
        assert_eq!(blocks[1].year_level, 2);
    }

    #[test]
    fn test_group_outline_empty() {
        assert!(group_outline(Vec::new()).is_empty());
    }

    #[test]
    fn test_summer_sorts_last() {
        let blocks = group_outline(vec![
            entry(1, 1, Semester::Summer, 3.0, 0.0),
            entry(2, 1, Semester::First, 3.0, 0.0),
        ]);
        assert_eq!(blocks[0].semesters[0].semester, Semester::First);
        assert_eq!(blocks[0].semesters[1].semester, Semester::Summer);
    }
}
