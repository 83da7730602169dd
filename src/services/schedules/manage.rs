use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ScheduleService;
use super::conflict::{find_conflict, validate_time_slot};
use crate::models::{
    ApiResponse, ErrorCode,
    schedules::{ClassSchedule, CreateScheduleRequest, ScheduleListParams, UpdateScheduleRequest},
    users::entities::UserRole,
};

pub async fn create_schedule(
    service: &ScheduleService,
    data: CreateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_time_slot(data.day_of_week, data.start_minute, data.end_minute) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScheduleTimeInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 科目条目必须存在
    match storage
        .get_curriculum_subject_by_id(data.curriculum_subject_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Curriculum subject entry not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Curriculum subject lookup failed: {e}"),
                )),
            );
        }
    }

    // 授课人必须是 faculty 角色
    match storage.get_user_by_id(data.faculty_id).await {
        Ok(Some(user)) if user.role == UserRole::Faculty => {}
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Assigned user is not a faculty member",
            )));
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Faculty member not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Faculty lookup failed: {e}"),
                )),
            );
        }
    }

    // 同教师或同班组的现有条目中检测时段冲突
    let candidates = match storage
        .list_conflict_candidates(
            data.faculty_id,
            data.section_id,
            data.school_year_id,
            data.semester,
        )
        .await
    {
        Ok(c) => c,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Conflict candidates lookup failed: {e}"),
                )),
            );
        }
    };

    let candidate_slot = ClassSchedule {
        id: 0,
        curriculum_subject_id: data.curriculum_subject_id,
        faculty_id: data.faculty_id,
        section_id: data.section_id,
        school_year_id: data.school_year_id,
        semester: data.semester,
        room: data.room.clone(),
        day_of_week: data.day_of_week,
        start_minute: data.start_minute,
        end_minute: data.end_minute,
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
    };

    if let Some(conflict_id) = find_conflict(&candidate_slot, &candidates, None) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ScheduleConflict,
            format!("Time slot conflicts with schedule entry {conflict_id}"),
        )));
    }

    match storage.create_schedule(data).await {
        Ok(schedule) => {
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(schedule, "Schedule entry created")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create schedule entry: {e}"),
            )),
        ),
    }
}

pub async fn update_schedule(
    service: &ScheduleService,
    id: i64,
    data: UpdateScheduleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_schedule_by_id(id).await {
        Ok(Some(s)) => s,
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
    };

    // 应用变更后的时段再做校验与冲突检测
    let mut updated_slot = existing.clone();
    if let Some(faculty_id) = data.faculty_id {
        updated_slot.faculty_id = faculty_id;
    }
    if let Some(day_of_week) = data.day_of_week {
        updated_slot.day_of_week = day_of_week;
    }
    if let Some(start_minute) = data.start_minute {
        updated_slot.start_minute = start_minute;
    }
    if let Some(end_minute) = data.end_minute {
        updated_slot.end_minute = end_minute;
    }

    if let Err(msg) = validate_time_slot(
        updated_slot.day_of_week,
        updated_slot.start_minute,
        updated_slot.end_minute,
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScheduleTimeInvalid, msg)));
    }

    let candidates = match storage
        .list_conflict_candidates(
            updated_slot.faculty_id,
            updated_slot.section_id,
            updated_slot.school_year_id,
            updated_slot.semester,
        )
        .await
    {
        Ok(c) => c,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Conflict candidates lookup failed: {e}"),
                )),
            );
        }
    };

    if let Some(conflict_id) = find_conflict(&updated_slot, &candidates, Some(id)) {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ScheduleConflict,
            format!("Time slot conflicts with schedule entry {conflict_id}"),
        )));
    }

    match storage.update_schedule(id, data).await {
        Ok(Some(schedule)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(schedule, "Schedule entry updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update schedule entry: {e}"),
            )),
        ),
    }
}

pub async fn delete_schedule(
    service: &ScheduleService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_schedule(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Schedule entry deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ScheduleNotFound,
            "Schedule entry not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete schedule entry: {e}"),
            )),
        ),
    }
}

pub async fn list_schedules(
    service: &ScheduleService,
    query: ScheduleListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_schedules(query).await {
        Ok(schedules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            schedules,
            "Schedules retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list schedules: {e}"),
            )),
        ),
    }
}
