use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::RecordAttendanceRequest;
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn record_attendance(
    req: HttpRequest,
    schedule_id: SafeIDI64,
    data: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_attendance(schedule_id.0, data.into_inner(), &req)
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (schedule_id, date) = path.into_inner();
    ATTENDANCE_SERVICE
        .list_attendance(schedule_id, date, &req)
        .await
}

pub async fn attendance_summary(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .attendance_summary(schedule_id.0, &req)
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles()))
                    .route("/{schedule_id}", web::post().to(record_attendance))
                    .route("/{schedule_id}/summary", web::get().to(attendance_summary))
                    .route(
                        "/{schedule_id}/dates/{date}",
                        web::get().to(list_attendance),
                    ),
            ),
    );
}
