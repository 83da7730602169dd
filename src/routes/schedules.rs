use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::schedules::{
    CreateScheduleRequest, ScheduleListParams, TimetableParams, UpdateScheduleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ScheduleService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ScheduleService 实例
static SCHEDULE_SERVICE: Lazy<ScheduleService> = Lazy::new(ScheduleService::new_lazy);

pub async fn list_schedules(
    req: HttpRequest,
    query: web::Query<ScheduleListParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .list_schedules(query.into_inner(), &req)
        .await
}

pub async fn create_schedule(
    req: HttpRequest,
    data: web::Json<CreateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .create_schedule(data.into_inner(), &req)
        .await
}

pub async fn update_schedule(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateScheduleRequest>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .update_schedule(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_schedule(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE.delete_schedule(id.0, &req).await
}

pub async fn my_timetable(
    req: HttpRequest,
    query: web::Query<TimetableParams>,
) -> ActixResult<HttpResponse> {
    SCHEDULE_SERVICE
        .faculty_timetable(query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_schedule_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schedules")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_schedules))
            .service(
                web::resource("/my-timetable")
                    .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles()))
                    .route(web::get().to(my_timetable)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::registrar_roles()))
                    .route("", web::post().to(create_schedule))
                    .route("/{id}", web::put().to(update_schedule))
                    .route("/{id}", web::delete().to(delete_schedule)),
            ),
    );
}
