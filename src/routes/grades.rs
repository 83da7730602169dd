use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::SaveGradeRequest;
use crate::models::users::entities::UserRole;
use crate::services::GradeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn grade_sheet(req: HttpRequest, schedule_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.grade_sheet(schedule_id.0, &req).await
}

pub async fn save_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    data: web::Json<SaveGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .save_grade(grade_id.0, data.into_inner(), &req)
        .await
}

pub async fn submit_grades(req: HttpRequest, schedule_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.submit_grades(schedule_id.0, &req).await
}

pub async fn confirm_grades(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.confirm_grades(schedule_id.0, &req).await
}

pub async fn grade_report(
    req: HttpRequest,
    enrollment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.grade_report(enrollment_id.0, &req).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/report/{enrollment_id}")
                    .wrap(middlewares::RequireRole::new_any(&[
                        &UserRole::Student,
                        &UserRole::Registrar,
                        &UserRole::Admin,
                    ]))
                    .route(web::get().to(grade_report)),
            )
            .service(
                web::resource("/confirm/{schedule_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::registrar_roles()))
                    .route(web::post().to(confirm_grades)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::faculty_roles()))
                    .route("/sheet/{schedule_id}", web::get().to(grade_sheet))
                    .route("/submit/{schedule_id}", web::post().to(submit_grades))
                    .route("/{id}", web::put().to(save_grade)),
            ),
    );
}
