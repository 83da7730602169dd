use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::EnrollmentSummaryParams;
use crate::models::users::entities::UserRole;
use crate::services::ReportService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn enrollment_summary(
    req: HttpRequest,
    query: web::Query<EnrollmentSummaryParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .enrollment_summary(query.into_inner(), &req)
        .await
}

pub async fn grade_distribution(
    req: HttpRequest,
    schedule_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .grade_distribution(schedule_id.0, &req)
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::registrar_roles()))
                    .route("/enrollment-summary", web::get().to(enrollment_summary))
                    .route(
                        "/grade-distribution/{schedule_id}",
                        web::get().to(grade_distribution),
                    ),
            ),
    );
}
