use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::school_years::CreateSchoolYearRequest;
use crate::models::users::entities::UserRole;
use crate::services::SchoolYearService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SchoolYearService 实例
static SCHOOL_YEAR_SERVICE: Lazy<SchoolYearService> = Lazy::new(SchoolYearService::new_lazy);

pub async fn list_school_years(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.list_school_years(&req).await
}

pub async fn create_school_year(
    req: HttpRequest,
    data: web::Json<CreateSchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .create_school_year(data.into_inner(), &req)
        .await
}

pub async fn activate_school_year(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.activate_school_year(id.0, &req).await
}

pub async fn delete_school_year(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.delete_school_year(id.0, &req).await
}

// 配置路由
pub fn configure_school_year_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/school-years")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_school_years))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::registrar_roles()))
                    .route("", web::post().to(create_school_year))
                    .route("/{id}/activate", web::post().to(activate_school_year))
                    .route("/{id}", web::delete().to(delete_school_year)),
            ),
    );
}
