use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sections::{CreateSectionRequest, SectionListParams, UpdateSectionRequest};
use crate::models::users::entities::UserRole;
use crate::services::SectionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SectionService 实例
static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);

pub async fn list_sections(
    req: HttpRequest,
    query: web::Query<SectionListParams>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_sections(query.into_inner(), &req).await
}

pub async fn create_section(
    req: HttpRequest,
    data: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.create_section(data.into_inner(), &req).await
}

pub async fn update_section(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .update_section(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_section(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.delete_section(id.0, &req).await
}

// 配置路由
pub fn configure_section_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sections")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_sections))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::registrar_roles()))
                    .route("", web::post().to(create_section))
                    .route("/{id}", web::put().to(update_section))
                    .route("/{id}", web::delete().to(delete_section)),
            ),
    );
}
