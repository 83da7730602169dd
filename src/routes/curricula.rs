use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::curricula::{
    AssignSubjectRequest, CreateCurriculumRequest, CreateSubjectRequest, SubjectListParams,
    UpdateCurriculumRequest, UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CurriculumService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CurriculumService 实例
static CURRICULUM_SERVICE: Lazy<CurriculumService> = Lazy::new(CurriculumService::new_lazy);

// 培养方案
pub async fn create_curriculum(
    req: HttpRequest,
    data: web::Json<CreateCurriculumRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .create_curriculum(data.into_inner(), &req)
        .await
}

pub async fn list_curricula(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.list_curricula(course_id.0, &req).await
}

pub async fn update_curriculum(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateCurriculumRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .update_curriculum(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_curriculum(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.delete_curriculum(id.0, &req).await
}

pub async fn curriculum_outline(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.curriculum_outline(id.0, &req).await
}

// 科目分配
pub async fn assign_subject(
    req: HttpRequest,
    curriculum_id: SafeIDI64,
    data: web::Json<AssignSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .assign_subject(curriculum_id.0, data.into_inner(), &req)
        .await
}

pub async fn remove_subject(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (curriculum_id, entry_id) = path.into_inner();
    CURRICULUM_SERVICE
        .remove_subject(curriculum_id, entry_id, &req)
        .await
}

// 科目
pub async fn create_subject(
    req: HttpRequest,
    data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .create_subject(data.into_inner(), &req)
        .await
}

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .list_subjects(query.into_inner(), &req)
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    id: SafeIDI64,
    data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .update_subject(id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.delete_subject(id.0, &req).await
}

// 配置路由
pub fn configure_curriculum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/curricula")
            .wrap(middlewares::RequireJWT)
            .route("/course/{course_id}", web::get().to(list_curricula))
            .route("/{id}/outline", web::get().to(curriculum_outline))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::program_head_roles(),
                    ))
                    .route("", web::post().to(create_curriculum))
                    .route("/{id}", web::put().to(update_curriculum))
                    .route("/{id}", web::delete().to(delete_curriculum))
                    .route("/{id}/subjects", web::post().to(assign_subject))
                    .route(
                        "/{id}/subjects/{entry_id}",
                        web::delete().to(remove_subject),
                    ),
            ),
    );

    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_subjects))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::program_head_roles(),
                    ))
                    .route("", web::post().to(create_subject))
                    .route("/{id}", web::put().to(update_subject))
                    .route("/{id}", web::delete().to(delete_subject)),
            ),
    );
}
