pub mod assign;
pub mod curriculum;
pub mod outline;
pub mod subjects;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::curricula::{
    AssignSubjectRequest, CreateCurriculumRequest, CreateSubjectRequest, SubjectListParams,
    UpdateCurriculumRequest, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct CurriculumService {
    storage: Option<Arc<dyn Storage>>,
}

impl CurriculumService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建培养方案
    pub async fn create_curriculum(
        &self,
        data: CreateCurriculumRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        curriculum::create_curriculum(self, data, request).await
    }

    // 按学位项目列出培养方案
    pub async fn list_curricula(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        curriculum::list_curricula(self, course_id, request).await
    }

    // 更新培养方案
    pub async fn update_curriculum(
        &self,
        id: i64,
        data: UpdateCurriculumRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        curriculum::update_curriculum(self, id, data, request).await
    }

    // 删除培养方案
    pub async fn delete_curriculum(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        curriculum::delete_curriculum(self, id, request).await
    }

    // 创建科目
    pub async fn create_subject(
        &self,
        data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::create_subject(self, data, request).await
    }

    // 分页列出科目
    pub async fn list_subjects(
        &self,
        query: SubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::list_subjects(self, query, request).await
    }

    // 更新科目
    pub async fn update_subject(
        &self,
        id: i64,
        data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::update_subject(self, id, data, request).await
    }

    // 删除科目
    pub async fn delete_subject(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject(self, id, request).await
    }

    // 向培养方案分配科目
    pub async fn assign_subject(
        &self,
        curriculum_id: i64,
        data: AssignSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_subject(self, curriculum_id, data, request).await
    }

    // 从培养方案移除科目条目
    pub async fn remove_subject(
        &self,
        curriculum_id: i64,
        entry_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::remove_subject(self, curriculum_id, entry_id, request).await
    }

    // 培养方案大纲（按年级-学期分组）
    pub async fn curriculum_outline(
        &self,
        curriculum_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        outline::curriculum_outline(self, curriculum_id, request).await
    }
}
