pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::{CreateSectionRequest, SectionListParams, UpdateSectionRequest};
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    // 创建班组
    pub async fn create_section(
        &self,
        data: CreateSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_section(self, data, request).await
    }

    // 按条件列出班组
    pub async fn list_sections(
        &self,
        query: SectionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_sections(self, query, request).await
    }

    // 更新班组
    pub async fn update_section(
        &self,
        id: i64,
        data: UpdateSectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_section(self, id, data, request).await
    }

    // 删除班组
    pub async fn delete_section(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_section(self, id, request).await
    }
}
