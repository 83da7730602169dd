pub mod activate;
pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::school_years::CreateSchoolYearRequest;
use crate::storage::Storage;

pub struct SchoolYearService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolYearService {
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

    // 创建学年
    pub async fn create_school_year(
        &self,
        data: CreateSchoolYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_school_year(self, data, request).await
    }

    // 列出全部学年
    pub async fn list_school_years(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_school_years(self, request).await
    }

    // 激活学年（同时取消其余学年的激活状态）
    pub async fn activate_school_year(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        activate::activate_school_year(self, id, request).await
    }

    // 删除学年
    pub async fn delete_school_year(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_school_year(self, id, request).await
    }
}
