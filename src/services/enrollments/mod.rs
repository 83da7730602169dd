pub mod create;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::{CreateEnrollmentRequest, EnrollmentListParams};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 创建注册记录（初始 pending）
    pub async fn create_enrollment(
        &self,
        data: CreateEnrollmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, data, request).await
    }

    // 确认注册：pending → enrolled，并生成成绩草稿行
    pub async fn confirm_enrollment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::confirm_enrollment(self, id, request).await
    }

    // 退学：pending/enrolled → dropped
    pub async fn drop_enrollment(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::drop_enrollment(self, id, request).await
    }

    // 分页列出注册记录
    pub async fn list_enrollments(
        &self,
        query: EnrollmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, query, request).await
    }

    // 当前学生的注册历史
    pub async fn my_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_enrollments(self, request).await
    }
}
