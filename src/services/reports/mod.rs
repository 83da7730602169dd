pub mod enrollment_summary;
pub mod grade_distribution;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::EnrollmentSummaryParams;
use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 按学位项目汇总某学期的注册人数
    pub async fn enrollment_summary(
        &self,
        query: EnrollmentSummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enrollment_summary::enrollment_summary(self, query, request).await
    }

    // 某课表的成绩分布（分数段/均值/极值）
    pub async fn grade_distribution(
        &self,
        class_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade_distribution::grade_distribution(self, class_schedule_id, request).await
    }
}
