pub mod calc;
pub mod report;
pub mod save;
pub mod sheet;
pub mod workflow;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::SaveGradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 教师查看某排课条目的成绩录入页
    pub async fn grade_sheet(
        &self,
        class_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        sheet::grade_sheet(self, class_schedule_id, request).await
    }

    // 教师保存单条成绩（仅 draft 可编辑）
    pub async fn save_grade(
        &self,
        grade_id: i64,
        data: SaveGradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_grade(self, grade_id, data, request).await
    }

    // 教师提交整张成绩表：draft → submitted
    pub async fn submit_grades(
        &self,
        class_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        workflow::submit_grades(self, class_schedule_id, request).await
    }

    // 注册员确认：submitted → confirmed
    pub async fn confirm_grades(
        &self,
        class_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        workflow::confirm_grades(self, class_schedule_id, request).await
    }

    // 学生成绩单
    pub async fn grade_report(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::grade_report(self, enrollment_id, request).await
    }
}
