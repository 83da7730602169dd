pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::RecordAttendanceRequest;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 教师上报某日考勤（同学生同日重复上报覆盖旧值）
    pub async fn record_attendance(
        &self,
        class_schedule_id: i64,
        data: RecordAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, class_schedule_id, data, request).await
    }

    // 查看某课表某日的考勤
    pub async fn list_attendance(
        &self,
        class_schedule_id: i64,
        date: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, class_schedule_id, date, request).await
    }

    // 课表下每个学生的考勤汇总
    pub async fn attendance_summary(
        &self,
        class_schedule_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::attendance_summary(self, class_schedule_id, request).await
    }
}
