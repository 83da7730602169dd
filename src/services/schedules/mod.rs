pub mod conflict;
pub mod manage;
pub mod timetable;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schedules::{
    CreateScheduleRequest, ScheduleListParams, TimetableParams, UpdateScheduleRequest,
};
use crate::storage::Storage;

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
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

    // 创建课表条目（拒绝教师/班组时段冲突）
    pub async fn create_schedule(
        &self,
        data: CreateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_schedule(self, data, request).await
    }

    // 更新课表条目（改时段时重新检测冲突）
    pub async fn update_schedule(
        &self,
        id: i64,
        data: UpdateScheduleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_schedule(self, id, data, request).await
    }

    // 删除课表条目
    pub async fn delete_schedule(
        &self,
        id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_schedule(self, id, request).await
    }

    // 按条件列出课表
    pub async fn list_schedules(
        &self,
        query: ScheduleListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_schedules(self, query, request).await
    }

    // 当前教师的周时间表
    pub async fn faculty_timetable(
        &self,
        query: TimetableParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        timetable::faculty_timetable(self, query, request).await
    }
}
