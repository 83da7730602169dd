//! 考勤存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EnrollSysError, Result};
use crate::models::attendance::{
    AttendanceMark, AttendanceRecord, AttendanceStatus, AttendanceSummary,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (课表, 学生, 日期) 逐条 upsert 考勤标记
    pub async fn upsert_attendance_impl(
        &self,
        class_schedule_id: i64,
        date: &str,
        marks: &[AttendanceMark],
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut written = 0u64;

        let existing: HashMap<i64, crate::entity::attendance_records::Model> =
            AttendanceRecords::find()
                .filter(Column::ClassScheduleId.eq(class_schedule_id))
                .filter(Column::Date.eq(date))
                .all(&self.db)
                .await
                .map_err(|e| {
                    EnrollSysError::database_operation(format!("查询考勤记录失败: {e}"))
                })?
                .into_iter()
                .map(|m| (m.student_id, m))
                .collect();

        for mark in marks {
            match existing.get(&mark.student_id) {
                Some(row) => {
                    let model = ActiveModel {
                        id: Set(row.id),
                        status: Set(mark.status.to_string()),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.update(&self.db).await.map_err(|e| {
                        EnrollSysError::database_operation(format!("更新考勤记录失败: {e}"))
                    })?;
                }
                None => {
                    let model = ActiveModel {
                        class_schedule_id: Set(class_schedule_id),
                        student_id: Set(mark.student_id),
                        date: Set(date.to_string()),
                        status: Set(mark.status.to_string()),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(&self.db).await.map_err(|e| {
                        EnrollSysError::database_operation(format!("创建考勤记录失败: {e}"))
                    })?;
                }
            }
            written += 1;
        }

        Ok(written)
    }

    pub async fn list_attendance_impl(
        &self,
        class_schedule_id: i64,
        date: &str,
    ) -> Result<Vec<AttendanceRecord>> {
        let rows = AttendanceRecords::find()
            .filter(Column::ClassScheduleId.eq(class_schedule_id))
            .filter(Column::Date.eq(date))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }

    /// 课表下每个学生的分状态计数（在内存中分组）
    pub async fn attendance_summary_impl(
        &self,
        class_schedule_id: i64,
    ) -> Result<Vec<AttendanceSummary>> {
        let rows = AttendanceRecords::find()
            .filter(Column::ClassScheduleId.eq(class_schedule_id))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        let students: HashMap<i64, String> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学生失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.display_name.unwrap_or(m.username)))
            .collect();

        let mut counters: HashMap<i64, AttendanceSummary> = HashMap::new();
        for row in rows {
            let entry = counters
                .entry(row.student_id)
                .or_insert_with(|| AttendanceSummary {
                    student_id: row.student_id,
                    student_name: students.get(&row.student_id).cloned().unwrap_or_default(),
                    present: 0,
                    absent: 0,
                    late: 0,
                    excused: 0,
                });

            match row
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Present)
            {
                AttendanceStatus::Present => entry.present += 1,
                AttendanceStatus::Absent => entry.absent += 1,
                AttendanceStatus::Late => entry.late += 1,
                AttendanceStatus::Excused => entry.excused += 1,
            }
        }

        let mut summaries: Vec<AttendanceSummary> = counters.into_values().collect();
        summaries.sort_by(|a, b| a.student_name.cmp(&b.student_name));

        Ok(summaries)
    }
}
