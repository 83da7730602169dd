//! 成绩存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::class_schedules::{Column as ScheduleColumn, Entity as ClassSchedules};
use crate::entity::curriculum_subjects::{Column as CsColumn, Entity as CurriculumSubjects};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EnrollSysError, Result};
use crate::models::grades::{Grade, GradeEntry, GradeStatus, SaveGradeRequest};
use crate::storage::EnrollmentGradeRow;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 为注册记录补齐成绩草稿行，已有行保持不变
    pub async fn seed_draft_grades_impl(
        &self,
        enrollment_id: i64,
        schedule_ids: &[i64],
    ) -> Result<u64> {
        if schedule_ids.is_empty() {
            return Ok(0);
        }

        let existing: HashSet<i64> = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询成绩行失败: {e}")))?
            .into_iter()
            .map(|m| m.class_schedule_id)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut created = 0u64;

        for schedule_id in schedule_ids {
            if existing.contains(schedule_id) {
                continue;
            }

            let model = ActiveModel {
                enrollment_id: Set(enrollment_id),
                class_schedule_id: Set(*schedule_id),
                status: Set(GradeStatus::Draft.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            model.insert(&self.db).await.map_err(|e| {
                EnrollSysError::database_operation(format!("创建成绩草稿失败: {e}"))
            })?;
            created += 1;
        }

        Ok(created)
    }

    pub async fn get_grade_by_id_impl(&self, id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 课表成绩录入页：成绩行 + 学生展示信息
    pub async fn list_grades_for_schedule_impl(
        &self,
        class_schedule_id: i64,
    ) -> Result<Vec<GradeEntry>> {
        let rows = Grades::find()
            .filter(Column::ClassScheduleId.eq(class_schedule_id))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询成绩行失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let enrollment_ids: Vec<i64> = rows.iter().map(|r| r.enrollment_id).collect();
        let enrollment_students: HashMap<i64, i64> = Enrollments::find()
            .filter(EnrollmentColumn::Id.is_in(enrollment_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询注册记录失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.student_id))
            .collect();

        let student_ids: Vec<i64> = enrollment_students.values().copied().collect();
        let students: HashMap<i64, (String, String)> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学生失败: {e}")))?
            .into_iter()
            .map(|m| {
                let display = m.display_name.clone().unwrap_or_else(|| m.username.clone());
                (m.id, (display, m.username))
            })
            .collect();

        let mut entries: Vec<GradeEntry> = rows
            .into_iter()
            .map(|row| {
                let student_id = enrollment_students
                    .get(&row.enrollment_id)
                    .copied()
                    .unwrap_or_default();
                let (student_name, student_username) =
                    students.get(&student_id).cloned().unwrap_or_default();

                GradeEntry {
                    grade: row.into_grade(),
                    student_id,
                    student_name,
                    student_username,
                    cumulative: None,
                }
            })
            .collect();

        entries.sort_by(|a, b| a.student_name.cmp(&b.student_name));

        Ok(entries)
    }

    /// 注册记录成绩单：成绩行 + 科目展示信息
    pub async fn list_grades_for_enrollment_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Vec<EnrollmentGradeRow>> {
        let rows = Grades::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询成绩行失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let schedule_ids: Vec<i64> = rows.iter().map(|r| r.class_schedule_id).collect();
        let schedule_cs: HashMap<i64, i64> = ClassSchedules::find()
            .filter(ScheduleColumn::Id.is_in(schedule_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询课表失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.curriculum_subject_id))
            .collect();

        let cs_ids: Vec<i64> = schedule_cs.values().copied().collect();
        let cs_subjects: HashMap<i64, i64> = CurriculumSubjects::find()
            .filter(CsColumn::Id.is_in(cs_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目条目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.subject_id))
            .collect();

        let subject_ids: Vec<i64> = cs_subjects.values().copied().collect();
        let subjects: HashMap<i64, (String, String)> = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, (m.code, m.title)))
            .collect();

        let result = rows
            .into_iter()
            .map(|row| {
                let (subject_code, subject_title) = schedule_cs
                    .get(&row.class_schedule_id)
                    .and_then(|cs_id| cs_subjects.get(cs_id))
                    .and_then(|subject_id| subjects.get(subject_id))
                    .cloned()
                    .unwrap_or_default();

                EnrollmentGradeRow {
                    grade: row.into_grade(),
                    subject_code,
                    subject_title,
                }
            })
            .collect();

        Ok(result)
    }

    /// 保存成绩分项（不改变状态）
    pub async fn save_grade_impl(
        &self,
        id: i64,
        update: SaveGradeRequest,
    ) -> Result<Option<Grade>> {
        let existing = self.get_grade_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            midterm: Set(update.midterm),
            finals: Set(update.finals),
            grade: Set(update.grade),
            remarks: Set(update.remarks),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("保存成绩失败: {e}")))?;

        self.get_grade_by_id_impl(id).await
    }

    /// 批量流转课表下的成绩状态
    pub async fn transition_schedule_grades_impl(
        &self,
        class_schedule_id: i64,
        from: GradeStatus,
        to: GradeStatus,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = Grades::update_many()
            .col_expr(Column::Status, Expr::value(to.to_string()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::ClassScheduleId.eq(class_schedule_id))
            .filter(Column::Status.eq(from.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("流转成绩状态失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
