//! 课表存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::class_schedules::{ActiveModel, Column, Entity as ClassSchedules};
use crate::entity::curriculum_subjects::{
    Column as CsColumn, Entity as CurriculumSubjects, Model as CurriculumSubjectModel,
};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EnrollSysError, Result};
use crate::models::schedules::{
    ClassSchedule, ClassScheduleDetail, CreateScheduleRequest, ScheduleListParams,
    UpdateScheduleRequest,
};
use crate::models::school_years::Semester;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_schedule_impl(&self, req: CreateScheduleRequest) -> Result<ClassSchedule> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            curriculum_subject_id: Set(req.curriculum_subject_id),
            faculty_id: Set(req.faculty_id),
            section_id: Set(req.section_id),
            school_year_id: Set(req.school_year_id),
            semester: Set(req.semester.to_string()),
            room: Set(req.room),
            day_of_week: Set(req.day_of_week),
            start_minute: Set(req.start_minute),
            end_minute: Set(req.end_minute),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建课表条目失败: {e}")))?;

        Ok(result.into_class_schedule())
    }

    pub async fn get_schedule_by_id_impl(&self, id: i64) -> Result<Option<ClassSchedule>> {
        let result = ClassSchedules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询课表条目失败: {e}")))?;

        Ok(result.map(|m| m.into_class_schedule()))
    }

    pub async fn update_schedule_impl(
        &self,
        id: i64,
        update: UpdateScheduleRequest,
    ) -> Result<Option<ClassSchedule>> {
        let existing = self.get_schedule_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(faculty_id) = update.faculty_id {
            model.faculty_id = Set(faculty_id);
        }

        if let Some(room) = update.room {
            model.room = Set(room);
        }

        if let Some(day_of_week) = update.day_of_week {
            model.day_of_week = Set(day_of_week);
        }

        if let Some(start_minute) = update.start_minute {
            model.start_minute = Set(start_minute);
        }

        if let Some(end_minute) = update.end_minute {
            model.end_minute = Set(end_minute);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("更新课表条目失败: {e}")))?;

        self.get_schedule_by_id_impl(id).await
    }

    pub async fn delete_schedule_impl(&self, id: i64) -> Result<bool> {
        let result = ClassSchedules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("删除课表条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按条件列出课表并补齐展示信息
    pub async fn list_schedules_impl(
        &self,
        query: ScheduleListParams,
    ) -> Result<Vec<ClassScheduleDetail>> {
        let mut select = ClassSchedules::find();

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(faculty_id) = query.faculty_id {
            select = select.filter(Column::FacultyId.eq(faculty_id));
        }

        if let Some(school_year_id) = query.school_year_id {
            select = select.filter(Column::SchoolYearId.eq(school_year_id));
        }

        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester.to_string()));
        }

        let rows = select
            .order_by_asc(Column::DayOfWeek)
            .order_by_asc(Column::StartMinute)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询课表失败: {e}")))?;

        self.attach_schedule_details(rows).await
    }

    /// 冲突检测候选：同教师或同班组在同学年学期的课表条目
    pub async fn list_conflict_candidates_impl(
        &self,
        faculty_id: i64,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>> {
        let rows = ClassSchedules::find()
            .filter(Column::SchoolYearId.eq(school_year_id))
            .filter(Column::Semester.eq(semester.to_string()))
            .filter(
                Condition::any()
                    .add(Column::FacultyId.eq(faculty_id))
                    .add(Column::SectionId.eq(section_id)),
            )
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询冲突候选失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_class_schedule()).collect())
    }

    pub async fn list_section_term_schedules_impl(
        &self,
        section_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<ClassSchedule>> {
        let rows = ClassSchedules::find()
            .filter(Column::SectionId.eq(section_id))
            .filter(Column::SchoolYearId.eq(school_year_id))
            .filter(Column::Semester.eq(semester.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询班组课表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_class_schedule()).collect())
    }

    /// 为课表行批量补齐科目、班组、教师展示信息
    async fn attach_schedule_details(
        &self,
        rows: Vec<crate::entity::class_schedules::Model>,
    ) -> Result<Vec<ClassScheduleDetail>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let cs_ids: Vec<i64> = rows.iter().map(|r| r.curriculum_subject_id).collect();
        let section_ids: Vec<i64> = rows.iter().map(|r| r.section_id).collect();
        let faculty_ids: Vec<i64> = rows.iter().map(|r| r.faculty_id).collect();

        let cs_rows: HashMap<i64, CurriculumSubjectModel> = CurriculumSubjects::find()
            .filter(CsColumn::Id.is_in(cs_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目条目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let subject_ids: Vec<i64> = cs_rows.values().map(|m| m.subject_id).collect();
        let subjects: HashMap<i64, (String, String)> = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, (m.code, m.title)))
            .collect();

        let sections: HashMap<i64, String> = Sections::find()
            .filter(SectionColumn::Id.is_in(section_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询班组失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        let faculty: HashMap<i64, String> = Users::find()
            .filter(UserColumn::Id.is_in(faculty_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询教师失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.display_name.unwrap_or(m.username)))
            .collect();

        let details = rows
            .into_iter()
            .map(|row| {
                let (subject_code, subject_title) = cs_rows
                    .get(&row.curriculum_subject_id)
                    .and_then(|cs| subjects.get(&cs.subject_id))
                    .cloned()
                    .unwrap_or_default();
                let section_name = sections.get(&row.section_id).cloned().unwrap_or_default();
                let faculty_name = faculty.get(&row.faculty_id).cloned().unwrap_or_default();

                ClassScheduleDetail {
                    schedule: row.into_class_schedule(),
                    subject_code,
                    subject_title,
                    section_name,
                    faculty_name,
                }
            })
            .collect();

        Ok(details)
    }
}
