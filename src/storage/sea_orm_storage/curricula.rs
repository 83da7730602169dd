//! 培养方案与科目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::curricula::{
    ActiveModel as CurriculumActiveModel, Column as CurriculumColumn, Entity as Curricula,
};
use crate::entity::curriculum_subjects::{
    ActiveModel as CurriculumSubjectActiveModel, Column as CsColumn, Entity as CurriculumSubjects,
};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
};
use crate::errors::{EnrollSysError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    curricula::{
        AssignSubjectRequest, CreateCurriculumRequest, CreateSubjectRequest, Curriculum,
        CurriculumSubjectEntry, Subject, SubjectListParams, UpdateCurriculumRequest,
        UpdateSubjectRequest,
    },
    school_years::Semester,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_curriculum_impl(
        &self,
        req: CreateCurriculumRequest,
    ) -> Result<Curriculum> {
        let now = chrono::Utc::now().timestamp();

        let model = CurriculumActiveModel {
            course_id: Set(req.course_id),
            code: Set(req.code),
            description: Set(req.description),
            school_year_label: Set(req.school_year_label),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建培养方案失败: {e}")))?;

        Ok(result.into_curriculum())
    }

    pub async fn get_curriculum_by_id_impl(&self, id: i64) -> Result<Option<Curriculum>> {
        let result = Curricula::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询培养方案失败: {e}")))?;

        Ok(result.map(|m| m.into_curriculum()))
    }

    pub async fn list_curricula_by_course_impl(&self, course_id: i64) -> Result<Vec<Curriculum>> {
        let result = Curricula::find()
            .filter(CurriculumColumn::CourseId.eq(course_id))
            .order_by_desc(CurriculumColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                EnrollSysError::database_operation(format!("查询培养方案列表失败: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_curriculum()).collect())
    }

    pub async fn update_curriculum_impl(
        &self,
        id: i64,
        update: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>> {
        let existing = self.get_curriculum_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = CurriculumActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(label) = update.school_year_label {
            model.school_year_label = Set(Some(label));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("更新培养方案失败: {e}")))?;

        self.get_curriculum_by_id_impl(id).await
    }

    pub async fn delete_curriculum_impl(&self, id: i64) -> Result<bool> {
        let result = Curricula::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("删除培养方案失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = SubjectActiveModel {
            code: Set(req.code),
            title: Set(req.title),
            lecture_units: Set(req.lecture_units),
            lab_units: Set(req.lab_units),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn get_subject_by_code_impl(&self, code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(SubjectColumn::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>> {
        let (page, size) = query.pagination.normalize();
        let (page, size) = (page as u64, size as u64);

        let mut select = Subjects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(SubjectColumn::Code.contains(&escaped))
                    .add(SubjectColumn::Title.contains(&escaped)),
            );
        }

        select = select.order_by_asc(SubjectColumn::Code);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目总数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = SubjectActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(code) = update.code {
            model.code = Set(code);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(lecture_units) = update.lecture_units {
            model.lecture_units = Set(lecture_units);
        }

        if let Some(lab_units) = update.lab_units {
            model.lab_units = Set(lab_units);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 向培养方案分配科目
    pub async fn assign_subject_impl(
        &self,
        curriculum_id: i64,
        req: AssignSubjectRequest,
    ) -> Result<CurriculumSubjectEntry> {
        let subject = self
            .get_subject_by_id_impl(req.subject_id)
            .await?
            .ok_or_else(|| EnrollSysError::not_found(format!("科目不存在: {}", req.subject_id)))?;

        let now = chrono::Utc::now().timestamp();

        let model = CurriculumSubjectActiveModel {
            curriculum_id: Set(curriculum_id),
            subject_id: Set(req.subject_id),
            year_level: Set(req.year_level),
            semester: Set(req.semester.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("分配科目失败: {e}")))?;

        Ok(CurriculumSubjectEntry {
            id: result.id,
            subject,
            year_level: result.year_level,
            semester: result
                .semester
                .parse::<Semester>()
                .unwrap_or(Semester::First),
        })
    }

    pub async fn remove_curriculum_subject_impl(
        &self,
        curriculum_id: i64,
        entry_id: i64,
    ) -> Result<bool> {
        let result = CurriculumSubjects::delete_many()
            .filter(CsColumn::Id.eq(entry_id))
            .filter(CsColumn::CurriculumId.eq(curriculum_id))
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("移除科目条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出培养方案下的科目条目（按年级、学期排序）
    pub async fn list_curriculum_subjects_impl(
        &self,
        curriculum_id: i64,
    ) -> Result<Vec<CurriculumSubjectEntry>> {
        let rows = CurriculumSubjects::find()
            .filter(CsColumn::CurriculumId.eq(curriculum_id))
            .order_by_asc(CsColumn::YearLevel)
            .order_by_asc(CsColumn::Semester)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目条目失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let subject_ids: Vec<i64> = rows.iter().map(|r| r.subject_id).collect();
        let subjects: HashMap<i64, Subject> = Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_subject()))
            .collect();

        let entries = rows
            .into_iter()
            .filter_map(|row| {
                subjects
                    .get(&row.subject_id)
                    .cloned()
                    .map(|subject| CurriculumSubjectEntry {
                        id: row.id,
                        subject,
                        year_level: row.year_level,
                        semester: row.semester.parse::<Semester>().unwrap_or(Semester::First),
                    })
            })
            .collect();

        Ok(entries)
    }

    pub async fn get_curriculum_subject_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<CurriculumSubjectEntry>> {
        let row = CurriculumSubjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询科目条目失败: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let subject = self.get_subject_by_id_impl(row.subject_id).await?;

        Ok(subject.map(|subject| CurriculumSubjectEntry {
            id: row.id,
            subject,
            year_level: row.year_level,
            semester: row.semester.parse::<Semester>().unwrap_or(Semester::First),
        }))
    }
}
