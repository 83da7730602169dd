//! 注册存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::school_years::{Column as SchoolYearColumn, Entity as SchoolYears};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{EnrollSysError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    enrollments::{
        CreateEnrollmentRequest, Enrollment, EnrollmentDetail, EnrollmentListParams,
        EnrollmentStatus,
    },
    school_years::Semester,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建注册记录，初始状态 pending
    pub async fn create_enrollment_impl(
        &self,
        req: CreateEnrollmentRequest,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            course_id: Set(req.course_id),
            section_id: Set(req.section_id),
            school_year_id: Set(req.school_year_id),
            semester: Set(req.semester.to_string()),
            status: Set(EnrollmentStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建注册记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询注册记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn find_enrollment_for_term_impl(
        &self,
        student_id: i64,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SchoolYearId.eq(school_year_id))
            .filter(Column::Semester.eq(semester.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询注册记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn update_enrollment_status_impl(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        let existing = self.get_enrollment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("更新注册状态失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 分页列出注册记录（带展示信息）
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListParams,
    ) -> Result<PaginatedResponse<EnrollmentDetail>> {
        let (page, size) = query.pagination.normalize();
        let (page, size) = (page as u64, size as u64);

        let mut select = Enrollments::find();

        if let Some(school_year_id) = query.school_year_id {
            select = select.filter(Column::SchoolYearId.eq(school_year_id));
        }

        if let Some(semester) = query.semester {
            select = select.filter(Column::Semester.eq(semester.to_string()));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 学生搜索：先查出匹配的学生 ID 再过滤
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            let student_ids: Vec<i64> = Users::find()
                .select_only()
                .column(UserColumn::Id)
                .filter(
                    Condition::any()
                        .add(UserColumn::Username.contains(&escaped))
                        .add(UserColumn::DisplayName.contains(&escaped)),
                )
                .into_tuple()
                .all(&self.db)
                .await
                .map_err(|e| EnrollSysError::database_operation(format!("搜索学生失败: {e}")))?;

            select = select.filter(Column::StudentId.is_in(student_ids));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            EnrollSysError::database_operation(format!("查询注册记录总数失败: {e}"))
        })?;

        let rows = paginator.fetch_page(page - 1).await.map_err(|e| {
            EnrollSysError::database_operation(format!("查询注册记录列表失败: {e}"))
        })?;

        let items = self.attach_enrollment_details(rows).await?;

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    /// 学生本人的注册历史
    pub async fn list_student_enrollments_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<EnrollmentDetail>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询注册历史失败: {e}")))?;

        self.attach_enrollment_details(rows).await
    }

    /// 报表用：某学年学期的 (course_id, status) 行
    pub async fn list_term_enrollment_rows_impl(
        &self,
        school_year_id: i64,
        semester: Semester,
    ) -> Result<Vec<(i64, EnrollmentStatus)>> {
        let rows = Enrollments::find()
            .filter(Column::SchoolYearId.eq(school_year_id))
            .filter(Column::Semester.eq(semester.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询注册记录失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| {
                let status = m
                    .status
                    .parse::<EnrollmentStatus>()
                    .unwrap_or(EnrollmentStatus::Pending);
                (m.course_id, status)
            })
            .collect())
    }

    /// 为注册行批量补齐学生、学位项目、班组、学年展示信息
    async fn attach_enrollment_details(
        &self,
        rows: Vec<crate::entity::enrollments::Model>,
    ) -> Result<Vec<EnrollmentDetail>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        let course_ids: Vec<i64> = rows.iter().map(|r| r.course_id).collect();
        let section_ids: Vec<i64> = rows.iter().map(|r| r.section_id).collect();
        let school_year_ids: Vec<i64> = rows.iter().map(|r| r.school_year_id).collect();

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

        let courses: HashMap<i64, String> = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学位项目失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.code))
            .collect();

        let sections: HashMap<i64, String> = Sections::find()
            .filter(SectionColumn::Id.is_in(section_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询班组失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        let school_years: HashMap<i64, String> = SchoolYears::find()
            .filter(SchoolYearColumn::Id.is_in(school_year_ids))
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学年失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.label))
            .collect();

        let details = rows
            .into_iter()
            .map(|row| {
                let (student_name, student_username) = students
                    .get(&row.student_id)
                    .cloned()
                    .unwrap_or_default();
                let course_code = courses.get(&row.course_id).cloned().unwrap_or_default();
                let section_name = sections.get(&row.section_id).cloned().unwrap_or_default();
                let school_year_label = school_years
                    .get(&row.school_year_id)
                    .cloned()
                    .unwrap_or_default();

                EnrollmentDetail {
                    enrollment: row.into_enrollment(),
                    student_name,
                    student_username,
                    course_code,
                    section_name,
                    school_year_label,
                }
            })
            .collect();

        Ok(details)
    }
}
