//! 班组存储操作

use super::SeaOrmStorage;
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{EnrollSysError, Result};
use crate::models::sections::{
    CreateSectionRequest, Section, SectionListParams, UpdateSectionRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_section_impl(&self, req: CreateSectionRequest) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            name: Set(req.name),
            year_level: Set(req.year_level),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建班组失败: {e}")))?;

        Ok(result.into_section())
    }

    pub async fn get_section_by_id_impl(&self, id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询班组失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    pub async fn list_sections_impl(&self, query: SectionListParams) -> Result<Vec<Section>> {
        let mut select = Sections::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(year_level) = query.year_level {
            select = select.filter(Column::YearLevel.eq(year_level));
        }

        let result = select
            .order_by_asc(Column::YearLevel)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询班组列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_section()).collect())
    }

    pub async fn update_section_impl(
        &self,
        id: i64,
        update: UpdateSectionRequest,
    ) -> Result<Option<Section>> {
        let existing = self.get_section_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(year_level) = update.year_level {
            model.year_level = Set(year_level);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("更新班组失败: {e}")))?;

        self.get_section_by_id_impl(id).await
    }

    pub async fn delete_section_impl(&self, id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("删除班组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
