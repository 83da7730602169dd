//! 学年存储操作

use super::SeaOrmStorage;
use crate::entity::school_years::{ActiveModel, Column, Entity as SchoolYears};
use crate::errors::{EnrollSysError, Result};
use crate::models::school_years::SchoolYear;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建学年（默认未激活）
    pub async fn create_school_year_impl(&self, label: &str) -> Result<SchoolYear> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            label: Set(label.to_string()),
            is_active: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("创建学年失败: {e}")))?;

        Ok(result.into_school_year())
    }

    pub async fn get_school_year_by_id_impl(&self, id: i64) -> Result<Option<SchoolYear>> {
        let result = SchoolYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_school_year()))
    }

    pub async fn get_school_year_by_label_impl(&self, label: &str) -> Result<Option<SchoolYear>> {
        let result = SchoolYears::find()
            .filter(Column::Label.eq(label))
            .one(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_school_year()))
    }

    /// 列出全部学年，最近创建的在前
    pub async fn list_school_years_impl(&self) -> Result<Vec<SchoolYear>> {
        let result = SchoolYears::find()
            .order_by_desc(Column::Label)
            .all(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("查询学年列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_school_year()).collect())
    }

    /// 激活指定学年，其余学年同事务内取消激活
    pub async fn activate_school_year_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("开启事务失败: {e}")))?;

        SchoolYears::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("取消激活学年失败: {e}")))?;

        let result = SchoolYears::update_many()
            .col_expr(Column::IsActive, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("激活学年失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_school_year_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolYears::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EnrollSysError::database_operation(format!("删除学年失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
