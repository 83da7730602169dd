//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub enrollment_id: i64,
    pub class_schedule_id: i64,
    pub midterm: Option<f64>,
    pub finals: Option<f64>,
    pub grade: Option<f64>,
    pub remarks: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::enrollments::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollments::Column::Id"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::class_schedules::Entity",
        from = "Column::ClassScheduleId",
        to = "super::class_schedules::Column::Id"
    )]
    ClassSchedule,
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::class_schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> crate::models::grades::Grade {
        use crate::models::grades::GradeStatus;
        use chrono::{DateTime, Utc};

        crate::models::grades::Grade {
            id: self.id,
            enrollment_id: self.enrollment_id,
            class_schedule_id: self.class_schedule_id,
            midterm: self.midterm,
            finals: self.finals,
            grade: self.grade,
            remarks: self.remarks,
            status: self
                .status
                .parse::<GradeStatus>()
                .unwrap_or(GradeStatus::Draft),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
