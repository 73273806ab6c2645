use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub height: f64,
    #[sea_orm(column_type = "Double")]
    pub target_weight: f64,
    pub goal: String,
    pub age: i32,
    pub gender: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::health_metrics::Entity")]
    HealthMetrics,
    #[sea_orm(has_many = "super::weight_records::Entity")]
    WeightRecords,
    #[sea_orm(has_many = "super::workout_records::Entity")]
    WorkoutRecords,
}

impl Related<super::health_metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthMetrics.def()
    }
}

impl Related<super::weight_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeightRecords.def()
    }
}

impl Related<super::workout_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
