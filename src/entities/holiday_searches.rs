use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "holiday_searches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub holiday_name: Option<String>,
    pub holiday_date: Date,
    pub days_until: i32,
    pub searched_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
