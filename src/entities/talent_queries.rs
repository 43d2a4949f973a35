use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A persisted natural-language search: the structured filters the LLM
/// produced and the external member ids the talent pool returned.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "talent_queries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub nature_language_query: String,
    pub structured_query: Option<Json>,
    pub query_result: Option<Json>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
