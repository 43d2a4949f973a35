use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// One balance row per (user, credit type), enforced by a unique index.
/// Mutated only by the credit service; `amount` never goes below zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user_credits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Uuid,
    pub credit_type_id: i32,
    pub amount: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
