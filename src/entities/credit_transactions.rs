use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Append-only audit trail of balance changes; rows are never updated or
/// deleted once written.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "credit_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Uuid,
    pub credit_type_id: i32,
    pub transaction_type: String,
    pub amount: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
