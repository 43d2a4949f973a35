use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Cached talent detail record keyed by the upstream member id. Scalar
/// columns cover the fields we query on; `profile` keeps the full payload.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "talents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub external_id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub country: Option<String>,
    pub logo_url: Option<String>,
    pub connections_count: Option<i32>,
    pub experience_count: Option<i32>,
    pub profile: Option<Json>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
