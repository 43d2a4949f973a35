use crate::entities::records;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecordRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    pub note: Option<String>,
    pub focus: i32,
    pub point: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRecordRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub note: Option<String>,
    pub focus: Option<i32>,
    pub point: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Keep records whose end_time is at or after this instant.
    pub start_time: Option<DateTime<Utc>>,
    /// Keep records whose start_time is at or before this instant.
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    pub note: Option<String>,
    pub focus: i32,
    pub point: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<records::Model> for RecordResponse {
    fn from(record: records::Model) -> Self {
        Self {
            id: record.id,
            start_time: record.start_time,
            end_time: record.end_time,
            title: record.title,
            note: record.note,
            focus: record.focus,
            point: record.point,
            created_at: record.created_at,
        }
    }
}
