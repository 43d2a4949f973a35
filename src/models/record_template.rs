use crate::entities::record_templates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRecordTemplateRequest {
    pub default_title: String,
    pub default_focus: i32,
    pub default_point: i32,
    pub default_note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRecordTemplateRequest {
    pub default_title: Option<String>,
    pub default_focus: Option<i32>,
    pub default_point: Option<i32>,
    pub default_note: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordTemplateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub default_title: String,
    pub default_focus: i32,
    pub default_point: i32,
    pub default_note: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<record_templates::Model> for RecordTemplateResponse {
    fn from(template: record_templates::Model) -> Self {
        Self {
            id: template.id,
            user_id: template.user_id,
            default_title: template.default_title,
            default_focus: template.default_focus,
            default_point: template.default_point,
            default_note: template.default_note,
            created_at: template.created_at,
        }
    }
}
