use crate::entities::point_transactions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The sender is always the authenticated user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePointTransactionRequest {
    pub amount: i64,
    pub reason: Option<String>,
    pub to_user_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PointTransactionResponse {
    pub id: Uuid,
    pub amount: i64,
    pub reason: Option<String>,
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<point_transactions::Model> for PointTransactionResponse {
    fn from(tx: point_transactions::Model) -> Self {
        Self {
            id: tx.id,
            amount: tx.amount,
            reason: tx.reason,
            from_user_id: tx.from_user_id,
            to_user_id: tx.to_user_id,
            created_at: tx.created_at,
        }
    }
}
