use crate::entities::{point_transaction_entity as point_transactions, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct PointTransactionService {
    pool: DatabaseConnection,
}

impl PointTransactionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Record a point transfer from the authenticated user to another user.
    pub async fn create_transaction(
        &self,
        from_user_id: Uuid,
        request: CreatePointTransactionRequest,
    ) -> AppResult<PointTransactionResponse> {
        if request.amount <= 0 {
            return Err(AppError::ValidationError(
                "Transfer amount must be positive".to_string(),
            ));
        }
        if request.to_user_id == from_user_id {
            return Err(AppError::ValidationError(
                "Cannot transfer points to yourself".to_string(),
            ));
        }

        users::Entity::find_by_id(request.to_user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipient not found".to_string()))?;

        let transaction = point_transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            amount: Set(request.amount),
            reason: Set(request.reason),
            from_user_id: Set(from_user_id),
            to_user_id: Set(request.to_user_id),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        Ok(transaction.into())
    }

    pub async fn get_transaction(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> AppResult<PointTransactionResponse> {
        let transaction = point_transactions::Entity::find_by_id(transaction_id)
            .filter(involves_user(user_id))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Point transaction not found".to_string()))?;

        Ok(transaction.into())
    }

    /// Transactions where the user is sender or recipient, newest first.
    pub async fn list_transactions(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<PointTransactionResponse>> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = point_transactions::Entity::find()
            .filter(involves_user(user_id))
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let transactions = point_transactions::Entity::find()
            .filter(involves_user(user_id))
            .order_by_desc(point_transactions::Column::CreatedAt)
            .offset(params.get_offset() as u64)
            .limit(params.get_limit() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            transactions.into_iter().map(Into::into).collect(),
            Ord::max(params.page.unwrap_or(1), 1),
            params.get_limit(),
            total,
        ))
    }
}

fn involves_user(user_id: Uuid) -> Condition {
    Condition::any()
        .add(point_transactions::Column::FromUserId.eq(user_id))
        .add(point_transactions::Column::ToUserId.eq(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_rejects_self_transfer() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = PointTransactionService::new(db);

        let user_id = Uuid::new_v4();
        let err = service
            .create_transaction(
                user_id,
                CreatePointTransactionRequest {
                    amount: 10,
                    reason: None,
                    to_user_id: user_id,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_unknown_recipient() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();
        let service = PointTransactionService::new(db);

        let err = service
            .create_transaction(
                Uuid::new_v4(),
                CreatePointTransactionRequest {
                    amount: 10,
                    reason: Some("thanks".to_string()),
                    to_user_id: Uuid::new_v4(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
