use crate::entities::{
    credit_transaction_entity as credit_transactions, user_credit_entity as user_credits,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct CreditService {
    pool: DatabaseConnection,
}

impl CreditService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Credit `amount` to the user's balance and append a `gain` transaction.
    /// The balance row is created on first grant; concurrent grants both land
    /// thanks to the upsert increment.
    pub async fn grant(
        &self,
        user_id: Uuid,
        credit_type: CreditType,
        amount: i64,
    ) -> AppResult<CreditTransactionResponse> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Grant amount must be positive".to_string(),
            ));
        }

        users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let txn = self.pool.begin().await?;

        user_credits::Entity::insert(user_credits::ActiveModel {
            user_id: Set(user_id),
            credit_type_id: Set(credit_type.id()),
            amount: Set(amount),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                user_credits::Column::UserId,
                user_credits::Column::CreditTypeId,
            ])
            .value(
                user_credits::Column::Amount,
                Expr::col((user_credits::Entity, user_credits::Column::Amount)).add(amount),
            )
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        let transaction = credit_transactions::ActiveModel {
            user_id: Set(user_id),
            credit_type_id: Set(credit_type.id()),
            transaction_type: Set(TransactionType::Gain.to_string()),
            amount: Set(amount),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(transaction.into())
    }

    /// Debit `amount` from the user's balance and append a `spend`
    /// transaction. `amount` must be at least 1: the transaction log only
    /// records positive amounts, so a zero debit is rejected up front
    /// rather than logged. The decrement is a single conditional UPDATE guarded by
    /// `amount >= requested`, so a concurrent spender can never drive the
    /// balance negative; when no row qualifies the debit is rejected whole.
    pub async fn consume(
        &self,
        user_id: Uuid,
        credit_type: CreditType,
        amount: i64,
    ) -> AppResult<CreditTransactionResponse> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Consume amount must be positive".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let result = user_credits::Entity::update_many()
            .col_expr(
                user_credits::Column::Amount,
                Expr::col(user_credits::Column::Amount).sub(amount),
            )
            .filter(user_credits::Column::UserId.eq(user_id))
            .filter(user_credits::Column::CreditTypeId.eq(credit_type.id()))
            .filter(user_credits::Column::Amount.gte(amount))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            let available = current_balance(&txn, user_id, credit_type).await?;
            txn.rollback().await?;
            return Err(AppError::InsufficientCredits {
                requested: amount,
                available,
            });
        }

        let transaction = credit_transactions::ActiveModel {
            user_id: Set(user_id),
            credit_type_id: Set(credit_type.id()),
            transaction_type: Set(TransactionType::Spend.to_string()),
            amount: Set(amount),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(transaction.into())
    }

    /// All balance rows of a user, one per credit type.
    pub async fn get_balances(&self, user_id: Uuid) -> AppResult<Vec<CreditBalanceResponse>> {
        let rows = user_credits::Entity::find()
            .filter(user_credits::Column::UserId.eq(user_id))
            .all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CreditBalanceResponse {
                credit_type: CreditType::from_id(row.credit_type_id)
                    .map(|t| t.name().to_string())
                    .unwrap_or_else(|| row.credit_type_id.to_string()),
                amount: row.amount,
            })
            .collect())
    }

    /// The user's transaction log, newest first.
    pub async fn list_transactions(
        &self,
        user_id: Uuid,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<CreditTransactionResponse>> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = credit_transactions::Entity::find()
            .filter(credit_transactions::Column::UserId.eq(user_id))
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let transactions = credit_transactions::Entity::find()
            .filter(credit_transactions::Column::UserId.eq(user_id))
            .order_by_desc(credit_transactions::Column::CreatedAt)
            .order_by_desc(credit_transactions::Column::Id)
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

async fn current_balance<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    credit_type: CreditType,
) -> AppResult<i64> {
    Ok(user_credits::Entity::find()
        .filter(user_credits::Column::UserId.eq(user_id))
        .filter(user_credits::Column::CreditTypeId.eq(credit_type.id()))
        .one(conn)
        .await?
        .map(|row| row.amount)
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn spend_row(user_id: Uuid, amount: i64) -> credit_transactions::Model {
        credit_transactions::Model {
            id: 1,
            user_id,
            credit_type_id: CreditType::ContactCredit.id(),
            transaction_type: TransactionType::Spend.to_string(),
            amount,
            created_at: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_consume_debits_and_logs_spend() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // conditional decrement touches one row
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            // spend transaction insert
            .append_query_results([vec![spend_row(user_id, 3)]])
            .into_connection();

        let service = CreditService::new(db);
        let tx = service
            .consume(user_id, CreditType::ContactCredit, 3)
            .await
            .unwrap();

        assert_eq!(tx.transaction_type, "spend");
        assert_eq!(tx.amount, 3);
        assert_eq!(tx.credit_type, "contact_credit");
    }

    #[tokio::test]
    async fn test_consume_insufficient_balance() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // decrement matches no row: balance below the requested amount
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            // balance lookup for the error payload
            .append_query_results([vec![user_credits::Model {
                id: 1,
                user_id,
                credit_type_id: CreditType::ContactCredit.id(),
                amount: 2,
                created_at: None,
            }]])
            .into_connection();

        let service = CreditService::new(db);
        let err = service
            .consume(user_id, CreditType::ContactCredit, 5)
            .await
            .unwrap_err();

        match err {
            AppError::InsufficientCredits {
                requested,
                available,
            } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_consume_missing_balance_row_reports_zero() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .append_query_results([Vec::<user_credits::Model>::new()])
            .into_connection();

        let service = CreditService::new(db);
        let err = service
            .consume(user_id, CreditType::ContactCredit, 1)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::InsufficientCredits {
                requested: 1,
                available: 0
            }
        ));
    }

    #[tokio::test]
    async fn test_consume_rejects_non_positive_amount() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = CreditService::new(db);

        let err = service
            .consume(Uuid::new_v4(), CreditType::ContactCredit, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_grant_upserts_balance_and_logs_gain() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // user existence check
            .append_query_results([vec![users::Model {
                id: user_id,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "hash".to_string(),
                is_active: true,
                last_login: None,
                created_at: None,
            }]])
            // balance upsert
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            // gain transaction insert
            .append_query_results([vec![credit_transactions::Model {
                id: 1,
                user_id,
                credit_type_id: CreditType::ContactCredit.id(),
                transaction_type: TransactionType::Gain.to_string(),
                amount: 100,
                created_at: Some(Utc::now()),
            }]])
            .into_connection();

        let service = CreditService::new(db);
        let tx = service
            .grant(user_id, CreditType::ContactCredit, 100)
            .await
            .unwrap();

        assert_eq!(tx.transaction_type, "gain");
        assert_eq!(tx.amount, 100);
    }

    #[tokio::test]
    async fn test_grant_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();

        let service = CreditService::new(db);
        let err = service
            .grant(Uuid::new_v4(), CreditType::ContactCredit, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_grant_rejects_non_positive_amount() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = CreditService::new(db);

        let err = service
            .grant(Uuid::new_v4(), CreditType::ContactCredit, -5)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
