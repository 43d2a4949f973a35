use crate::entities::credit_transactions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Known credit types; ids match the rows seeded by the migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    ContactCredit,
}

impl CreditType {
    pub fn id(&self) -> i32 {
        match self {
            CreditType::ContactCredit => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CreditType::ContactCredit => "contact_credit",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(CreditType::ContactCredit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Gain,
    Spend,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Gain => "gain",
            TransactionType::Spend => "spend",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreditBalanceResponse {
    pub credit_type: String,
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreditTransactionResponse {
    pub id: i64,
    pub credit_type: String,
    pub transaction_type: String,
    pub amount: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<credit_transactions::Model> for CreditTransactionResponse {
    fn from(tx: credit_transactions::Model) -> Self {
        let credit_type = CreditType::from_id(tx.credit_type_id)
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| tx.credit_type_id.to_string());
        Self {
            id: tx.id,
            credit_type,
            transaction_type: tx.transaction_type,
            amount: tx.amount,
            created_at: tx.created_at,
        }
    }
}
