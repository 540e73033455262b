use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bank-account line item for a user.
///
/// Amounts are signed: negative is an expense (debit), zero or positive is
/// income or a credit. The description is free text from the bank feed and
/// may be missing.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: i64,
        user_id: i64,
        amount: Decimal,
        description: Option<String>,
        date: NaiveDate,
    ) -> Self {
        Transaction {
            id,
            user_id,
            amount,
            description,
            date,
        }
    }

    /// Savings rules apply only to expense transactions.
    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}
