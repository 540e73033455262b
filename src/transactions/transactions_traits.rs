use async_trait::async_trait;

use crate::errors::Result;
use crate::transactions::transactions_model::Transaction;

#[async_trait]
pub trait TransactionSourceTrait: Send + Sync {
    /// Latest known transactions for the user, in bank-feed order.
    /// An empty result means "no transactions", never an error.
    async fn latest_transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>>;
}
