use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::errors::Result;
use crate::transactions::transactions_model::Transaction;
use crate::transactions::transactions_traits::TransactionSourceTrait;

/// Canned transaction source used until a real bank-data integration lands.
/// Serves the same demo feed to every user.
pub struct StandardTransactionSource;

impl StandardTransactionSource {
    pub fn new() -> Self {
        StandardTransactionSource
    }
}

impl Default for StandardTransactionSource {
    fn default() -> Self {
        StandardTransactionSource::new()
    }
}

#[async_trait]
impl TransactionSourceTrait for StandardTransactionSource {
    async fn latest_transactions_for_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        Ok(demo_transactions(user_id))
    }
}

fn demo_transactions(user_id: i64) -> Vec<Transaction> {
    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
    }

    vec![
        Transaction::new(1, user_id, dec!(-5.34), Some("Starbucks".into()), day(2015, 7, 1)),
        Transaction::new(2, user_id, dec!(-2.16), Some("Starbucks".into()), day(2015, 7, 2)),
        Transaction::new(3, user_id, dec!(-3.09), Some("McDonald's".into()), day(2015, 7, 2)),
        Transaction::new(4, user_id, dec!(-1.03), Some("Starbucks".into()), day(2015, 7, 3)),
        Transaction::new(5, user_id, dec!(-2.99), Some("Apple Itunes".into()), day(2015, 7, 7)),
        Transaction::new(6, user_id, dec!(1945.00), Some("Salary".into()), day(2015, 7, 25)),
        Transaction::new(7, user_id, dec!(-9.76), Some("Amazon".into()), day(2015, 7, 8)),
        Transaction::new(8, user_id, dec!(-59.45), Some("Walmart".into()), day(2015, 7, 8)),
        Transaction::new(9, user_id, dec!(-13.14), Some("Papa Joe's".into()), day(2015, 7, 13)),
        Transaction::new(10, user_id, dec!(-2.16), Some("Starbucks".into()), day(2015, 7, 29)),
        Transaction::new(11, user_id, dec!(-1.99), Some("Apple Itunes".into()), day(2015, 8, 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_the_demo_feed_for_any_user() {
        let source = StandardTransactionSource::new();

        let transactions = source.latest_transactions_for_user(42).await.unwrap();

        assert_eq!(transactions.len(), 11);
        assert!(transactions.iter().all(|t| t.user_id == 42));
        // Bank-feed order is preserved as-is, ids are not sorted by date
        let ids: Vec<i64> = transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=11).collect::<Vec<i64>>());
    }
}
