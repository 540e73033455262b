use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Transaction source unavailable: {0}")]
    SourceUnavailable(String),
}
