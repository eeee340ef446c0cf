use crate::accounts::AccountId;
use crate::transactions::TransactionId;
use rust_decimal::Decimal;

/// Every operation validates before it mutates, so receiving one of
/// these means the ledger is exactly as it was before the call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid amount {0}: must be strictly positive")]
    InvalidAmount(Decimal),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("no such account: {0}")]
    AccountNotFound(AccountId),

    #[error("no such transaction: {0}")]
    TransactionNotFound(TransactionId),

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
