use std::path::PathBuf;

use thiserror::Error;

use crate::amount::Amount;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("line {line}: can't parse amount {text:?}")]
    Parse { line: usize, text: String },

    /// A mandatory argument was absent at the search boundary.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("bank transfer {amount} is above the max accepted amount {max}")]
    AboveMaximum { amount: Amount, max: Amount },

    #[error("line {line}: negative amount {amount}")]
    Negative { line: usize, amount: Amount },

    #[error("wrong result: found payments sum to {actual}, expected {expected}")]
    WrongResult { expected: Amount, actual: Amount },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("batch job failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("batch closed: {0}")]
    Closed(#[from] tokio::sync::AcquireError),
}
