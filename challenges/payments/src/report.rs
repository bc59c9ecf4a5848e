use std::fs;
use std::path::Path;

use crate::amount::Amount;
use crate::error::PaymentError;
use crate::memo::Outcome;

pub const NO_SOLUTION: &str = "NO SOLUTION";

/// Guards the integration: the payments found must add up to the transfer.
pub fn check(bank_transfer: Amount, found: &[Amount]) -> Result<(), PaymentError> {
    let actual: Amount = found.iter().sum();
    if actual != bank_transfer {
        return Err(PaymentError::WrongResult {
            expected: bank_transfer,
            actual,
        });
    }
    Ok(())
}

/// One payment per line, in the order found. An empty subset renders as
/// nothing at all.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        None => format!("{}\n", NO_SOLUTION),
        Some(found) => found.iter().map(|amount| format!("{}\n", amount)).collect(),
    }
}

pub fn write(path: &Path, outcome: &Outcome) -> Result<(), PaymentError> {
    fs::write(path, render(outcome)).map_err(|source| PaymentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
