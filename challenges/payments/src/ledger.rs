use std::fs;
use std::path::Path;

use log::warn;

use crate::amount::Amount;
use crate::config::DriverConfig;
use crate::error::PaymentError;

/// The parsed contents of one input file: the bank transfer on the first line,
/// then one due payment per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ledger {
    /// `None` when the input has no amount at all.
    pub bank_transfer: Option<Amount>,
    pub due_payments: Vec<Amount>,
}

impl Ledger {
    pub fn read(path: &Path, config: &DriverConfig) -> Result<Ledger, PaymentError> {
        let text = fs::read_to_string(path).map_err(|source| PaymentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ledger::parse(&text, config)
    }

    /// Blank lines are ignored and line numbers in errors are 1-based.
    pub fn parse(text: &str, config: &DriverConfig) -> Result<Ledger, PaymentError> {
        let mut ledger = Ledger::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let number = index + 1;
            let amount = parse_line(number, line)?;

            match ledger.bank_transfer {
                None => {
                    if amount > config.max_amount {
                        return Err(PaymentError::AboveMaximum {
                            amount,
                            max: config.max_amount,
                        });
                    }
                    ledger.bank_transfer = Some(amount);
                }
                // a due payment above the max can't be part of any accepted transfer.
                Some(_) if amount > config.max_amount => {
                    warn!("line {}: skipping due payment {} above {}", number, amount, config.max_amount);
                }
                Some(_) => ledger.due_payments.push(amount),
            }
        }
        Ok(ledger)
    }
}

fn parse_line(number: usize, line: &str) -> Result<Amount, PaymentError> {
    let amount: Amount = line.parse().map_err(|_| PaymentError::Parse {
        line: number,
        text: line.to_string(),
    })?;
    if amount.is_negative() {
        return Err(PaymentError::Negative {
            line: number,
            amount,
        });
    }
    Ok(amount)
}
