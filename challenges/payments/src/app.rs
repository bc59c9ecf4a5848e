use std::path::Path;

use log::info;

use crate::config::DriverConfig;
use crate::error::PaymentError;
use crate::ledger::Ledger;
use crate::memo::Outcome;
use crate::report;
use crate::search;

/// Searches the ledger's due payments for its bank transfer and verifies the
/// sum of whatever comes back.
pub fn find_payments(ledger: &Ledger) -> Result<Outcome, PaymentError> {
    let outcome = search::try_find_subset(ledger.bank_transfer, Some(ledger.due_payments.as_slice()))?;

    if let (Some(bank_transfer), Some(found)) = (ledger.bank_transfer, &outcome) {
        report::check(bank_transfer, found)?;
        info!("bank transfer {} is paid by {} due payments", bank_transfer, found.len());
    }
    Ok(outcome)
}

/// Reads `input`, searches, and writes the rendered result to `output`.
pub fn solve_file(input: &Path, output: &Path, config: &DriverConfig) -> Result<Outcome, PaymentError> {
    info!("input file is {}", input.display());
    let ledger = Ledger::read(input, config)?;

    let outcome = find_payments(&ledger)?;

    info!("output file is {}", output.display());
    report::write(output, &outcome)?;
    Ok(outcome)
}
