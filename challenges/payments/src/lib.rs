pub mod amount;
pub mod app;
pub mod batch;
pub mod config;
pub mod error;
pub mod ledger;
pub mod memo;
pub mod report;
pub mod search;

pub use amount::{Amount, ParseAmountError};
pub use app::{find_payments, solve_file};
pub use batch::{BatchJob, BatchResult, run_batch};
pub use config::DriverConfig;
pub use error::PaymentError;
pub use ledger::Ledger;
pub use memo::Outcome;
pub use search::{Search, SearchStats, find_subset, try_find_subset};
