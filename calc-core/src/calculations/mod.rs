//! Calculation logic for the salary, budget and transfer calculators.
//!
//! Every calculator borrows its reference table and exposes a single
//! `calculate` entry point that is total over its input domain.

pub mod budget;
pub mod common;
pub mod salary;
pub mod transfer;

pub use budget::{BudgetEstimator, BudgetInput};
pub use salary::{MAX_GROSS_INCOME, SalaryCalculator, SalaryInput};
pub use transfer::{MAX_TRANSFER_AMOUNT, TransferComparator, TransferInput};
