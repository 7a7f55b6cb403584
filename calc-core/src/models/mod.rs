mod automation_tier;
mod budget_estimate;
mod deduction_result;
mod tax_bracket;
mod transfer_quote;

pub use automation_tier::AutomationTier;
pub use budget_estimate::{BudgetEstimate, EquipmentItem};
pub use deduction_result::DeductionResult;
pub use tax_bracket::TaxBracket;
pub use transfer_quote::{TransferComparison, TransferQuote};
