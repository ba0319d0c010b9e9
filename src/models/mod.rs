pub mod category;
pub mod report;
pub mod transaction;

pub use category::{Category, CategorySpending};
pub use report::{BudgetLine, BudgetReport, SavingsSummary, Timeframe};
pub use transaction::{Transaction, TransactionKind};
