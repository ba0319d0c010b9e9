use crate::models::Transaction;

/// Income detected in a transaction set.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeSummary {
    pub total_income: f64,
    pub credit_transactions: usize,
}

/// Sum every positive credit amount in the set.
///
/// Only rows whose type is exactly `credit` with a parseable, strictly
/// positive amount count as income. Everything else is ignored.
pub fn estimate_income(transactions: &[Transaction]) -> IncomeSummary {
    let mut total_income = 0.0;
    let mut credit_transactions = 0;

    for tx in transactions {
        if let Some(amount) = tx.amount {
            if tx.kind.is_credit() && amount > 0.0 {
                total_income += amount;
                credit_transactions += 1;
            }
        }
    }

    IncomeSummary {
        total_income,
        credit_transactions,
    }
}
