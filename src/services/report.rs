use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{BudgetReport, Transaction};
use crate::store::SessionRecord;

use super::{budget, date_range, income, savings};

/// Run the full analysis over a stored session and assemble the report.
///
/// The grid in `record` still carries its header row; everything after it
/// is treated as transaction data.
pub fn analyze_budget(session_id: Uuid, record: &SessionRecord) -> AppResult<BudgetReport> {
    let data_rows = record.rows.get(1..).unwrap_or(&[]);
    if data_rows.is_empty() {
        return Err(AppError::EmptyTransactions);
    }

    let transactions: Vec<Transaction> = data_rows
        .iter()
        .map(|row| Transaction::from_row(row))
        .collect();

    let income_summary = income::estimate_income(&transactions);
    let timeframe = date_range::estimate_date_range(&transactions)?;

    let monthly_income = income_summary.total_income / timeframe.months_analyzed as f64;
    let budget_analysis = budget::allocate_budget(&record.category_spending, monthly_income);

    let savings_analysis = savings::analyze_savings(
        &income_summary,
        &record.category_spending,
        timeframe.months_analyzed,
    )?;

    let total_spending = record.category_spending.iter().map(|c| c.sum).sum();

    debug!(
        transaction_count = transactions.len(),
        credit_transactions = income_summary.credit_transactions,
        months_analyzed = timeframe.months_analyzed,
        "Budget analysis completed"
    );

    Ok(BudgetReport {
        uuid: session_id,
        analysis_date: Utc::now(),
        total_income: income_summary.total_income,
        total_spending,
        budget_analysis,
        savings_analysis,
        timeframe,
    })
}
