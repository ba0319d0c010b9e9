use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Allocated-versus-actual comparison for one fixed category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub category: &'static str,
    pub budget_amount: f64,
    pub actual_spending: f64,
    pub difference: f64,
    pub is_over_budget: bool,
}

/// Monthly savings picture derived from income and declared spending.
///
/// `total_spending` here is the monthly average, unlike the raw total on
/// [`BudgetReport`]. All monetary fields are rounded to 2 decimals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub monthly_income: f64,
    pub total_spending: f64,
    pub current_monthly_savings: f64,
    pub projected_monthly_savings: f64,
    pub savings_rate: f64,
    pub recommendations: Vec<String>,
}

/// Calendar span covered by the analyzed transactions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeframe {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub months_analyzed: u32,
}

/// The full analysis result returned by the feedback endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub uuid: Uuid,
    pub analysis_date: DateTime<Utc>,
    pub total_income: f64,
    pub total_spending: f64,
    pub budget_analysis: Vec<BudgetLine>,
    pub savings_analysis: SavingsSummary,
    pub timeframe: Timeframe,
}
