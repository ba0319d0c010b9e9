use crate::error::{AppError, AppResult};
use crate::models::{CategorySpending, SavingsSummary};

use super::income::IncomeSummary;
use super::{recommendations, round2};

/// Derive the monthly savings picture from detected income and declared
/// spending.
///
/// The recommendation generator receives the raw figures; rounding to
/// cents happens only on the emitted summary fields.
pub fn analyze_savings(
    income: &IncomeSummary,
    category_spending: &[CategorySpending],
    months_analyzed: u32,
) -> AppResult<SavingsSummary> {
    let monthly_income = income.total_income / months_analyzed as f64;
    if monthly_income <= 0.0 {
        return Err(AppError::NotComputable(
            "No credit income found in the transaction data".to_string(),
        ));
    }

    let total_spending: f64 = category_spending.iter().map(|c| c.sum).sum();
    let monthly_spending = total_spending / months_analyzed as f64;
    let current_monthly_savings = monthly_income - monthly_spending;

    // Recommended spending is 90% of income, leaving 10% for savings
    let recommended_spending = monthly_income * 0.9;
    let projected_monthly_savings = monthly_income - recommended_spending;

    let savings_rate = current_monthly_savings / monthly_income * 100.0;

    let recommendations = recommendations::savings_recommendations(
        monthly_income,
        current_monthly_savings,
        projected_monthly_savings,
        savings_rate,
    );

    Ok(SavingsSummary {
        monthly_income: round2(monthly_income),
        total_spending: round2(monthly_spending),
        current_monthly_savings: round2(current_monthly_savings),
        projected_monthly_savings: round2(projected_monthly_savings),
        savings_rate: round2(savings_rate),
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(total: f64) -> IncomeSummary {
        IncomeSummary {
            total_income: total,
            credit_transactions: 1,
        }
    }

    fn spending(entries: &[(&str, f64)]) -> Vec<CategorySpending> {
        entries
            .iter()
            .map(|(category, sum)| CategorySpending {
                category: category.to_string(),
                sum: *sum,
            })
            .collect()
    }

    #[test]
    fn test_monthly_figures() {
        let summary =
            analyze_savings(&income(6000.0), &spending(&[("Rent", 2400.0)]), 3).unwrap();

        assert_eq!(summary.monthly_income, 2000.0);
        assert_eq!(summary.total_spending, 800.0);
        assert_eq!(summary.current_monthly_savings, 1200.0);
        assert_eq!(summary.projected_monthly_savings, 200.0);
        assert_eq!(summary.savings_rate, 60.0);
    }

    #[test]
    fn test_spending_sums_whole_list() {
        // Unknown categories still count toward spending
        let summary = analyze_savings(
            &income(2000.0),
            &spending(&[("Rent", 500.0), ("Crypto", 300.0)]),
            1,
        )
        .unwrap();

        assert_eq!(summary.total_spending, 800.0);
        assert_eq!(summary.current_monthly_savings, 1200.0);
    }

    #[test]
    fn test_negative_savings_rate() {
        let summary =
            analyze_savings(&income(1000.0), &spending(&[("Rent", 1500.0)]), 1).unwrap();

        assert_eq!(summary.current_monthly_savings, -500.0);
        assert_eq!(summary.savings_rate, -50.0);
        assert!(summary.recommendations[0].contains("€500.00"));
    }

    #[test]
    fn test_zero_income_is_not_computable() {
        let err = analyze_savings(&income(0.0), &spending(&[("Rent", 100.0)]), 1).unwrap_err();
        assert!(matches!(err, AppError::NotComputable(_)));
    }

    #[test]
    fn test_repeating_fraction_rounding() {
        // 2000 over 3 months: 666.67 income, 100 spending, 566.67 savings
        let summary =
            analyze_savings(&income(2000.0), &spending(&[("Rent", 300.0)]), 3).unwrap();

        assert_eq!(summary.monthly_income, 666.67);
        assert_eq!(summary.total_spending, 100.0);
        assert_eq!(summary.current_monthly_savings, 566.67);
        assert_eq!(summary.projected_monthly_savings, 66.67);
        assert_eq!(summary.savings_rate, 85.0);
    }

    #[test]
    fn test_recommendations_use_raw_figures() {
        // Raw savings 566.666..., annualized 6800.0; rounding first would
        // give 566.67 * 12 = 6800.04
        let summary =
            analyze_savings(&income(2000.0), &spending(&[("Rent", 300.0)]), 3).unwrap();

        let excellent = &summary.recommendations[0];
        assert!(excellent.contains("€6800.00"));
    }
}
