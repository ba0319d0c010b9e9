use std::collections::HashMap;

use crate::models::{BudgetLine, Category, CategorySpending};

use super::round2;

/// Compare declared spending against the recommended allocation for each
/// fixed category, in table order.
///
/// Categories the user did not declare count as zero spending. Declared
/// names outside the fixed table produce no line here; they only show up
/// in the report's total. When the same name appears twice, the last
/// entry wins.
pub fn allocate_budget(
    category_spending: &[CategorySpending],
    monthly_income: f64,
) -> Vec<BudgetLine> {
    let mut spending_map: HashMap<&str, f64> = HashMap::new();
    for entry in category_spending {
        spending_map.insert(entry.category.as_str(), entry.sum);
    }

    Category::all()
        .iter()
        .map(|category| {
            let budget_amount = monthly_income * category.allocation();
            let actual_spending = spending_map.get(category.name()).copied().unwrap_or(0.0);
            let difference = actual_spending - budget_amount;

            BudgetLine {
                category: category.name(),
                budget_amount: round2(budget_amount),
                actual_spending,
                difference: round2(difference),
                // The flag follows the raw difference, not the rounded one
                is_over_budget: difference > 0.0,
            }
        })
        .collect()
}
