/// Build the ordered recommendation list for a savings picture.
///
/// The first two messages are the verdict for the savings tier, picked by
/// the first matching rule. The optimization and emergency-fund messages
/// are appended independently of the tier. Callers pass the raw figures;
/// formatting to cents happens here.
pub fn savings_recommendations(
    monthly_income: f64,
    current_savings: f64,
    projected_savings: f64,
    savings_rate: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if current_savings < 0.0 {
        let deficit = current_savings.abs();
        let cut_target = deficit + monthly_income * 0.10;
        recommendations.push(format!(
            "You're spending €{:.2} more than you earn each month. Consider reducing expenses immediately.",
            deficit
        ));
        recommendations.push(format!(
            "Cut monthly spending by €{:.2} to break even and still save 10% of your income.",
            cut_target
        ));
    } else if savings_rate < 10.0 {
        let target = monthly_income * 0.10;
        let shortfall = target - current_savings;
        recommendations.push(format!(
            "You're saving €{:.2} per month, below the recommended 10% of your income.",
            current_savings
        ));
        recommendations.push(format!(
            "Save an additional €{:.2} per month to reach the recommended €{:.2}.",
            shortfall, target
        ));
    } else if savings_rate < 20.0 {
        let gap = monthly_income * 0.20 - current_savings;
        recommendations.push(format!(
            "Good savings rate! You're putting aside €{:.2} per month.",
            current_savings
        ));
        recommendations.push(format!(
            "Save €{:.2} more per month (€{:.2} per year) to reach 20% of your income for better financial security.",
            gap,
            gap * 12.0
        ));
    } else {
        let surplus = current_savings - monthly_income * 0.20;
        recommendations.push(format!(
            "Excellent savings rate! You're on track to save €{:.2} per year.",
            current_savings * 12.0
        ));
        recommendations.push(format!(
            "Consider investing the €{:.2} per month above the 20% benchmark for long-term wealth building.",
            surplus
        ));
    }

    if projected_savings > current_savings {
        let additional = projected_savings - current_savings;
        recommendations.push(format!(
            "You could potentially save an additional €{:.2} per month (€{:.2} per year) by following the recommended budget allocations.",
            additional,
            additional * 12.0
        ));
    }

    if current_savings > 0.0 {
        let emergency_target = monthly_income * 6.0;
        let months_to_target = (emergency_target / current_savings).ceil() as i64;
        recommendations.push(format!(
            "Build an emergency fund of €{:.2} (six months of income). At your current savings rate you'd reach it in {} months.",
            emergency_target, months_to_target
        ));
    }

    recommendations
}
