use chrono::Datelike;

use crate::error::{AppError, AppResult};
use crate::models::{Timeframe, Transaction};

/// Derive the calendar span covered by the transactions.
///
/// Rows without a parseable date are skipped. `months_analyzed` is the
/// inclusive whole-month count between the earliest and latest date, never
/// below 1, so later divisions are always safe.
pub fn estimate_date_range(transactions: &[Transaction]) -> AppResult<Timeframe> {
    let dates = transactions.iter().filter_map(|tx| tx.date);
    let (start, end) = match (dates.clone().min(), dates.max()) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(AppError::NotComputable(
                "No parseable transaction dates".to_string(),
            ))
        }
    };

    let span = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32) + 1;
    let months_analyzed = span.max(1) as u32;

    Ok(Timeframe {
        start_date: start,
        end_date: end,
        months_analyzed,
    })
}
