use chrono::NaiveDate;

/// Movement direction as declared by the CSV `type` column.
///
/// Matching is case-sensitive: only a literal `credit` counts as income,
/// anything else is preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Credit,
    Debit,
    Other(String),
}

impl TransactionKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "credit" => Self::Credit,
            "debit" => Self::Debit,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

/// One parsed transaction row.
///
/// `date` and `amount` are `None` when the raw field does not parse. Such
/// rows stay in the set; the estimators that need the missing field skip
/// them instead of failing the whole analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Option<f64>,
    pub kind: TransactionKind,
    pub account_number: String,
    pub currency: String,
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|a| a.is_finite())
}

impl Transaction {
    /// Build a transaction from a validated seven-field row: a leading
    /// blank index column, then date, description, amount, type,
    /// account_number and currency.
    pub fn from_row(row: &[String]) -> Self {
        let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        Self {
            date: parse_date(field(1)),
            description: field(2).to_string(),
            amount: parse_amount(field(3)),
            kind: TransactionKind::parse(field(4)),
            account_number: field(5).to_string(),
            currency: field(6).to_string(),
        }
    }
}
