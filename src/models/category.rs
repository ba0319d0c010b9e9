use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of budget categories, in report output order.
///
/// Each category carries a recommended share of monthly income; the shares
/// sum to 1.0 across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rent,
    Groceries,
    Utilities,
    Entertainment,
    Transportation,
    DiningOut,
    Shopping,
    Health,
    Travel,
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Transportation => "Transportation",
            Self::DiningOut => "Dining Out",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// Recommended fraction of monthly income for this category.
    pub fn allocation(&self) -> f64 {
        match self {
            Self::Rent => 0.30,
            Self::Groceries => 0.12,
            Self::Utilities => 0.08,
            Self::Entertainment => 0.05,
            Self::Transportation => 0.15,
            Self::DiningOut => 0.06,
            Self::Shopping => 0.05,
            Self::Health => 0.05,
            Self::Travel => 0.04,
            Self::Other => 0.10,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Groceries,
            Self::Utilities,
            Self::Entertainment,
            Self::Transportation,
            Self::DiningOut,
            Self::Shopping,
            Self::Health,
            Self::Travel,
            Self::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One user-declared spending total for a named category.
///
/// The name is free-form at the boundary; entries whose name is not in the
/// fixed table are excluded from the per-category analysis but still count
/// toward total spending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub sum: f64,
}
