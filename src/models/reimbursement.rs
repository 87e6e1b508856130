//! Reimbursement models.
//!
//! Reimbursements are expenses claimed alongside salary. They are independent
//! of projects and are only ever summed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReimbursementCategory {
    /// Fares, fuel, parking.
    Transportation,
    /// Food and drink.
    Meals,
    /// Office supplies.
    Supplies,
    /// Phone and internet.
    Communication,
    /// Anything else.
    Other,
}

impl ReimbursementCategory {
    /// Returns the human-readable label used in breakdowns.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_calculator::models::ReimbursementCategory;
    ///
    /// assert_eq!(ReimbursementCategory::Supplies.label(), "Office Supplies");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            ReimbursementCategory::Transportation => "Transportation",
            ReimbursementCategory::Meals => "Meals",
            ReimbursementCategory::Supplies => "Office Supplies",
            ReimbursementCategory::Communication => "Communication",
            ReimbursementCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ReimbursementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reimbursable expense.
///
/// # Example
///
/// ```
/// use salary_calculator::models::{ReimbursementCategory, ReimbursementItem};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let item = ReimbursementItem {
///     id: Uuid::new_v4(),
///     description: "Taxi to client site".to_string(),
///     amount: Decimal::new(15000, 2),
///     date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     category: ReimbursementCategory::Transportation,
/// };
/// assert_eq!(item.amount.to_string(), "150.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementItem {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// Free-text description.
    pub description: String,
    /// Amount claimed; never negative once accepted by the ledger.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Expense category.
    pub category: ReimbursementCategory,
}

/// The user-editable fields of a reimbursement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementDraft {
    /// Free-text description.
    pub description: String,
    /// Amount claimed.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Expense category.
    pub category: ReimbursementCategory,
}
