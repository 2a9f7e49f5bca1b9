//! Department model and bonus policy kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The bonus policy a department applies to its employees.
///
/// Stored values are snake case (`fixed_bonus`, `percent_bonus`); the
/// report exposes the upper case [`label`](BonusKind::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    /// A fixed currency amount per year of tenure, capped at ten years.
    FixedBonus,
    /// A percentage of the employee's base remuneration.
    PercentBonus,
}

impl BonusKind {
    /// Returns the label used in report rows and error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::models::BonusKind;
    ///
    /// assert_eq!(BonusKind::FixedBonus.label(), "FIXED_BONUS");
    /// assert_eq!(BonusKind::PercentBonus.label(), "PERCENT_BONUS");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            BonusKind::FixedBonus => "FIXED_BONUS",
            BonusKind::PercentBonus => "PERCENT_BONUS",
        }
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A department and the bonus policy it grants.
///
/// `bonus_value` is read according to `bonus_kind`: a currency amount per
/// year for [`BonusKind::FixedBonus`], percentage points for
/// [`BonusKind::PercentBonus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: Uuid,
    /// Department name, unique within a dataset.
    pub name: String,
    /// The bonus policy kind.
    pub bonus_kind: BonusKind,
    /// The bonus policy value.
    pub bonus_value: u32,
}

impl Department {
    /// Creates a department with a freshly generated id.
    pub fn new(name: impl Into<String>, bonus_kind: BonusKind, bonus_value: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bonus_kind,
            bonus_value,
        }
    }
}
