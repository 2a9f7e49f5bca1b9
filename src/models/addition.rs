//! The result of applying a bonus policy to one employee.

use rust_decimal::Decimal;

/// The addition computed for one employee by a bonus strategy.
///
/// `final_remuneration` is always `base + additional_amount`; the only
/// constructor enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionResult {
    additional_amount: Decimal,
    bonus_kind: String,
    final_remuneration: Decimal,
}

impl AdditionResult {
    /// Builds a result from the base remuneration and the computed addition.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::models::AdditionResult;
    /// use rust_decimal::Decimal;
    ///
    /// let result = AdditionResult::new(Decimal::from(10000), Decimal::from(2500), "FIXED_BONUS");
    /// assert_eq!(result.final_remuneration(), Decimal::from(12500));
    /// ```
    pub fn new(base: Decimal, additional_amount: Decimal, bonus_kind: impl Into<String>) -> Self {
        Self {
            additional_amount,
            bonus_kind: bonus_kind.into(),
            final_remuneration: base + additional_amount,
        }
    }

    /// The computed addition.
    pub fn additional_amount(&self) -> Decimal {
        self.additional_amount
    }

    /// Label of the bonus kind that produced the addition.
    pub fn bonus_kind(&self) -> &str {
        &self.bonus_kind
    }

    /// Base remuneration plus the addition.
    pub fn final_remuneration(&self) -> Decimal {
        self.final_remuneration
    }
}
