//! Fixed bonus per year of work.
//!
//! Departments with a [`BonusKind::FixedBonus`] policy pay their bonus value
//! once for every completed year of work, up to [`MAX_BONUS_YEARS`] years.

use rust_decimal::Decimal;

use crate::models::{AdditionResult, BonusKind, Employee};

use super::BonusStrategy;

/// Years of work after which the fixed bonus stops growing.
pub const MAX_BONUS_YEARS: u32 = 10;

/// Strategy for [`BonusKind::FixedBonus`] departments.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use payroll_report::calculation::{BonusStrategy, FixedBonusStrategy};
/// use payroll_report::models::{BonusKind, Department, Employee};
/// use rust_decimal::Decimal;
///
/// let department = Arc::new(Department::new("Engineering", BonusKind::FixedBonus, 500));
/// let employee = Employee::new("John", "Doe", 10000, Some(5), department);
///
/// let result = FixedBonusStrategy.calculate(&employee);
/// assert_eq!(result.additional_amount(), Decimal::from(2500));
/// assert_eq!(result.final_remuneration(), Decimal::from(12500));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBonusStrategy;

impl BonusStrategy for FixedBonusStrategy {
    fn supports(&self, kind: BonusKind) -> bool {
        kind == BonusKind::FixedBonus
    }

    fn calculate(&self, employee: &Employee) -> AdditionResult {
        let department = &employee.department;
        let years = employee.years_of_work_or_zero().min(MAX_BONUS_YEARS);

        let additional_amount = Decimal::from(years) * Decimal::from(department.bonus_value);

        AdditionResult::new(
            Decimal::from(employee.remuneration_base),
            additional_amount,
            department.bonus_kind.label(),
        )
    }
}
