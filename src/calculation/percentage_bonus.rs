//! Percentage bonus on base remuneration.

use rust_decimal::Decimal;

use crate::models::{AdditionResult, BonusKind, Employee};

use super::BonusStrategy;

/// Strategy for [`BonusKind::PercentBonus`] departments.
///
/// The addition is `base × bonus_value / 100`, computed in decimal so
/// fractional results are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageBonusStrategy;

impl BonusStrategy for PercentageBonusStrategy {
    fn supports(&self, kind: BonusKind) -> bool {
        kind == BonusKind::PercentBonus
    }

    fn calculate(&self, employee: &Employee) -> AdditionResult {
        let department = &employee.department;
        let base = Decimal::from(employee.remuneration_base);

        // u64 × u32 fits in the 96-bit mantissa.
        let additional_amount =
            base * Decimal::from(department.bonus_value) / Decimal::ONE_HUNDRED;

        AdditionResult::new(base, additional_amount, department.bonus_kind.label())
    }
}
